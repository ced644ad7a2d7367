//! imgsync Library
//!
//! Sequential directory-to-S3 image synchronization.
//!
//! Scans a local directory for image files, optionally extracting a bundled
//! `Images.zip` archive found in that directory first, and uploads each
//! collected file to a fixed S3 bucket with a pause between transfers.
//!
//! # Example
//!
//! ```no_run
//! use imgsync::{archive, config::Config, s3::S3Store, scan, upload::Uploader};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::default();
//!     archive::extract_bundle("./photos")?;
//!     let images = scan::collect_images("./photos", &config.extensions)?;
//!     let store = S3Store::connect(&config).await;
//!     let summary = Uploader::new(store, config).upload_all(&images).await?;
//!     println!("uploaded {} files", summary.uploaded);
//!     Ok(())
//! }
//! ```

pub mod archive;
pub mod config;
pub mod s3;
pub mod scan;
pub mod upload;

// Re-export commonly used types
pub use config::Config;
pub use upload::Uploader;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
