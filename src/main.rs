//! imgsync - Sequential directory-to-S3 image sync
//!
//! Scans a directory for images, extracting a bundled `Images.zip` first if
//! one is present, and uploads each file to the configured bucket.

use clap::Parser;
use imgsync::{archive, config::Config, s3::S3Store, scan, upload::Uploader};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// imgsync - Upload images from a directory to an S3 bucket
#[derive(Parser, Debug)]
#[command(name = "imgsync")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory containing images
    directory: PathBuf,

    /// Path to an optional YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting imgsync v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration (defaults when no file is given)
    let config = match &args.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("Loaded configuration from {:?}", path);
            config
        }
        None => Config::default(),
    };

    if let Some(entries) = archive::extract_bundle(&args.directory)? {
        info!(entries, "Extracted bundled archive");
    }

    let images = scan::collect_images(&args.directory, &config.extensions)?;
    info!(
        count = images.len(),
        directory = %args.directory.display(),
        "Collected image paths"
    );

    let store = S3Store::connect(&config).await;
    let uploader = Uploader::new(store, config);
    let summary = uploader.upload_all(&images).await?;

    info!(
        uploaded = summary.uploaded,
        bytes = summary.bytes,
        "All images uploaded successfully"
    );

    Ok(())
}
