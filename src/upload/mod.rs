//! Sequential uploader
//!
//! Drives the batch: derives a remote key for each collected file, puts its
//! full contents to the object store, logs a success notice, and pauses a
//! fixed interval before the next transfer. The pause is a crude throttle
//! against rate limits; there is no retry and the first failure aborts the
//! remaining batch.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::Bytes;
use thiserror::Error;

use crate::config::{Config, NamingPolicy};
use crate::s3::{ObjectStore, StoreError};

/// A failed upload, carrying enough context to report which file broke the
/// batch and how far the batch got.
#[derive(Error, Debug)]
#[error("Error uploading image {file_name} to {bucket}: {source}")]
pub struct UploadError {
    /// Base name of the file that failed
    pub file_name: String,
    /// Destination bucket
    pub bucket: String,
    /// Files successfully uploaded before the failure
    pub uploaded: usize,
    #[source]
    pub source: UploadErrorSource,
}

/// What went wrong for the failing file
#[derive(Error, Debug)]
pub enum UploadErrorSource {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Totals for a completed batch
#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub uploaded: usize,
    pub bytes: u64,
}

/// Sequential uploader over an object store
pub struct Uploader<S> {
    store: S,
    config: Config,
}

impl<S: ObjectStore> Uploader<S> {
    pub fn new(store: S, config: Config) -> Self {
        Self { store, config }
    }

    /// Consume the uploader, returning the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Derive the remote object key for a local base file name.
    fn object_key(&self, file_name: &str) -> String {
        match self.config.naming {
            NamingPolicy::RandomPrefix => format!("{}_{}", uuid::Uuid::new_v4(), file_name),
            NamingPolicy::Original => file_name.to_string(),
        }
    }

    /// Upload every path in order, pausing between transfers.
    ///
    /// On failure the error names the file, the bucket, and how many files
    /// had already been uploaded; no further paths are attempted.
    pub async fn upload_all(&self, paths: &[PathBuf]) -> Result<BatchSummary, UploadError> {
        let mut summary = BatchSummary::default();

        for (i, path) in paths.iter().enumerate() {
            // Bound before anything fallible, so a failure on the very first
            // path still reports its name.
            let file_name = base_name(path);

            let body = tokio::fs::read(path)
                .await
                .map(Bytes::from)
                .map_err(|e| self.fail(&file_name, summary.uploaded, e.into()))?;
            let bytes = body.len() as u64;

            let key = self.object_key(&file_name);
            let outcome = self
                .store
                .put_object(&key, body)
                .await
                .map_err(|e| self.fail(&file_name, summary.uploaded, e.into()))?;

            summary.uploaded += 1;
            summary.bytes += bytes;

            tracing::info!(
                key = %key,
                bytes = outcome.bytes_written,
                "{} successfully uploaded to {}",
                file_name,
                self.store.bucket()
            );

            if i + 1 < paths.len() {
                tokio::time::sleep(Duration::from_secs(self.config.pause_secs)).await;
            }
        }

        Ok(summary)
    }

    fn fail(&self, file_name: &str, uploaded: usize, source: UploadErrorSource) -> UploadError {
        UploadError {
            file_name: file_name.to_string(),
            bucket: self.store.bucket().to_string(),
            uploaded,
            source,
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
