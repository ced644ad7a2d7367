//! S3 object store client
//!
//! `ObjectStore` is the seam the uploader depends on, so batch semantics can
//! be tested against a fake backend. `S3Store` is the production
//! implementation over the AWS SDK, resolving credentials through the
//! standard discovery chain.

use async_trait::async_trait;
use aws_sdk_s3::config::Region;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use thiserror::Error;

use crate::config::Config;

/// Object store errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("PutObject failed: {0}")]
    PutObject(String),
}

/// Outcome of a single successful put
#[derive(Debug, Clone)]
pub struct PutObjectOutcome {
    pub etag: Option<String>,
    pub bytes_written: u64,
}

/// Destination for uploaded objects
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Store `body` under `key` in the backing bucket.
    async fn put_object(&self, key: &str, body: Bytes) -> Result<PutObjectOutcome, StoreError>;

    /// Name of the destination bucket.
    fn bucket(&self) -> &str;
}

/// S3-backed object store
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3Store {
    /// Connect using ambient credentials (environment, profile, IMDS).
    ///
    /// An endpoint override in the config switches the client to path-style
    /// addressing, which MinIO and similar S3-compatible stores expect.
    pub async fn connect(config: &Config) -> Self {
        let mut loader = aws_config::from_env().region(Region::new(config.s3.region.clone()));
        if let Some(endpoint) = &config.s3.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let aws_config = loader.load().await;

        let mut builder = aws_sdk_s3::config::Builder::from(&aws_config);
        if config.s3.endpoint.is_some() {
            builder = builder.force_path_style(true);
        }
        let client = aws_sdk_s3::Client::from_conf(builder.build());

        Self {
            client,
            bucket: config.bucket.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3Store {
    async fn put_object(&self, key: &str, body: Bytes) -> Result<PutObjectOutcome, StoreError> {
        let bytes_written = body.len() as u64;

        let response = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .send()
            .await
            .map_err(|e| StoreError::PutObject(e.to_string()))?;

        Ok(PutObjectOutcome {
            etag: response.e_tag().map(str::to_string),
            bytes_written,
        })
    }

    fn bucket(&self) -> &str {
        &self.bucket
    }
}
