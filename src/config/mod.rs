//! Configuration module for imgsync
//!
//! Every knob has a default matching the tool's historical behavior, so a run
//! with no config file behaves exactly like the fixed-constant version.
//! Optional YAML files are loaded with `${VAR}` environment expansion.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// File name of the optional image bundle looked for in the scan directory.
pub const BUNDLE_NAME: &str = "Images.zip";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// How remote object keys are derived from local file names.
///
/// The two policies differ under repeated runs: `RandomPrefix` never
/// collides but accumulates duplicate objects, `Original` overwrites the
/// same object per file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// `{uuid-v4}_{file_name}`
    RandomPrefix,
    /// The plain base file name
    Original,
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Destination bucket name
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// Seconds to wait between consecutive uploads
    #[serde(default = "default_pause_secs")]
    pub pause_secs: u64,

    /// File name suffixes treated as images (matched case-sensitively)
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Object key derivation policy
    #[serde(default = "default_naming")]
    pub naming: NamingPolicy,

    #[serde(default)]
    pub s3: S3Config,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: default_bucket(),
            pause_secs: default_pause_secs(),
            extensions: default_extensions(),
            naming: default_naming(),
            s3: S3Config::default(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// `${VAR}` references are substituted from the environment before
    /// parsing; unset variables keep their placeholder so the parse or
    /// validation error points at the offending value.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&expand_env(&raw))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Bucket name cannot be empty".into(),
            ));
        }

        if self.extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "At least one image extension must be configured".into(),
            ));
        }

        for ext in &self.extensions {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid extension '{}': must start with a dot",
                    ext
                )));
            }
        }

        Ok(())
    }
}

fn default_bucket() -> String {
    "store-device-images-s2110849".to_string()
}

fn default_pause_secs() -> u64 {
    1
}

fn default_extensions() -> Vec<String> {
    [".jpg", ".jpeg", ".png", ".gif"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_naming() -> NamingPolicy {
    NamingPolicy::RandomPrefix
}

/// S3 backend configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    #[serde(default = "default_region")]
    pub region: String,

    /// Custom endpoint (MinIO etc.); enables path-style addressing
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for S3Config {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Splice environment values over `${VAR}` occurrences in the raw YAML.
fn expand_env(raw: &str) -> String {
    let pattern = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut expanded = String::with_capacity(raw.len());
    let mut tail = 0;

    for caps in pattern.captures_iter(raw) {
        let whole = caps.get(0).unwrap();
        expanded.push_str(&raw[tail..whole.start()]);
        match std::env::var(&caps[1]) {
            Ok(value) => expanded.push_str(&value),
            Err(_) => expanded.push_str(whole.as_str()),
        }
        tail = whole.end();
    }
    expanded.push_str(&raw[tail..]);

    expanded
}
