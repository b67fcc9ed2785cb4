use thiserror::Error;

use crate::domain::id::SchedulerId;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    /// A scheduler already has an owning master; it must be released
    /// (by assigning no master) before another master can claim it.
    #[error("scheduler {schedulerid} is already claimed by another master")]
    SchedulerAlreadyClaimed { schedulerid: SchedulerId },

    /// The resource path was not an ordered sequence of segments.
    #[error("path must be a tuple: {reason}")]
    InvalidPath { reason: String },

    #[error("no endpoint for path {path}")]
    NotFound { path: String },

    #[error("action '{action}' is not supported on {path}")]
    InvalidControl { action: String, path: String },

    #[error("sourcestamp {0} does not exist")]
    UnknownSourceStamp(u64),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
