//! Read-side port of the data API.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::mq::{Callback, Consumer};
use crate::error::Result;

/// Options accompanying a `get` or `start_consuming` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GetOptions {
    /// Number of leading collection items to skip.
    pub offset: Option<usize>,
    /// Maximum number of collection items to return.
    pub limit: Option<usize>,
}

/// Query, subscription and control access to the master's resources.
///
/// Paths are passed as JSON and must be arrays of string or integer
/// segments; anything else fails with [`Error::InvalidPath`](crate::error::Error::InvalidPath).
#[async_trait]
pub trait DataConnector: Send + Sync {
    /// Resolve `path` to a single resource (or `null`) or a collection.
    async fn get(&self, options: &GetOptions, path: &Value) -> Result<Value>;

    /// Register `callback` for messages about the resources under `path`.
    async fn start_consuming(
        &self,
        callback: Callback,
        options: &GetOptions,
        path: &Value,
    ) -> Result<Consumer>;

    /// Invoke `action` on the resource at `path`.
    async fn control(&self, action: &str, args: &Map<String, Value>, path: &Value)
        -> Result<Value>;
}
