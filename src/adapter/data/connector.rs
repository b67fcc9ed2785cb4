//! The real data connector: resolves paths against the database and the
//! message queue.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{debug, instrument};

use super::endpoint::{Endpoint, PathArgs};
use super::matcher::PathMatcher;
use super::rtype::ResourceTypeRegistry;
use crate::adapter::db::Database;
use crate::domain::ResourcePath;
use crate::error::{Error, Result};
use crate::port::{Callback, Consumer, DataConnector, GetOptions, MessageQueue};

pub struct MasterDataConnector {
    db: Arc<Database>,
    mq: Arc<dyn MessageQueue>,
    rtypes: ResourceTypeRegistry,
    matcher: PathMatcher,
}

impl MasterDataConnector {
    pub fn new(db: Arc<Database>, mq: Arc<dyn MessageQueue>) -> Self {
        let rtypes = ResourceTypeRegistry::standard();
        let matcher = rtypes.matcher();
        Self {
            db,
            mq,
            rtypes,
            matcher,
        }
    }

    /// Resource types this connector serves.
    pub fn rtypes(&self) -> &ResourceTypeRegistry {
        &self.rtypes
    }

    fn resolve(&self, path: &Value) -> Result<(ResourcePath, Arc<dyn Endpoint>, PathArgs)> {
        let path = ResourcePath::try_from(path)?;
        let (endpoint, args) = self.matcher.resolve(&path).ok_or_else(|| Error::NotFound {
            path: path.to_string(),
        })?;
        Ok((path, endpoint, args))
    }
}

fn paginate(value: Value, options: &GetOptions) -> Value {
    match value {
        Value::Array(items) => {
            let offset = options.offset.unwrap_or(0);
            let limit = options.limit.unwrap_or(usize::MAX);
            Value::Array(items.into_iter().skip(offset).take(limit).collect())
        }
        other => other,
    }
}

#[async_trait]
impl DataConnector for MasterDataConnector {
    #[instrument(skip(self, options, path), fields(path = %path))]
    async fn get(&self, options: &GetOptions, path: &Value) -> Result<Value> {
        let (_, endpoint, args) = self.resolve(path)?;
        let value = endpoint.get(&self.db, &args)?;
        if endpoint.is_collection() {
            Ok(paginate(value, options))
        } else {
            Ok(value)
        }
    }

    async fn start_consuming(
        &self,
        callback: Callback,
        _options: &GetOptions,
        path: &Value,
    ) -> Result<Consumer> {
        let (path, endpoint, args) = self.resolve(path)?;
        let filter = endpoint.routing_filter(&args);
        debug!(path = %path, filter = ?filter, "Starting consumer");
        Ok(self.mq.start_consuming(filter, callback))
    }

    #[instrument(skip(self, params, path), fields(path = %path))]
    async fn control(
        &self,
        action: &str,
        params: &Map<String, Value>,
        path: &Value,
    ) -> Result<Value> {
        let (path, endpoint, args) = self.resolve(path)?;
        endpoint
            .control(&self.db, self.mq.as_ref(), action, params, &args)?
            .ok_or_else(|| Error::InvalidControl {
                action: action.to_string(),
                path: path.to_string(),
            })
    }
}
