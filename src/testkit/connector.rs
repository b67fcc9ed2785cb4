//! Data connector that records updates and delegates reads.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Map, Value};

use super::updates::FakeUpdates;
use crate::adapter::data::{MasterDataConnector, ResourceTypeRegistry};
use crate::domain::ResourcePath;
use crate::error::Result;
use crate::infrastructure::MasterContext;
use crate::port::{Callback, Consumer, DataConnector, GetOptions};

/// Stand-in for the master's data connector in tests.
///
/// `get`, `start_consuming` and `control` go to a real
/// [`MasterDataConnector`] bound to the same master, after checking that the
/// path is an ordered sequence. All mutations go to [`FakeUpdates`].
pub struct FakeDataConnector {
    master: Arc<MasterContext>,
    updates: FakeUpdates,
    real: MasterDataConnector,
}

impl FakeDataConnector {
    pub fn new(master: Arc<MasterContext>) -> Self {
        let real = MasterDataConnector::new(Arc::clone(master.db()), Arc::clone(master.mq()));
        Self {
            updates: FakeUpdates::new(Arc::clone(&master)),
            master,
            real,
        }
    }

    pub fn updates(&self) -> &FakeUpdates {
        &self.updates
    }

    pub fn rtypes(&self) -> &ResourceTypeRegistry {
        self.real.rtypes()
    }

    pub fn master(&self) -> &Arc<MasterContext> {
        &self.master
    }
}

fn check_path(path: &Value) -> Result<()> {
    ResourcePath::try_from(path).map(|_| ())
}

#[async_trait]
impl DataConnector for FakeDataConnector {
    async fn get(&self, options: &GetOptions, path: &Value) -> Result<Value> {
        check_path(path)?;
        self.real.get(options, path).await
    }

    async fn start_consuming(
        &self,
        callback: Callback,
        options: &GetOptions,
        path: &Value,
    ) -> Result<Consumer> {
        check_path(path)?;
        self.real.start_consuming(callback, options, path).await
    }

    async fn control(
        &self,
        action: &str,
        args: &Map<String, Value>,
        path: &Value,
    ) -> Result<Value> {
        check_path(path)?;
        self.real.control(action, args, path).await
    }
}
