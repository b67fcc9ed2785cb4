//! The master context owning the database and message queue.

use std::sync::Arc;

use tracing::info;

use super::config::MasterConfig;
use crate::adapter::db::Database;
use crate::adapter::mq::MemoryMq;
use crate::domain::MasterId;
use crate::port::MessageQueue;

/// A build master as seen by the data API: its identity plus the stores
/// the API reads from and writes to.
pub struct MasterContext {
    masterid: MasterId,
    name: String,
    db: Arc<Database>,
    mq: Arc<dyn MessageQueue>,
}

impl MasterContext {
    /// Create a master with an empty database and an in-process queue.
    pub fn new(config: &MasterConfig) -> Self {
        Self::with_stores(config, Arc::new(Database::new()), Arc::new(MemoryMq::new()))
    }

    pub fn with_stores(
        config: &MasterConfig,
        db: Arc<Database>,
        mq: Arc<dyn MessageQueue>,
    ) -> Self {
        info!(name = %config.name, masterid = config.masterid, "Master context created");
        Self {
            masterid: config.masterid(),
            name: config.name.clone(),
            db,
            mq,
        }
    }

    #[must_use]
    pub fn masterid(&self) -> MasterId {
        self.masterid
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn db(&self) -> &Arc<Database> {
        &self.db
    }

    pub fn mq(&self) -> &Arc<dyn MessageQueue> {
        &self.mq
    }
}

impl Default for MasterContext {
    fn default() -> Self {
        Self::new(&MasterConfig::default())
    }
}
