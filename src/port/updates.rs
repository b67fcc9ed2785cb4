//! Mutation port of the data API.

use std::collections::BTreeMap;

use async_trait::async_trait;

use crate::domain::{
    BuildId, BuildRequestId, BuilderId, BuildsetId, ChangeId, MasterId, NewBuildset, NewChange,
    Results, SchedulerId, WorkerId,
};
use crate::error::Result;

/// Build request ids created for a buildset, keyed by builder name.
pub type BuildRequestIds = BTreeMap<String, BuildRequestId>;

/// Every state-mutating operation callers may perform against the master.
#[async_trait]
pub trait UpdateApi: Send + Sync {
    /// Record a new change and return its id.
    async fn add_change(&self, change: NewChange) -> Result<ChangeId>;

    /// Create a buildset with one build request per builder.
    async fn add_buildset(&self, buildset: NewBuildset) -> Result<(BuildsetId, BuildRequestIds)>;

    /// Check whether the buildset's requests are all complete.
    async fn maybe_buildset_complete(&self, bsid: BuildsetId) -> Result<()>;

    async fn master_active(&self, name: &str, masterid: Option<MasterId>) -> Result<()>;

    async fn master_stopped(&self, name: &str, masterid: MasterId) -> Result<()>;

    async fn master_deactivated(&self, masterid: MasterId) -> Result<()>;

    /// Mark masters that stopped checking in as inactive.
    async fn expire_masters(&self) -> Result<()>;

    /// Replace the set of builders configured on `masterid`.
    async fn update_builder_list(&self, masterid: MasterId, builder_names: Vec<String>)
        -> Result<()>;

    /// Find the id for a scheduler name, allocating one on first use.
    async fn find_scheduler_id(&self, name: &str) -> Result<SchedulerId>;

    /// Find the id for a builder name, allocating one on first use.
    async fn find_builder_id(&self, name: &str) -> Result<BuilderId>;

    /// Assign the scheduler to a master, or release it with `None`.
    ///
    /// Fails with [`Error::SchedulerAlreadyClaimed`](crate::error::Error::SchedulerAlreadyClaimed)
    /// when the scheduler is owned and a new owner is given.
    async fn set_scheduler_master(
        &self,
        schedulerid: SchedulerId,
        masterid: Option<MasterId>,
    ) -> Result<()>;

    /// Start a build; returns the build id and build number.
    async fn new_build(
        &self,
        builderid: BuilderId,
        buildrequestid: BuildRequestId,
        workerid: WorkerId,
    ) -> Result<(BuildId, u64)>;

    async fn set_build_state_strings(&self, buildid: BuildId, state_strings: Vec<String>)
        -> Result<()>;

    async fn finish_build(&self, buildid: BuildId, results: Results) -> Result<()>;
}
