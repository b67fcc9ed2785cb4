//! Recording fake of the update API.
//!
//! [`FakeUpdates`] implements every [`UpdateApi`] operation by checking its
//! arguments, recording the call and returning what the real implementation
//! would. Tests drive the code under test and then assert on the recorded
//! state through the accessor methods.
//!
//! Argument violations are treated as bugs in the caller and panic, failing
//! the test. The one error callers are expected to handle,
//! [`Error::SchedulerAlreadyClaimed`], is returned as a value.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    BuildId, BuildRequestId, BuilderId, BuildsetId, BuildsetRecord, ChangeId, ChangeRecord,
    MasterId, MasterStateChange, NewBuildset, NewChange, Properties, Results, SchedulerId,
    SourcedProperties, WorkerId,
};
use crate::error::{Error, Result};
use crate::infrastructure::MasterContext;
use crate::port::{BuildRequestIds, UpdateApi};

/// The only master id the fake accepts in master activity calls.
const SINGLE_MASTER_ID: MasterId = MasterId::new(1);

/// Build id and number handed out by every `new_build` call.
const STUB_BUILD: (BuildId, u64) = (BuildId::new(10), 1);

#[derive(Debug, Default)]
struct Recorded {
    changes_added: Vec<ChangeRecord>,
    buildsets_added: Vec<BuildsetRecord>,
    maybe_buildset_complete_calls: usize,
    master_state_changes: Vec<MasterStateChange>,
    master_active: bool,
    builder_names: Option<Vec<String>>,
    scheduler_ids: BTreeMap<String, u64>,
    builder_ids: BTreeMap<String, u64>,
    scheduler_masters: BTreeMap<SchedulerId, Option<MasterId>>,
}

/// Look up `name`, allocating one more than the largest id in use.
fn find_or_allocate(ids: &mut BTreeMap<String, u64>, name: &str) -> u64 {
    if let Some(&id) = ids.get(name) {
        return id;
    }
    let id = ids.values().copied().max().unwrap_or(0) + 1;
    ids.insert(name.to_string(), id);
    id
}

fn assert_properties(properties: &Properties) -> BTreeMap<String, Value> {
    properties
        .to_json()
        .unwrap_or_else(|err| panic!("value for {} is not JSON-able", err.key))
}

fn assert_sourced_properties(properties: &SourcedProperties) -> BTreeMap<String, (Value, String)> {
    properties
        .to_json()
        .unwrap_or_else(|err| panic!("value for {} is not JSON-able", err.key))
}

/// Validating recorder for the update API, scoped to one test.
pub struct FakeUpdates {
    master: Arc<MasterContext>,
    state: Mutex<Recorded>,
}

impl FakeUpdates {
    pub fn new(master: Arc<MasterContext>) -> Self {
        Self {
            master,
            state: Mutex::new(Recorded::default()),
        }
    }

    /// Accepted `add_change` calls, in order. Change `n` is at index `n - 1`.
    pub fn changes_added(&self) -> Vec<ChangeRecord> {
        self.state.lock().changes_added.clone()
    }

    /// Accepted `add_buildset` calls, in order.
    pub fn buildsets_added(&self) -> Vec<BuildsetRecord> {
        self.state.lock().buildsets_added.clone()
    }

    pub fn maybe_buildset_complete_calls(&self) -> usize {
        self.state.lock().maybe_buildset_complete_calls
    }

    pub fn master_state_changes(&self) -> Vec<MasterStateChange> {
        self.state.lock().master_state_changes.clone()
    }

    /// Whether the last master activity call was `master_active`.
    pub fn master_is_active(&self) -> bool {
        self.state.lock().master_active
    }

    /// Builder names from the last `update_builder_list` call.
    pub fn builder_names(&self) -> Option<Vec<String>> {
        self.state.lock().builder_names.clone()
    }

    pub fn scheduler_ids(&self) -> BTreeMap<String, SchedulerId> {
        self.state
            .lock()
            .scheduler_ids
            .iter()
            .map(|(name, &id)| (name.clone(), SchedulerId::new(id)))
            .collect()
    }

    pub fn builder_ids(&self) -> BTreeMap<String, BuilderId> {
        self.state
            .lock()
            .builder_ids
            .iter()
            .map(|(name, &id)| (name.clone(), BuilderId::new(id)))
            .collect()
    }

    pub fn scheduler_masters(&self) -> BTreeMap<SchedulerId, Option<MasterId>> {
        self.state.lock().scheduler_masters.clone()
    }

    /// Pre-assign a scheduler id, as if the scheduler already existed.
    pub fn set_scheduler_id(&self, name: impl Into<String>, id: SchedulerId) {
        self.state.lock().scheduler_ids.insert(name.into(), id.get());
    }

    /// Pre-assign a builder id, as if the builder already existed.
    pub fn set_builder_id(&self, name: impl Into<String>, id: BuilderId) {
        self.state.lock().builder_ids.insert(name.into(), id.get());
    }
}

#[async_trait]
impl UpdateApi for FakeUpdates {
    async fn add_change(&self, change: NewChange) -> Result<ChangeId> {
        let properties = assert_properties(&change.properties);
        let record = ChangeRecord::from_args(change, properties);

        let mut state = self.state.lock();
        state.changes_added.push(record);
        let changeid = ChangeId::new(state.changes_added.len() as u64);
        debug!(changeid = %changeid, "Recorded change");
        Ok(changeid)
    }

    async fn add_buildset(&self, buildset: NewBuildset) -> Result<(BuildsetId, BuildRequestIds)> {
        assert!(
            !buildset.scheduler.is_empty(),
            "add_buildset requires a scheduler name"
        );
        let properties = assert_sourced_properties(&buildset.properties);
        let record = BuildsetRecord::from_args(buildset, properties.clone());

        self.state.lock().buildsets_added.push(record.clone());

        // Scheduler tests look the buildset up in the database afterwards,
        // so the call goes through to the real store as well.
        let (bsid, brids) = self.master.db().add_buildset(
            &record.sourcestamps,
            &record.reason,
            properties,
            &record.builder_names,
            record.external_idstring.as_deref(),
        )?;
        debug!(bsid = %bsid, scheduler = %record.scheduler, "Recorded buildset");
        Ok((bsid, brids))
    }

    async fn maybe_buildset_complete(&self, bsid: BuildsetId) -> Result<()> {
        self.state.lock().maybe_buildset_complete_calls += 1;
        debug!(bsid = %bsid, "Recorded maybe_buildset_complete");
        Ok(())
    }

    async fn master_active(&self, name: &str, masterid: Option<MasterId>) -> Result<()> {
        if let Some(masterid) = masterid {
            assert_eq!(
                masterid, SINGLE_MASTER_ID,
                "master_active for {name} expects the single test master"
            );
        }
        self.state.lock().master_active = true;
        Ok(())
    }

    async fn master_stopped(&self, name: &str, masterid: MasterId) -> Result<()> {
        assert_eq!(
            masterid, SINGLE_MASTER_ID,
            "master_stopped for {name} expects the single test master"
        );
        self.state.lock().master_active = false;
        Ok(())
    }

    async fn master_deactivated(&self, _masterid: MasterId) -> Result<()> {
        Ok(())
    }

    async fn expire_masters(&self) -> Result<()> {
        Ok(())
    }

    async fn update_builder_list(
        &self,
        masterid: MasterId,
        builder_names: Vec<String>,
    ) -> Result<()> {
        assert_eq!(
            masterid,
            self.master.masterid(),
            "update_builder_list called for a master other than the fixture's"
        );
        self.state.lock().builder_names = Some(builder_names);
        Ok(())
    }

    async fn find_scheduler_id(&self, name: &str) -> Result<SchedulerId> {
        let id = find_or_allocate(&mut self.state.lock().scheduler_ids, name);
        Ok(SchedulerId::new(id))
    }

    async fn find_builder_id(&self, name: &str) -> Result<BuilderId> {
        let id = find_or_allocate(&mut self.state.lock().builder_ids, name);
        Ok(BuilderId::new(id))
    }

    async fn set_scheduler_master(
        &self,
        schedulerid: SchedulerId,
        masterid: Option<MasterId>,
    ) -> Result<()> {
        let mut state = self.state.lock();
        let current = state.scheduler_masters.get(&schedulerid).copied().flatten();
        if current.is_some() && masterid.is_some() {
            return Err(Error::SchedulerAlreadyClaimed { schedulerid });
        }
        state.scheduler_masters.insert(schedulerid, masterid);
        Ok(())
    }

    async fn new_build(
        &self,
        builderid: BuilderId,
        buildrequestid: BuildRequestId,
        workerid: WorkerId,
    ) -> Result<(BuildId, u64)> {
        debug!(
            builderid = %builderid,
            buildrequestid = %buildrequestid,
            workerid = %workerid,
            "Stub build started"
        );
        Ok(STUB_BUILD)
    }

    async fn set_build_state_strings(
        &self,
        _buildid: BuildId,
        _state_strings: Vec<String>,
    ) -> Result<()> {
        Ok(())
    }

    async fn finish_build(&self, buildid: BuildId, results: Results) -> Result<()> {
        debug!(buildid = %buildid, results = %results, "Stub build finished");
        Ok(())
    }
}
