//! A minimal scheduler written only against the ports, standing in for the
//! production code a fake connector is used to test.

use buildmaster_data::domain::{
    BuildsetId, MasterId, NewBuildset, SchedulerId, SourceStampRef, SourcedProperties,
};
use buildmaster_data::error::Result;
use buildmaster_data::port::{BuildRequestIds, UpdateApi};

pub struct NightlyScheduler {
    pub name: String,
    pub builder_names: Vec<String>,
}

impl NightlyScheduler {
    pub fn new(name: &str, builders: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            builder_names: builders.iter().map(|b| b.to_string()).collect(),
        }
    }

    /// Look up this scheduler's id and claim it for `masterid`.
    pub async fn activate(&self, api: &dyn UpdateApi, masterid: MasterId) -> Result<SchedulerId> {
        let schedulerid = api.find_scheduler_id(&self.name).await?;
        api.set_scheduler_master(schedulerid, Some(masterid)).await?;
        Ok(schedulerid)
    }

    pub async fn deactivate(&self, api: &dyn UpdateApi, schedulerid: SchedulerId) -> Result<()> {
        api.set_scheduler_master(schedulerid, None).await
    }

    pub async fn trigger(
        &self,
        api: &dyn UpdateApi,
        sourcestamps: Vec<SourceStampRef>,
    ) -> Result<(BuildsetId, BuildRequestIds)> {
        let properties = SourcedProperties::new().with("scheduler", self.name.clone(), "Scheduler");
        api.add_buildset(NewBuildset {
            scheduler: self.name.clone(),
            sourcestamps,
            reason: format!("The Nightly scheduler named '{}' triggered this build", self.name),
            properties,
            builder_names: self.builder_names.clone(),
            external_idstring: None,
        })
        .await
    }
}
