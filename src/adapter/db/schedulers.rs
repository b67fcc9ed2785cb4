use super::Database;
use crate::domain::{MasterId, Scheduler, SchedulerId};

impl Database {
    /// Store a scheduler, optionally already owned by a master.
    pub fn insert_scheduler(&self, name: &str, masterid: Option<MasterId>) -> SchedulerId {
        SchedulerId::new(self.schedulers.insert_with(|id| Scheduler {
            schedulerid: SchedulerId::new(id),
            name: name.to_string(),
            masterid,
        }))
    }

    pub fn get_scheduler(&self, schedulerid: SchedulerId) -> Option<Scheduler> {
        self.schedulers.get(schedulerid.get())
    }

    pub fn list_schedulers(&self, masterid: Option<MasterId>) -> Vec<Scheduler> {
        self.schedulers
            .filter(|s| masterid.map_or(true, |m| s.masterid == Some(m)))
    }
}
