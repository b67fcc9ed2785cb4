use chrono::Utc;

use super::Database;
use crate::domain::{Master, MasterId};

impl Database {
    pub fn insert_master(&self, name: &str, active: bool) -> MasterId {
        MasterId::new(self.masters.insert_with(|id| Master {
            masterid: MasterId::new(id),
            name: name.to_string(),
            active,
            last_active: Utc::now(),
        }))
    }

    pub fn get_master(&self, masterid: MasterId) -> Option<Master> {
        self.masters.get(masterid.get())
    }

    pub fn list_masters(&self) -> Vec<Master> {
        self.masters.list()
    }
}
