use super::Database;
use crate::domain::{Builder, BuilderId, MasterId};

impl Database {
    /// Find the builder with this name, creating it if absent.
    pub fn find_builder_id(&self, name: &str) -> BuilderId {
        BuilderId::new(self.builders.find_or_insert_with(
            |b| b.name == name,
            |id| Builder {
                builderid: BuilderId::new(id),
                name: name.to_string(),
                masterids: Vec::new(),
            },
        ))
    }

    /// Store a builder configured on the given masters.
    pub fn insert_builder(&self, name: &str, masterids: Vec<MasterId>) -> BuilderId {
        BuilderId::new(self.builders.insert_with(|id| Builder {
            builderid: BuilderId::new(id),
            name: name.to_string(),
            masterids,
        }))
    }

    pub fn get_builder(&self, builderid: BuilderId) -> Option<Builder> {
        self.builders.get(builderid.get())
    }

    /// List builders, optionally only those configured on `masterid`.
    pub fn list_builders(&self, masterid: Option<MasterId>) -> Vec<Builder> {
        self.builders
            .filter(|b| masterid.map_or(true, |m| b.masterids.contains(&m)))
    }
}
