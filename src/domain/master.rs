//! Masters and the builders and schedulers they run.

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use super::id::{BuilderId, MasterId, SchedulerId};

/// Free-form description of a master activity transition.
pub type MasterStateChange = Map<String, Value>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Master {
    pub masterid: MasterId,
    pub name: String,
    pub active: bool,
    pub last_active: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Builder {
    pub builderid: BuilderId,
    pub name: String,
    pub masterids: Vec<MasterId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scheduler {
    pub schedulerid: SchedulerId,
    pub name: String,
    pub masterid: Option<MasterId>,
}
