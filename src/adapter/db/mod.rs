//! In-memory database backing the real data connector.
//!
//! Each component (sourcestamps, changes, buildsets, ...) lives in its own
//! module as an `impl Database` block over a shared set of tables.

mod builders;
mod buildrequests;
mod buildsets;
mod changes;
mod masters;
mod schedulers;
mod sourcestamps;
mod table;

pub use table::Table;

use crate::domain::{BuildRequest, Builder, Buildset, Change, Master, Scheduler, SourceStamp};

#[derive(Debug, Default)]
pub struct Database {
    sourcestamps: Table<SourceStamp>,
    changes: Table<Change>,
    buildsets: Table<Buildset>,
    buildrequests: Table<BuildRequest>,
    builders: Table<Builder>,
    schedulers: Table<Scheduler>,
    masters: Table<Master>,
}

impl Database {
    /// Create a new empty database.
    pub fn new() -> Self {
        Self::default()
    }
}
