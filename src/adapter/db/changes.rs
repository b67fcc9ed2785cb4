use chrono::{DateTime, Utc};

use super::Database;
use crate::domain::{Change, ChangeId, ChangeRecord};

impl Database {
    /// Store a change row; a missing timestamp means "now".
    pub fn insert_change(&self, record: &ChangeRecord) -> ChangeId {
        let when = record
            .when_timestamp
            .and_then(|secs| DateTime::from_timestamp(secs, 0))
            .unwrap_or_else(Utc::now);
        let id = self.changes.insert_with(|id| Change {
            changeid: ChangeId::new(id),
            author: record.author.clone(),
            comments: record.comments.clone(),
            revision: record.revision.clone(),
            branch: record.branch.clone(),
            repository: record.repository.clone(),
            project: record.project.clone(),
            codebase: record.codebase.clone(),
            files: record.files.clone().unwrap_or_default(),
            when_timestamp: when,
            properties: record.properties.clone(),
        });
        ChangeId::new(id)
    }

    pub fn get_change(&self, changeid: ChangeId) -> Option<Change> {
        self.changes.get(changeid.get())
    }

    pub fn list_changes(&self) -> Vec<Change> {
        self.changes.list()
    }
}
