//! Ready-made fixtures and argument builders.
//!
//! Keeps test bodies focused on the calls under test rather than on
//! constructing masters and change arguments.

use std::sync::Arc;

use super::connector::FakeDataConnector;
use crate::domain::{NewBuildset, NewChange, SourceStampRef, SourceStampSpec};
use crate::infrastructure::config::{LoggingConfig, MasterConfig};
use crate::infrastructure::MasterContext;

/// A master with the default identity (`masterid` 1) and empty stores.
///
/// Also installs a test-friendly tracing subscriber.
pub fn master() -> Arc<MasterContext> {
    LoggingConfig::default().init();
    Arc::new(MasterContext::new(&MasterConfig::default()))
}

/// A fake connector bound to a fresh [`master`].
pub fn connector() -> FakeDataConnector {
    FakeDataConnector::new(master())
}

/// Change arguments with an author and required fields filled in.
pub fn change(author: &str, repository: &str, project: &str) -> NewChange {
    NewChange {
        author: Some(author.to_string()),
        repository: repository.to_string(),
        project: project.to_string(),
        ..Default::default()
    }
}

/// Inline sourcestamp for `repository` at `revision`.
pub fn sourcestamp(repository: &str, revision: &str) -> SourceStampRef {
    SourceStampRef::Spec(SourceStampSpec {
        repository: repository.to_string(),
        revision: Some(revision.to_string()),
        ..Default::default()
    })
}

/// Buildset arguments from `scheduler` for the given builders.
pub fn buildset(scheduler: &str, builder_names: &[&str]) -> NewBuildset {
    NewBuildset {
        scheduler: scheduler.to_string(),
        reason: format!("triggered by {scheduler}"),
        builder_names: builder_names.iter().map(|b| b.to_string()).collect(),
        ..Default::default()
    }
}
