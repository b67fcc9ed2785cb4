use tracing::debug;

use super::Database;
use crate::domain::{SourceStamp, SourceStampId, SourceStampRef, SourceStampSpec};
use crate::error::{Error, Result};

impl Database {
    /// Find the sourcestamp with exactly these fields, creating it if absent.
    pub fn find_sourcestamp_id(&self, spec: &SourceStampSpec) -> SourceStampId {
        let id = self.sourcestamps.find_or_insert_with(
            |ss| &ss.spec == spec,
            |id| SourceStamp {
                ssid: SourceStampId::new(id),
                spec: spec.clone(),
            },
        );
        SourceStampId::new(id)
    }

    /// Turn a sourcestamp reference into the id of a stored sourcestamp.
    pub fn resolve_sourcestamp(&self, sourcestamp: &SourceStampRef) -> Result<SourceStampId> {
        match sourcestamp {
            SourceStampRef::Id(ssid) if self.sourcestamps.contains(ssid.get()) => Ok(*ssid),
            SourceStampRef::Id(ssid) => Err(Error::UnknownSourceStamp(ssid.get())),
            SourceStampRef::Spec(spec) => {
                let ssid = self.find_sourcestamp_id(spec);
                debug!(ssid = %ssid, repository = %spec.repository, "Resolved sourcestamp");
                Ok(ssid)
            }
        }
    }
}
