use std::collections::BTreeMap;

use chrono::Utc;
use serde_json::Value;
use tracing::info;

use super::Database;
use crate::domain::{BuildRequest, BuildRequestId, Buildset, BuildsetId, SourceStampRef};
use crate::error::{Error, Result};
use crate::port::BuildRequestIds;

impl Database {
    /// Create a buildset and one build request per builder name.
    ///
    /// Sourcestamp ids are checked before any inline sourcestamp is created,
    /// so an unknown id leaves the database untouched.
    pub fn add_buildset(
        &self,
        sourcestamps: &[SourceStampRef],
        reason: &str,
        properties: BTreeMap<String, (Value, String)>,
        builder_names: &[String],
        external_idstring: Option<&str>,
    ) -> Result<(BuildsetId, BuildRequestIds)> {
        if let Some(ssid) = sourcestamps.iter().find_map(|ss| match ss {
            SourceStampRef::Id(ssid) if !self.sourcestamps.contains(ssid.get()) => Some(*ssid),
            _ => None,
        }) {
            return Err(Error::UnknownSourceStamp(ssid.get()));
        }

        let ssids = sourcestamps
            .iter()
            .map(|ss| self.resolve_sourcestamp(ss))
            .collect::<Result<Vec<_>>>()?;

        let submitted_at = Utc::now();
        let bsid = BuildsetId::new(self.buildsets.insert_with(|id| Buildset {
            bsid: BuildsetId::new(id),
            external_idstring: external_idstring.map(str::to_string),
            reason: reason.to_string(),
            submitted_at,
            complete: false,
            complete_at: None,
            results: None,
            sourcestamps: ssids,
            properties,
        }));

        let mut brids = BuildRequestIds::new();
        for name in builder_names {
            let builderid = self.find_builder_id(name);
            let brid = self.buildrequests.insert_with(|id| BuildRequest {
                brid: BuildRequestId::new(id),
                bsid,
                builderid,
                complete: false,
                results: None,
                submitted_at,
                complete_at: None,
            });
            brids.insert(name.clone(), BuildRequestId::new(brid));
        }

        info!(bsid = %bsid, requests = brids.len(), reason, "Buildset added");
        Ok((bsid, brids))
    }

    pub fn get_buildset(&self, bsid: BuildsetId) -> Option<Buildset> {
        self.buildsets.get(bsid.get())
    }

    pub fn list_buildsets(&self) -> Vec<Buildset> {
        self.buildsets.list()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SourceStampId, SourceStampSpec};

    #[test]
    fn creates_one_request_per_builder() {
        let db = Database::new();
        let ss = SourceStampRef::Spec(SourceStampSpec {
            repository: "r".into(),
            ..Default::default()
        });

        let (bsid, brids) = db
            .add_buildset(
                &[ss],
                "because",
                BTreeMap::new(),
                &["linux".to_string(), "mac".to_string()],
                None,
            )
            .unwrap();

        assert_eq!(bsid, BuildsetId::new(1));
        assert_eq!(brids.len(), 2);
        let stored = db.get_buildset(bsid).unwrap();
        assert!(!stored.complete);
        assert_eq!(stored.reason, "because");
        assert_eq!(db.list_buildrequests(Some(bsid)).len(), 2);
    }

    #[test]
    fn unknown_sourcestamp_writes_nothing() {
        let db = Database::new();
        let err = db
            .add_buildset(
                &[SourceStampRef::Id(SourceStampId::new(3))],
                "r",
                BTreeMap::new(),
                &["b".to_string()],
                None,
            )
            .unwrap_err();

        assert!(matches!(err, Error::UnknownSourceStamp(3)));
        assert!(db.list_buildsets().is_empty());
        assert!(db.list_builders(None).is_empty());
    }

    #[test]
    fn unknown_sourcestamp_after_inline_one_writes_nothing() {
        let db = Database::new();
        let inline = SourceStampRef::Spec(SourceStampSpec {
            repository: "r".into(),
            ..Default::default()
        });
        let err = db
            .add_buildset(
                &[inline, SourceStampRef::Id(SourceStampId::new(99))],
                "r",
                BTreeMap::new(),
                &["b".to_string()],
                None,
            )
            .unwrap_err();

        assert!(matches!(err, Error::UnknownSourceStamp(99)));
        assert!(!db.sourcestamps.contains(1));
        assert!(db.list_buildsets().is_empty());
        assert!(db.list_builders(None).is_empty());
    }
}
