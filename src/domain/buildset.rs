//! Buildsets, their sourcestamps and build requests.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::build::Results;
use super::id::{BuildRequestId, BuilderId, BuildsetId, SourceStampId};
use super::property::SourcedProperties;

/// Fields identifying a source state, used when a sourcestamp is given
/// inline rather than by id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceStampSpec {
    pub codebase: String,
    pub repository: String,
    pub branch: Option<String>,
    pub revision: Option<String>,
    pub project: String,
}

/// A sourcestamp reference: an existing id or an inline description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceStampRef {
    Id(SourceStampId),
    Spec(SourceStampSpec),
}

impl From<SourceStampId> for SourceStampRef {
    fn from(id: SourceStampId) -> Self {
        Self::Id(id)
    }
}

impl From<SourceStampSpec> for SourceStampRef {
    fn from(spec: SourceStampSpec) -> Self {
        Self::Spec(spec)
    }
}

/// Arguments of an `add_buildset` call.
#[derive(Debug, Clone, Default)]
pub struct NewBuildset {
    pub scheduler: String,
    pub sourcestamps: Vec<SourceStampRef>,
    pub reason: String,
    pub properties: SourcedProperties,
    pub builder_names: Vec<String>,
    pub external_idstring: Option<String>,
}

/// One accepted `add_buildset` call, with properties rendered to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildsetRecord {
    pub scheduler: String,
    pub sourcestamps: Vec<SourceStampRef>,
    pub reason: String,
    pub properties: BTreeMap<String, (Value, String)>,
    pub builder_names: Vec<String>,
    pub external_idstring: Option<String>,
}

impl BuildsetRecord {
    pub fn from_args(args: NewBuildset, properties: BTreeMap<String, (Value, String)>) -> Self {
        Self {
            scheduler: args.scheduler,
            sourcestamps: args.sourcestamps,
            reason: args.reason,
            properties,
            builder_names: args.builder_names,
            external_idstring: args.external_idstring,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceStamp {
    pub ssid: SourceStampId,
    #[serde(flatten)]
    pub spec: SourceStampSpec,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Buildset {
    pub bsid: BuildsetId,
    pub external_idstring: Option<String>,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
    pub complete: bool,
    pub complete_at: Option<DateTime<Utc>>,
    pub results: Option<Results>,
    pub sourcestamps: Vec<SourceStampId>,
    pub properties: BTreeMap<String, (Value, String)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildRequest {
    pub brid: BuildRequestId,
    pub bsid: BuildsetId,
    pub builderid: BuilderId,
    pub complete: bool,
    pub results: Option<Results>,
    pub submitted_at: DateTime<Utc>,
    pub complete_at: Option<DateTime<Utc>>,
}
