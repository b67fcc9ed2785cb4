//! Changes: a single commit or patch as reported by a change source.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::id::ChangeId;
use super::property::Properties;

/// Arguments of an `add_change` call.
///
/// `repository` and `project` are required but default to empty strings;
/// `revlink` defaults to an empty link.
#[derive(Debug, Clone)]
pub struct NewChange {
    pub files: Option<Vec<String>>,
    pub comments: Option<String>,
    pub author: Option<String>,
    pub revision: Option<String>,
    pub when_timestamp: Option<i64>,
    pub branch: Option<String>,
    pub category: Option<String>,
    pub revlink: Option<String>,
    pub properties: Properties,
    pub repository: String,
    pub codebase: Option<String>,
    pub project: String,
    pub src: Option<String>,
}

impl Default for NewChange {
    fn default() -> Self {
        Self {
            files: None,
            comments: None,
            author: None,
            revision: None,
            when_timestamp: None,
            branch: None,
            category: None,
            revlink: Some(String::new()),
            properties: Properties::new(),
            repository: String::new(),
            codebase: None,
            project: String::new(),
            src: None,
        }
    }
}

/// One accepted `add_change` call, with its properties rendered to JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub files: Option<Vec<String>>,
    pub comments: Option<String>,
    pub author: Option<String>,
    pub revision: Option<String>,
    pub when_timestamp: Option<i64>,
    pub branch: Option<String>,
    pub category: Option<String>,
    pub revlink: Option<String>,
    pub properties: BTreeMap<String, Value>,
    pub repository: String,
    pub codebase: Option<String>,
    pub project: String,
    pub src: Option<String>,
}

impl ChangeRecord {
    /// Pair the call's arguments with properties that already passed
    /// JSON rendering.
    pub fn from_args(args: NewChange, properties: BTreeMap<String, Value>) -> Self {
        Self {
            files: args.files,
            comments: args.comments,
            author: args.author,
            revision: args.revision,
            when_timestamp: args.when_timestamp,
            branch: args.branch,
            category: args.category,
            revlink: args.revlink,
            properties,
            repository: args.repository,
            codebase: args.codebase,
            project: args.project,
            src: args.src,
        }
    }
}

/// A change row as held by the database.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Change {
    pub changeid: ChangeId,
    pub author: Option<String>,
    pub comments: Option<String>,
    pub revision: Option<String>,
    pub branch: Option<String>,
    pub repository: String,
    pub project: String,
    pub codebase: Option<String>,
    pub files: Vec<String>,
    pub when_timestamp: DateTime<Utc>,
    pub properties: BTreeMap<String, Value>,
}
