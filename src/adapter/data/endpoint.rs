//! Endpoints: the handlers a resource path resolves to.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::adapter::db::Database;
use crate::error::Result;
use crate::port::{KeyFilter, MessageQueue};

/// Integer arguments captured from a matched path, e.g. `bsid` in
/// `buildsets/n:bsid`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathArgs(BTreeMap<&'static str, u64>);

impl PathArgs {
    pub fn insert(&mut self, name: &'static str, value: u64) {
        self.0.insert(name, value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name).copied()
    }
}

/// Handler for one path pattern.
pub trait Endpoint: Send + Sync {
    /// Whether `get` yields a list rather than a single object.
    fn is_collection(&self) -> bool;

    /// Read the resource(s). A missing entity is `Value::Null`.
    fn get(&self, db: &Database, args: &PathArgs) -> Result<Value>;

    /// Routing-key filter for messages about the resource(s).
    fn routing_filter(&self, args: &PathArgs) -> KeyFilter;

    /// Perform `action`; `Ok(None)` means the action is not supported here.
    fn control(
        &self,
        _db: &Database,
        _mq: &dyn MessageQueue,
        _action: &str,
        _params: &Map<String, Value>,
        _args: &PathArgs,
    ) -> Result<Option<Value>> {
        Ok(None)
    }
}

/// Read-only endpoint over a database table.
pub struct RowEndpoint<T> {
    plural: &'static str,
    id_arg: &'static str,
    collection: bool,
    get_one: fn(&Database, u64) -> Option<T>,
    list: fn(&Database, &PathArgs) -> Vec<T>,
}

impl<T> RowEndpoint<T> {
    /// Endpoint returning the single row named by `id_arg`.
    pub fn entity(
        plural: &'static str,
        id_arg: &'static str,
        get_one: fn(&Database, u64) -> Option<T>,
    ) -> Self {
        Self {
            plural,
            id_arg,
            collection: false,
            get_one,
            list: |_, _| Vec::new(),
        }
    }

    /// Endpoint returning every row `list` selects for the path.
    pub fn collection(
        plural: &'static str,
        id_arg: &'static str,
        list: fn(&Database, &PathArgs) -> Vec<T>,
    ) -> Self {
        Self {
            plural,
            id_arg,
            collection: true,
            get_one: |_, _| None,
            list,
        }
    }
}

impl<T: Serialize + Send + Sync> Endpoint for RowEndpoint<T> {
    fn is_collection(&self) -> bool {
        self.collection
    }

    fn get(&self, db: &Database, args: &PathArgs) -> Result<Value> {
        if self.collection {
            return Ok(serde_json::to_value((self.list)(db, args))?);
        }
        match args.get(self.id_arg).and_then(|id| (self.get_one)(db, id)) {
            Some(row) => Ok(serde_json::to_value(row)?),
            None => Ok(Value::Null),
        }
    }

    fn routing_filter(&self, args: &PathArgs) -> KeyFilter {
        let id = if self.collection {
            None
        } else {
            args.get(self.id_arg).map(|id| id.to_string())
        };
        vec![Some(self.plural.to_string()), id, None]
    }
}
