//! Resource types known to the data connector and the paths they serve.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::info;

use super::endpoint::{Endpoint, PathArgs, RowEndpoint};
use super::matcher::PathMatcher;
use crate::adapter::db::Database;
use crate::domain::{
    BuildRequest, BuildRequestId, Builder, BuilderId, Buildset, BuildsetId, Change, ChangeId,
    Master, MasterId, Results, Scheduler, SchedulerId,
};
use crate::error::Result;
use crate::port::{KeyFilter, MessageQueue};

/// A kind of resource, e.g. `buildset`, with every path pattern serving it.
pub struct ResourceType {
    name: &'static str,
    plural: &'static str,
    routes: Vec<(&'static str, Arc<dyn Endpoint>)>,
}

impl ResourceType {
    fn new(name: &'static str, plural: &'static str) -> Self {
        Self {
            name,
            plural,
            routes: Vec::new(),
        }
    }

    fn route(mut self, pattern: &'static str, endpoint: impl Endpoint + 'static) -> Self {
        self.routes.push((pattern, Arc::new(endpoint)));
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn plural(&self) -> &'static str {
        self.plural
    }

    /// Path patterns served by this type.
    pub fn patterns(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.iter().map(|(pattern, _)| *pattern)
    }
}

/// Registry of resource types, keyed by singular name.
pub struct ResourceTypeRegistry {
    types: BTreeMap<&'static str, ResourceType>,
}

impl ResourceTypeRegistry {
    /// The resource types every master exposes.
    pub fn standard() -> Self {
        let types = [changes(), buildsets(), buildrequests(), builders(), schedulers(), masters()];
        Self {
            types: types.into_iter().map(|rt| (rt.name, rt)).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&ResourceType> {
        self.types.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Build a matcher covering every route of every type.
    pub fn matcher(&self) -> PathMatcher {
        let mut matcher = PathMatcher::new();
        for rtype in self.types.values() {
            for (pattern, endpoint) in &rtype.routes {
                matcher.add(*pattern, Arc::clone(endpoint));
            }
        }
        matcher
    }
}

fn changes() -> ResourceType {
    ResourceType::new("change", "changes")
        .route(
            "changes",
            RowEndpoint::<Change>::collection("changes", "changeid", |db, _| db.list_changes()),
        )
        .route(
            "changes/n:changeid",
            RowEndpoint::<Change>::entity("changes", "changeid", |db, id| {
                db.get_change(ChangeId::new(id))
            }),
        )
}

fn buildsets() -> ResourceType {
    ResourceType::new("buildset", "buildsets")
        .route(
            "buildsets",
            RowEndpoint::<Buildset>::collection("buildsets", "bsid", |db, _| db.list_buildsets()),
        )
        .route(
            "buildsets/n:bsid",
            RowEndpoint::<Buildset>::entity("buildsets", "bsid", |db, id| {
                db.get_buildset(BuildsetId::new(id))
            }),
        )
}

fn buildrequests() -> ResourceType {
    fn list(db: &Database, args: &PathArgs) -> Vec<BuildRequest> {
        db.list_buildrequests(args.get("bsid").map(BuildsetId::new))
    }

    ResourceType::new("buildrequest", "buildrequests")
        .route(
            "buildrequests",
            RowEndpoint::collection("buildrequests", "brid", list),
        )
        .route(
            "buildsets/n:bsid/buildrequests",
            RowEndpoint::collection("buildrequests", "brid", list),
        )
        .route("buildrequests/n:brid", BuildRequestEndpoint::new())
}

fn builders() -> ResourceType {
    fn list(db: &Database, args: &PathArgs) -> Vec<Builder> {
        db.list_builders(args.get("masterid").map(MasterId::new))
    }

    ResourceType::new("builder", "builders")
        .route("builders", RowEndpoint::collection("builders", "builderid", list))
        .route(
            "masters/n:masterid/builders",
            RowEndpoint::collection("builders", "builderid", list),
        )
        .route(
            "builders/n:builderid",
            RowEndpoint::<Builder>::entity("builders", "builderid", |db, id| {
                db.get_builder(BuilderId::new(id))
            }),
        )
}

fn schedulers() -> ResourceType {
    fn list(db: &Database, args: &PathArgs) -> Vec<Scheduler> {
        db.list_schedulers(args.get("masterid").map(MasterId::new))
    }

    ResourceType::new("scheduler", "schedulers")
        .route("schedulers", RowEndpoint::collection("schedulers", "schedulerid", list))
        .route(
            "masters/n:masterid/schedulers",
            RowEndpoint::collection("schedulers", "schedulerid", list),
        )
        .route(
            "schedulers/n:schedulerid",
            RowEndpoint::<Scheduler>::entity("schedulers", "schedulerid", |db, id| {
                db.get_scheduler(SchedulerId::new(id))
            }),
        )
}

fn masters() -> ResourceType {
    ResourceType::new("master", "masters")
        .route(
            "masters",
            RowEndpoint::<Master>::collection("masters", "masterid", |db, _| db.list_masters()),
        )
        .route(
            "masters/n:masterid",
            RowEndpoint::<Master>::entity("masters", "masterid", |db, id| {
                db.get_master(MasterId::new(id))
            }),
        )
}

/// Single build request; supports the `cancel` action.
struct BuildRequestEndpoint {
    inner: RowEndpoint<BuildRequest>,
}

impl BuildRequestEndpoint {
    fn new() -> Self {
        Self {
            inner: RowEndpoint::<BuildRequest>::entity("buildrequests", "brid", |db, id| {
                db.get_buildrequest(BuildRequestId::new(id))
            }),
        }
    }
}

impl Endpoint for BuildRequestEndpoint {
    fn is_collection(&self) -> bool {
        false
    }

    fn get(&self, db: &Database, args: &PathArgs) -> Result<Value> {
        self.inner.get(db, args)
    }

    fn routing_filter(&self, args: &PathArgs) -> KeyFilter {
        self.inner.routing_filter(args)
    }

    fn control(
        &self,
        db: &Database,
        mq: &dyn MessageQueue,
        action: &str,
        params: &Map<String, Value>,
        args: &PathArgs,
    ) -> Result<Option<Value>> {
        if action != "cancel" {
            return Ok(None);
        }
        let Some(brid) = args.get("brid").map(BuildRequestId::new) else {
            return Ok(None);
        };

        let Some(completed) = db.complete_buildrequest(brid, Results::Cancelled) else {
            return Ok(Some(Value::Null));
        };
        let reason = params.get("reason").and_then(Value::as_str).unwrap_or("");
        info!(brid = %brid, reason, "Build request cancelled");

        let body = serde_json::to_value(&completed)?;
        mq.produce(
            vec!["buildrequests".into(), brid.to_string(), "complete".into()],
            body.clone(),
        );
        Ok(Some(body))
    }
}
