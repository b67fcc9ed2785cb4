//! Domain types for the master's data API.
//!
//! - [`id`] - Integer identifier newtypes, one per namespace
//! - [`property`] - Type-erased property bags and their JSON rendering
//! - [`change`] - Change arguments, records and stored rows
//! - [`buildset`] - Buildsets, sourcestamps and build requests
//! - [`build`] - Build result codes
//! - [`master`] - Masters, builders and schedulers
//! - [`path`] - Resource paths

pub mod build;
pub mod buildset;
pub mod change;
pub mod id;
pub mod master;
pub mod path;
pub mod property;

pub use build::Results;
pub use buildset::{
    BuildRequest, Buildset, BuildsetRecord, NewBuildset, SourceStamp, SourceStampRef,
    SourceStampSpec,
};
pub use change::{Change, ChangeRecord, NewChange};
pub use id::{
    BuildId, BuildRequestId, BuilderId, BuildsetId, ChangeId, MasterId, SchedulerId,
    SourceStampId, WorkerId,
};
pub use master::{Builder, Master, MasterStateChange, Scheduler};
pub use path::{ResourcePath, Segment};
pub use property::{Properties, PropertyError, PropertyValue, SourcedProperties};
