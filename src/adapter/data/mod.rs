//! Real data connector.
//!
//! - [`connector`] - [`MasterDataConnector`], the [`DataConnector`](crate::port::DataConnector) over db and mq
//! - [`rtype`] - Resource type registry
//! - [`endpoint`] - Endpoint trait and table-backed endpoints
//! - [`matcher`] - Path pattern matching

pub mod connector;
pub mod endpoint;
pub mod matcher;
pub mod rtype;

pub use connector::MasterDataConnector;
pub use endpoint::{Endpoint, PathArgs};
pub use matcher::PathMatcher;
pub use rtype::{ResourceType, ResourceTypeRegistry};
