//! Data API for a build-automation master.
//!
//! The data API is the layer schedulers, change sources and build processes
//! use to read and mutate the master's state. This crate provides the API's
//! ports, a real in-memory implementation of the read side, and (behind the
//! `testkit` feature) a recording fake of the update side for tests.
//!
//! # Modules
//!
//! - [`domain`] - Identifiers, properties, changes, buildsets, paths
//! - [`port`] - [`DataConnector`](port::DataConnector), [`UpdateApi`](port::UpdateApi) and [`MessageQueue`](port::MessageQueue) traits
//! - [`adapter`] - In-memory database, message queue and the real data connector
//! - [`infrastructure`] - Configuration and the master context
//! - [`error`] - Error types for the crate
//! - `testkit` - `FakeUpdates` and `FakeDataConnector` test doubles (requires `testkit` feature)
//!
//! # Example
//!
//! ```
//! # #[cfg(feature = "testkit")]
//! # tokio_test::block_on(async {
//! use buildmaster_data::port::UpdateApi;
//! use buildmaster_data::testkit::fixture;
//!
//! let connector = fixture::connector();
//! let updates = connector.updates();
//!
//! let id = updates.add_change(fixture::change("alice", "r1", "p1")).await.unwrap();
//! assert_eq!(id.get(), 1);
//! assert_eq!(updates.changes_added()[0].author.as_deref(), Some("alice"));
//! # });
//! ```

pub mod adapter;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
