//! Test doubles for code that talks to the data API.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`updates`]: [`FakeUpdates`], a validating recorder for every
//!   [`UpdateApi`](crate::port::UpdateApi) operation.
//! - [`connector`]: [`FakeDataConnector`], which delegates reads to the real
//!   connector and routes mutations to the recorder.
//! - [`fixture`]: masters, connectors and argument builders for tests.

pub mod connector;
pub mod fixture;
pub mod updates;

pub use connector::FakeDataConnector;
pub use updates::FakeUpdates;
