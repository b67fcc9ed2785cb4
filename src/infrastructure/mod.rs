//! Configuration and the master context.

pub mod config;
pub mod master;

pub use master::MasterContext;
