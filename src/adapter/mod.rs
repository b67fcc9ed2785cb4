//! Adapters implementing the ports.
//!
//! - [`db`] - In-memory database
//! - [`mq`] - In-process message queue
//! - [`data`] - The real data connector

pub mod data;
pub mod db;
pub mod mq;
