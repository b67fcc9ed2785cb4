//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! # Architecture
//!
//! ```text
//!                 ┌──────────────────────────────┐
//!                 │  schedulers, change sources, │
//!                 │  build processes (callers)   │
//!                 └───────┬──────────────┬───────┘
//!                         │              │
//!                         ▼              ▼
//!                 ┌──────────────┐ ┌──────────────┐
//!                 │DataConnector │ │  UpdateApi   │
//!                 └──────┬───────┘ └──────┬───────┘
//!                        │                │
//!                        ▼                ▼
//!                 ┌──────────────┐ ┌──────────────┐
//!                 │ db + mq      │ │ recorder     │
//!                 │ adapters     │ │ (testkit)    │
//!                 └──────────────┘ └──────────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`DataConnector`] - Read, subscribe and control access to resources
//! - [`UpdateApi`] - Every state-mutating operation of the data API
//! - [`MessageQueue`] - Routing-key based publish/subscribe

mod data;
mod mq;
mod updates;

pub use data::{DataConnector, GetOptions};
pub use mq::{Callback, Consumer, KeyFilter, MessageQueue, RoutingKey};
pub use updates::{BuildRequestIds, UpdateApi};
