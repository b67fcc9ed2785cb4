//! Message queue port.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

/// Routing key of a produced message, e.g. `["changes", "4", "new"]`.
pub type RoutingKey = Vec<String>;

/// Consumer filter; `None` matches any segment at that position.
pub type KeyFilter = Vec<Option<String>>;

/// Invoked with the routing key and body of every matching message.
pub type Callback = Arc<dyn Fn(&[String], &Value) + Send + Sync>;

/// In-process publish/subscribe keyed on routing-key tuples.
pub trait MessageQueue: Send + Sync {
    /// Deliver `message` to every active consumer whose filter matches `key`.
    fn produce(&self, key: RoutingKey, message: Value);

    /// Register `callback` for messages matching `filter`.
    fn start_consuming(&self, filter: KeyFilter, callback: Callback) -> Consumer;
}

/// Handle for an active subscription.
///
/// Dropping the handle leaves the subscription active; call
/// [`stop_consuming`](Consumer::stop_consuming) to deregister.
pub struct Consumer {
    filter: KeyFilter,
    stop: Box<dyn FnOnce() + Send>,
}

impl Consumer {
    pub fn new(filter: KeyFilter, stop: impl FnOnce() + Send + 'static) -> Self {
        Self {
            filter,
            stop: Box::new(stop),
        }
    }

    #[must_use]
    pub fn filter(&self) -> &KeyFilter {
        &self.filter
    }

    pub fn stop_consuming(self) {
        (self.stop)();
    }
}

impl fmt::Debug for Consumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Consumer")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}
