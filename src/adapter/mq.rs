//! In-process message queue.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;
use tracing::trace;

use crate::port::{Callback, Consumer, KeyFilter, MessageQueue, RoutingKey};

type Registry = Mutex<BTreeMap<u64, (KeyFilter, Callback)>>;

/// Delivers produced messages synchronously to matching consumers.
#[derive(Default)]
pub struct MemoryMq {
    consumers: Arc<Registry>,
    next_id: AtomicU64,
}

impl MemoryMq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently registered consumers.
    pub fn consumer_count(&self) -> usize {
        self.consumers.lock().len()
    }
}

fn key_matches(filter: &KeyFilter, key: &[String]) -> bool {
    filter.len() == key.len()
        && filter
            .iter()
            .zip(key)
            .all(|(want, got)| want.as_ref().map_or(true, |w| w == got))
}

impl MessageQueue for MemoryMq {
    fn produce(&self, key: RoutingKey, message: Value) {
        // Callbacks run outside the lock so they may start or stop consumers.
        let targets: Vec<Callback> = self
            .consumers
            .lock()
            .values()
            .filter(|(filter, _)| key_matches(filter, &key))
            .map(|(_, cb)| Arc::clone(cb))
            .collect();

        trace!(key = ?key, consumers = targets.len(), "Producing message");
        for callback in targets {
            callback(&key, &message);
        }
    }

    fn start_consuming(&self, filter: KeyFilter, callback: Callback) -> Consumer {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.consumers
            .lock()
            .insert(id, (filter.clone(), callback));

        let registry = Arc::downgrade(&self.consumers);
        Consumer::new(filter, move || {
            if let Some(registry) = registry.upgrade() {
                registry.lock().remove(&id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn key(parts: &[&str]) -> RoutingKey {
        parts.iter().map(|p| p.to_string()).collect()
    }

    fn collector() -> (Callback, Arc<Mutex<Vec<(RoutingKey, Value)>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let cb: Callback = Arc::new(move |k: &[String], v: &Value| {
            sink.lock().push((k.to_vec(), v.clone()));
        });
        (cb, seen)
    }

    #[test]
    fn wildcard_segments_match_anything() {
        let mq = MemoryMq::new();
        let (cb, seen) = collector();
        let _consumer = mq.start_consuming(
            vec![Some("changes".into()), None, Some("new".into())],
            cb,
        );

        mq.produce(key(&["changes", "1", "new"]), json!({"changeid": 1}));
        mq.produce(key(&["changes", "1", "gone"]), json!({}));
        mq.produce(key(&["changes", "1"]), json!({}));

        let seen = seen.lock();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].1, json!({"changeid": 1}));
    }

    #[test]
    fn stopped_consumers_receive_nothing() {
        let mq = MemoryMq::new();
        let (cb, seen) = collector();
        let consumer = mq.start_consuming(vec![None], cb);
        assert_eq!(mq.consumer_count(), 1);

        consumer.stop_consuming();
        mq.produce(key(&["x"]), json!(null));

        assert_eq!(mq.consumer_count(), 0);
        assert!(seen.lock().is_empty());
    }
}
