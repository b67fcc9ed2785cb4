use std::sync::{Arc, Mutex};

use buildmaster_data::port::Callback;
use serde_json::Value;

/// Collects every message delivered to a consumer.
#[derive(Clone, Default)]
pub struct MessageLog {
    messages: Arc<Mutex<Vec<(Vec<String>, Value)>>>,
}

impl MessageLog {
    pub fn callback(&self) -> Callback {
        let messages = Arc::clone(&self.messages);
        Arc::new(move |key: &[String], body: &Value| {
            messages
                .lock()
                .expect("lock message log")
                .push((key.to_vec(), body.clone()));
        })
    }

    pub fn len(&self) -> usize {
        self.messages.lock().expect("lock message log").len()
    }

    pub fn keys(&self) -> Vec<Vec<String>> {
        self.messages
            .lock()
            .expect("lock message log")
            .iter()
            .map(|(key, _)| key.clone())
            .collect()
    }
}
