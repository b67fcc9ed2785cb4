//! Property bags attached to changes and buildsets.
//!
//! Callers may hand over any `Serialize` value; the bag keeps it type-erased
//! until it is rendered to JSON. Rendering is where a value that cannot be
//! represented as JSON (a map with non-string keys, a failing `Serialize`
//! impl) is rejected, naming the offending key.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Raised when a property value does not survive JSON serialization.
#[derive(Error, Debug)]
#[error("value for {key} is not JSON-able: {source}")]
pub struct PropertyError {
    pub key: String,
    #[source]
    pub source: serde_json::Error,
}

/// A single type-erased property value.
#[derive(Clone)]
pub struct PropertyValue(Arc<dyn erased_serde::Serialize + Send + Sync>);

impl PropertyValue {
    pub fn new<T>(value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        Self(Arc::new(value))
    }

    /// Render the value as JSON.
    pub fn to_json(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(&*self.0)
    }
}

impl fmt::Debug for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_json() {
            Ok(v) => write!(f, "PropertyValue({v})"),
            Err(_) => f.write_str("PropertyValue(<not JSON-able>)"),
        }
    }
}

/// Unsourced properties: key to bare value.
#[derive(Debug, Clone, Default)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with<T>(mut self, key: impl Into<String>, value: T) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        self.insert(key, value);
        self
    }

    pub fn insert<T>(&mut self, key: impl Into<String>, value: T)
    where
        T: Serialize + Send + Sync + 'static,
    {
        self.0.insert(key.into(), PropertyValue::new(value));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render every value to JSON, failing on the first key that cannot be.
    pub fn to_json(&self) -> Result<BTreeMap<String, Value>, PropertyError> {
        self.0
            .iter()
            .map(|(key, value)| {
                value
                    .to_json()
                    .map(|v| (key.clone(), v))
                    .map_err(|source| PropertyError {
                        key: key.clone(),
                        source,
                    })
            })
            .collect()
    }
}

/// Sourced properties: key to a `(value, source)` pair.
#[derive(Debug, Clone, Default)]
pub struct SourcedProperties(BTreeMap<String, (PropertyValue, String)>);

impl SourcedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with<T>(mut self, key: impl Into<String>, value: T, source: impl Into<String>) -> Self
    where
        T: Serialize + Send + Sync + 'static,
    {
        self.insert(key, value, source);
        self
    }

    pub fn insert<T>(&mut self, key: impl Into<String>, value: T, source: impl Into<String>)
    where
        T: Serialize + Send + Sync + 'static,
    {
        self.0
            .insert(key.into(), (PropertyValue::new(value), source.into()));
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Render every value to JSON, keeping its source alongside.
    pub fn to_json(&self) -> Result<BTreeMap<String, (Value, String)>, PropertyError> {
        self.0
            .iter()
            .map(|(key, (value, source))| match value.to_json() {
                Ok(v) => Ok((key.clone(), (v, source.clone()))),
                Err(err) => Err(PropertyError {
                    key: key.clone(),
                    source: err,
                }),
            })
            .collect()
    }
}
