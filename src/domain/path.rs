//! Resource paths addressing the data API.
//!
//! A path is an ordered, fixed-length sequence of segments such as
//! `["buildsets", 7, "buildrequests"]`. Callers hand paths over as JSON; any
//! other shape (a bare string, a mapping) is a type error.

use std::fmt;

use serde_json::Value;

use crate::error::Error;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Name(String),
    Int(u64),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourcePath(Vec<Segment>);

impl ResourcePath {
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourcePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "/{}", parts.join("/"))
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "mapping",
    }
}

impl TryFrom<&Value> for ResourcePath {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        let Value::Array(items) = value else {
            return Err(Error::InvalidPath {
                reason: format!("got a {}", kind_of(value)),
            });
        };

        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(Segment::Name(s.clone())),
                Value::Number(n) => n.as_u64().map(Segment::Int).ok_or_else(|| {
                    Error::InvalidPath {
                        reason: format!("segment {n} is not a non-negative integer"),
                    }
                }),
                other => Err(Error::InvalidPath {
                    reason: format!("segment of type {} is not allowed", kind_of(other)),
                }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
