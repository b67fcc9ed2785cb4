//! Maps resource paths onto endpoints.
//!
//! Patterns are slash-separated; a segment written `n:name` matches any
//! integer and captures it as `name`, every other segment must match
//! literally.

use std::sync::Arc;

use super::endpoint::{Endpoint, PathArgs};
use crate::domain::{ResourcePath, Segment};

#[derive(Debug, Clone, PartialEq, Eq)]
enum PatternSegment {
    Literal(&'static str),
    Int(&'static str),
}

fn parse_pattern(pattern: &'static str) -> Vec<PatternSegment> {
    pattern
        .split('/')
        .map(|part| match part.strip_prefix("n:") {
            Some(name) => PatternSegment::Int(name),
            None => PatternSegment::Literal(part),
        })
        .collect()
}

#[derive(Default)]
pub struct PathMatcher {
    routes: Vec<(Vec<PatternSegment>, Arc<dyn Endpoint>)>,
}

impl PathMatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, pattern: &'static str, endpoint: Arc<dyn Endpoint>) {
        self.routes.push((parse_pattern(pattern), endpoint));
    }

    /// Find the endpoint for `path` and the arguments it captures.
    pub fn resolve(&self, path: &ResourcePath) -> Option<(Arc<dyn Endpoint>, PathArgs)> {
        self.routes.iter().find_map(|(pattern, endpoint)| {
            capture(pattern, path.segments()).map(|args| (Arc::clone(endpoint), args))
        })
    }
}

fn capture(pattern: &[PatternSegment], segments: &[Segment]) -> Option<PathArgs> {
    if pattern.len() != segments.len() {
        return None;
    }
    let mut args = PathArgs::default();
    for (want, got) in pattern.iter().zip(segments) {
        match (want, got) {
            (PatternSegment::Literal(lit), Segment::Name(name)) if *lit == name.as_str() => {}
            (PatternSegment::Int(arg), Segment::Int(n)) => args.insert(arg, *n),
            _ => return None,
        }
    }
    Some(args)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_integer_captures() {
        assert_eq!(
            parse_pattern("buildsets/n:bsid/buildrequests"),
            vec![
                PatternSegment::Literal("buildsets"),
                PatternSegment::Int("bsid"),
                PatternSegment::Literal("buildrequests"),
            ]
        );
    }

    #[test]
    fn captures_only_exact_shapes() {
        let pattern = parse_pattern("buildsets/n:bsid");
        let path = ResourcePath::try_from(&json!(["buildsets", 4])).unwrap();
        let args = capture(&pattern, path.segments()).unwrap();
        assert_eq!(args.get("bsid"), Some(4));

        let wrong = ResourcePath::try_from(&json!(["buildsets", "four"])).unwrap();
        assert!(capture(&pattern, wrong.segments()).is_none());
        let longer = ResourcePath::try_from(&json!(["buildsets", 4, "x"])).unwrap();
        assert!(capture(&pattern, longer.segments()).is_none());
    }
}
