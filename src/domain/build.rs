//! Build outcome codes.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Final result of a build or build request, stored as its integer code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Results {
    Success,
    Warnings,
    Failure,
    Skipped,
    Exception,
    Retry,
    Cancelled,
}

impl Results {
    /// Integer code as stored and exchanged over the data API.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Success => 0,
            Self::Warnings => 1,
            Self::Failure => 2,
            Self::Skipped => 3,
            Self::Exception => 4,
            Self::Retry => 5,
            Self::Cancelled => 6,
        }
    }
}

impl TryFrom<i64> for Results {
    type Error = String;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Ok(match code {
            0 => Self::Success,
            1 => Self::Warnings,
            2 => Self::Failure,
            3 => Self::Skipped,
            4 => Self::Exception,
            5 => Self::Retry,
            6 => Self::Cancelled,
            other => return Err(format!("unknown results code {other}")),
        })
    }
}

impl From<Results> for i64 {
    fn from(results: Results) -> Self {
        results.code()
    }
}

impl fmt::Display for Results {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Success => "success",
            Self::Warnings => "warnings",
            Self::Failure => "failure",
            Self::Skipped => "skipped",
            Self::Exception => "exception",
            Self::Retry => "retry",
            Self::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_code() {
        assert_eq!(serde_json::to_string(&Results::Cancelled).unwrap(), "6");
        let parsed: Results = serde_json::from_str("2").unwrap();
        assert_eq!(parsed, Results::Failure);
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(Results::try_from(7).is_err());
        assert!(serde_json::from_str::<Results>("-1").is_err());
    }
}
