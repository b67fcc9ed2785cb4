//! Integer identifier newtypes.
//!
//! Every table row in the master's database is addressed by a positive
//! integer. Wrapping each namespace in its own type keeps a scheduler id from
//! being passed where a builder id is expected.

use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u64);

        impl $name {
            /// Create a new id from its raw value.
            #[must_use]
            pub const fn new(id: u64) -> Self {
                Self(id)
            }

            /// Get the raw integer value.
            #[must_use]
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for u64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id!(
    /// Identifier of a recorded or stored change.
    ChangeId
);
define_id!(
    /// Identifier of a buildset.
    BuildsetId
);
define_id!(
    /// Identifier of a single build request within a buildset.
    BuildRequestId
);
define_id!(
    /// Identifier of a stored sourcestamp.
    SourceStampId
);
define_id!(
    /// Identifier allocated to a scheduler name.
    SchedulerId
);
define_id!(
    /// Identifier allocated to a builder name.
    BuilderId
);
define_id!(
    /// Identifier of a master process.
    MasterId
);
define_id!(BuildId);
define_id!(
    /// Identifier of a worker (formerly "slave").
    WorkerId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_serialize_as_bare_integers() {
        let json = serde_json::to_string(&BuildsetId::new(7)).unwrap();
        assert_eq!(json, "7");

        let id: SchedulerId = serde_json::from_str("12").unwrap();
        assert_eq!(id.get(), 12);
    }

    #[test]
    fn display_matches_raw_value() {
        assert_eq!(MasterId::from(3).to_string(), "3");
    }
}
