//! Identifier newtypes for budgets and budget items
//!
//! Identifiers are opaque: the item store may hand us any string. Newly minted
//! ids are UUID v4 strings. Wrapping them keeps item ids and budget ids from
//! being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Macro to generate opaque ID newtype wrappers
macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Mint a new random ID
            pub fn new() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            /// Borrow the raw identifier
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid.to_string())
            }
        }
    };
}

define_id!(ItemId);
define_id!(BudgetId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_uuids() {
        let id = ItemId::new();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
        assert_ne!(id, ItemId::new());
    }

    #[test]
    fn test_opaque_ids_accepted() {
        let id = ItemId::from("utilities");
        assert_eq!(id.as_str(), "utilities");
        assert_eq!(id.to_string(), "utilities");
    }

    #[test]
    fn test_id_serialization_is_transparent() {
        let id = BudgetId::from("2025-03");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"2025-03\"");

        let back: BudgetId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
