//! Opaque identifiers for domain entities
//!
//! Identifiers are caller-supplied strings (the surrounding intake layer mints
//! them, e.g. `IPD-3F9A21C4`). The core never generates ward, admission, or
//! bill numbers itself; it only needs the ids to be unique and comparable.
//! Newtype wrappers keep the different identifier kinds from being mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a caller-supplied identifier
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the identifier as a string slice
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the conventional prefix used by the intake layer
            pub fn prefix() -> &'static str {
                $prefix
            }

            /// Consumes the identifier, returning the underlying string
            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Clinical identifiers
define_id!(PatientId, "PAT");
define_id!(DoctorId, "DOC");
define_id!(AdmissionId, "IPD");
define_id!(OpdRecordId, "OPD");

// Facility identifiers
define_id!(WardId, "WRD");
define_id!(BedId, "BED");

// Billing identifiers
define_id!(BillId, "BILL");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_the_raw_value() {
        let id = AdmissionId::new("IPD-3F9A21C4");
        assert_eq!(id.to_string(), "IPD-3F9A21C4");
        assert_eq!(id.as_str(), "IPD-3F9A21C4");
    }

    #[test]
    fn test_ids_are_opaque() {
        // No format is enforced; the core treats ids as opaque keys
        let id = BillId::new("anything-goes-42");
        assert_eq!(id.as_str(), "anything-goes-42");
    }

    #[test]
    fn test_equality_and_hashing() {
        use std::collections::HashSet;
        let a = BedId::new("WRD-1/3");
        let b = BedId::new("WRD-1/3");
        assert_eq!(a, b);
        let set: HashSet<BedId> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_serde_transparent() {
        let id = WardId::new("WRD-ICU-2");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"WRD-ICU-2\"");
        let back: WardId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
