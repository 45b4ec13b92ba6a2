//! Bed entity
//!
//! A bed is an individually allocatable occupancy slot owned by exactly one
//! ward. The `(ward, bed_number)` pair is unique, and the bed id is derived
//! from it so the core never has to mint identifiers of its own.

use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{BedId, WardId};

/// Bed occupancy state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedStatus {
    Vacant,
    Occupied,
    Maintenance,
}

impl fmt::Display for BedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BedStatus::Vacant => "vacant",
            BedStatus::Occupied => "occupied",
            BedStatus::Maintenance => "maintenance",
        };
        write!(f, "{name}")
    }
}

/// A single bed within a ward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bed {
    /// Derived identifier, `<ward id>/<bed number>`
    pub id: BedId,
    /// Owning ward
    pub ward_id: WardId,
    /// Number within the ward, unique per ward
    pub bed_number: String,
    /// Occupancy state
    pub status: BedStatus,
}

impl Bed {
    /// Creates a vacant bed owned by the given ward
    pub fn new(ward_id: WardId, bed_number: impl Into<String>) -> Self {
        let bed_number = bed_number.into();
        let id = BedId::new(format!("{}/{}", ward_id.as_str(), bed_number));
        Self {
            id,
            ward_id,
            bed_number,
            status: BedStatus::Vacant,
        }
    }

    /// Returns true if the bed can accept an admission
    pub fn is_vacant(&self) -> bool {
        self.status == BedStatus::Vacant
    }

    /// Returns true if an active admission holds the bed
    pub fn is_occupied(&self) -> bool {
        self.status == BedStatus::Occupied
    }
}

impl fmt::Display for Bed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - Bed {}", self.ward_id, self.bed_number)
    }
}
