//! Ward entity
//!
//! A ward is a physical grouping of beds with a shared daily rate and type.
//! Capacity (`total_beds`) bounds the number of bed records the ward owns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{Money, WardId};

/// Ward type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WardType {
    #[serde(rename = "ICU")]
    Icu,
    General,
    Private,
    Emergency,
}

impl fmt::Display for WardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            WardType::Icu => "ICU",
            WardType::General => "General",
            WardType::Private => "Private",
            WardType::Emergency => "Emergency",
        };
        write!(f, "{name}")
    }
}

/// A ward with its bed capacity and daily room rate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    /// Caller-supplied identifier
    pub id: WardId,
    /// Display name, e.g. "General Ward B"
    pub name: String,
    /// Ward type
    pub ward_type: WardType,
    /// Floor number
    pub floor: i32,
    /// Bed capacity; always >= the number of bed records owned
    pub total_beds: u32,
    /// Room charge per day of stay
    pub charge_per_day: Money,
}

impl Ward {
    /// Room charge for a stay of the given number of days
    pub fn stay_charge(&self, days: u32) -> Money {
        self.charge_per_day.multiply(Decimal::from(days))
    }
}

impl fmt::Display for Ward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.name, self.ward_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn ward() -> Ward {
        Ward {
            id: WardId::new("WRD-1"),
            name: "General Ward B".to_string(),
            ward_type: WardType::General,
            floor: 2,
            total_beds: 10,
            charge_per_day: Money::new(dec!(1200.00)),
        }
    }

    #[test]
    fn test_stay_charge() {
        assert_eq!(ward().stay_charge(3), Money::new(dec!(3600.00)));
        assert_eq!(ward().stay_charge(0), Money::zero());
    }

    #[test]
    fn test_ward_type_serialization() {
        assert_eq!(serde_json::to_string(&WardType::Icu).unwrap(), "\"ICU\"");
        assert_eq!(serde_json::to_string(&WardType::General).unwrap(), "\"General\"");
    }

    #[test]
    fn test_display() {
        assert_eq!(ward().to_string(), "General Ward B - General");
    }
}
