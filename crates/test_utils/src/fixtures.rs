//! Test fixtures
//!
//! Unique identifiers in the intake layer's format and commonly used amounts.
//! Ids are minted here precisely because the core refuses to mint them.

use fake::faker::lorem::en::Sentence;
use fake::Fake;
use rust_decimal_macros::dec;
use uuid::Uuid;

use core_kernel::{AdmissionId, BedId, BillId, DoctorId, Money, PatientId, WardId};

fn short_token() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    hex[..8].to_uppercase()
}

/// Identifier fixtures mimicking the surrounding intake layer
pub struct IdFixtures;

impl IdFixtures {
    pub fn patient_id() -> PatientId {
        PatientId::new(format!("{}-{}", PatientId::prefix(), short_token()))
    }

    pub fn doctor_id() -> DoctorId {
        DoctorId::new(format!("{}-{}", DoctorId::prefix(), short_token()))
    }

    pub fn ward_id() -> WardId {
        WardId::new(format!("{}-{}", WardId::prefix(), short_token()))
    }

    pub fn admission_id() -> AdmissionId {
        AdmissionId::new(format!("{}-{}", AdmissionId::prefix(), short_token()))
    }

    pub fn bill_id() -> BillId {
        BillId::new(format!("{}-{}", BillId::prefix(), short_token()))
    }

    /// A bed id in the derived `<ward>/<number>` form
    pub fn bed_id(ward: &WardId, number: u32) -> BedId {
        BedId::new(format!("{}/{}", ward.as_str(), number))
    }
}

/// Money fixtures for common charge amounts
pub struct MoneyFixtures;

impl MoneyFixtures {
    pub fn daily_rate() -> Money {
        Money::new(dec!(1200.00))
    }

    pub fn consultation_fee() -> Money {
        Money::new(dec!(500.00))
    }

    pub fn small_discount() -> Money {
        Money::new(dec!(100.00))
    }

    pub fn standard_tax() -> Money {
        Money::new(dec!(50.00))
    }
}

/// Free-text clinical fixtures
pub struct TextFixtures;

impl TextFixtures {
    pub fn diagnosis() -> String {
        Sentence(3..8).fake()
    }
}
