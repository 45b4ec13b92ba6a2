//! Test data builders
//!
//! Builders with sensible defaults so tests only spell out the fields they
//! care about.

use chrono::{DateTime, Utc};

use core_kernel::{AdmissionId, BedId, BillId, DoctorId, Money, PatientId, WardId};
use domain_admissions::{AdmitRequest, NewWard, WardType};
use domain_billing::{ChargeSheet, NewBill, PaymentMethod};

use crate::fixtures::{IdFixtures, MoneyFixtures, TextFixtures};

/// Builder for [`NewWard`] inputs
pub struct NewWardBuilder {
    id: WardId,
    name: String,
    ward_type: WardType,
    floor: i32,
    total_beds: u32,
    charge_per_day: Money,
}

impl Default for NewWardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewWardBuilder {
    pub fn new() -> Self {
        Self {
            id: IdFixtures::ward_id(),
            name: "General Ward A".to_string(),
            ward_type: WardType::General,
            floor: 1,
            total_beds: 3,
            charge_per_day: MoneyFixtures::daily_rate(),
        }
    }

    pub fn with_id(mut self, id: WardId) -> Self {
        self.id = id;
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ward_type(mut self, ward_type: WardType) -> Self {
        self.ward_type = ward_type;
        self
    }

    pub fn with_total_beds(mut self, total_beds: u32) -> Self {
        self.total_beds = total_beds;
        self
    }

    pub fn with_charge_per_day(mut self, charge: Money) -> Self {
        self.charge_per_day = charge;
        self
    }

    pub fn build(self) -> NewWard {
        NewWard {
            id: self.id,
            name: self.name,
            ward_type: self.ward_type,
            floor: self.floor,
            total_beds: self.total_beds,
            charge_per_day: self.charge_per_day,
        }
    }
}

/// Builder for [`AdmitRequest`] inputs
pub struct AdmitRequestBuilder {
    admission_id: AdmissionId,
    patient_id: PatientId,
    doctor_id: DoctorId,
    bed_id: BedId,
    admitted_at: DateTime<Utc>,
    diagnosis: String,
    treatment_notes: String,
}

impl AdmitRequestBuilder {
    /// Targets bed 1 of the given ward by default
    pub fn for_ward(ward_id: &WardId) -> Self {
        Self {
            admission_id: IdFixtures::admission_id(),
            patient_id: IdFixtures::patient_id(),
            doctor_id: IdFixtures::doctor_id(),
            bed_id: IdFixtures::bed_id(ward_id, 1),
            admitted_at: Utc::now(),
            diagnosis: TextFixtures::diagnosis(),
            treatment_notes: String::new(),
        }
    }

    pub fn with_admission_id(mut self, id: AdmissionId) -> Self {
        self.admission_id = id;
        self
    }

    pub fn with_patient_id(mut self, id: PatientId) -> Self {
        self.patient_id = id;
        self
    }

    pub fn with_bed_id(mut self, id: BedId) -> Self {
        self.bed_id = id;
        self
    }

    pub fn with_admitted_at(mut self, at: DateTime<Utc>) -> Self {
        self.admitted_at = at;
        self
    }

    pub fn with_diagnosis(mut self, diagnosis: impl Into<String>) -> Self {
        self.diagnosis = diagnosis.into();
        self
    }

    pub fn build(self) -> AdmitRequest {
        AdmitRequest {
            admission_id: self.admission_id,
            patient_id: self.patient_id,
            doctor_id: self.doctor_id,
            bed_id: self.bed_id,
            admitted_at: self.admitted_at,
            diagnosis: self.diagnosis,
            treatment_notes: self.treatment_notes,
        }
    }
}

/// Builder for [`NewBill`] inputs
pub struct NewBillBuilder {
    id: BillId,
    patient_id: PatientId,
    admission_id: Option<AdmissionId>,
    charges: ChargeSheet,
    discount: Money,
    tax: Money,
    payment_method: Option<PaymentMethod>,
}

impl Default for NewBillBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewBillBuilder {
    /// Defaults to the consultation + room charge scenario:
    /// subtotal 1700.00, total 1650.00
    pub fn new() -> Self {
        Self {
            id: IdFixtures::bill_id(),
            patient_id: IdFixtures::patient_id(),
            admission_id: None,
            charges: ChargeSheet {
                consultation: MoneyFixtures::consultation_fee(),
                room: MoneyFixtures::daily_rate(),
                medicine: Money::zero(),
                lab: Money::zero(),
                other: Money::zero(),
            },
            discount: MoneyFixtures::small_discount(),
            tax: MoneyFixtures::standard_tax(),
            payment_method: None,
        }
    }

    pub fn with_id(mut self, id: BillId) -> Self {
        self.id = id;
        self
    }

    pub fn with_patient_id(mut self, id: PatientId) -> Self {
        self.patient_id = id;
        self
    }

    pub fn with_admission_id(mut self, id: AdmissionId) -> Self {
        self.admission_id = Some(id);
        self
    }

    pub fn with_charges(mut self, charges: ChargeSheet) -> Self {
        self.charges = charges;
        self
    }

    pub fn with_discount(mut self, discount: Money) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_tax(mut self, tax: Money) -> Self {
        self.tax = tax;
        self
    }

    pub fn build(self) -> NewBill {
        NewBill {
            id: self.id,
            patient_id: self.patient_id,
            opd_record_id: None,
            admission_id: self.admission_id,
            charges: self.charges,
            discount: self.discount,
            tax: self.tax,
            payment_method: self.payment_method,
        }
    }
}
