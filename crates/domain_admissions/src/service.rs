//! Bed allocation ledger service
//!
//! Orchestrates ward creation, admission, and discharge against the storage
//! port. Validation and lifecycle decisions live here; the port's compound
//! operations supply the atomicity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

use core_kernel::{AdmissionId, BedId, CoreError, DoctorId, Money, PatientId, WardId};

use crate::admission::{Admission, AdmissionStatus};
use crate::bed::Bed;
use crate::ports::AdmissionStore;
use crate::ward::{Ward, WardType};

/// Input for creating a ward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewWard {
    /// Caller-supplied ward id
    pub id: WardId,
    pub name: String,
    pub ward_type: WardType,
    pub floor: i32,
    /// Bed capacity; beds numbered 1..=total_beds are materialized
    pub total_beds: u32,
    pub charge_per_day: Money,
}

/// Input for admitting a patient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdmitRequest {
    /// Caller-supplied admission id (the IPD number)
    pub admission_id: AdmissionId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    /// Bed to claim; must be vacant at the time of the attempt
    pub bed_id: BedId,
    pub admitted_at: DateTime<Utc>,
    pub diagnosis: String,
    #[serde(default)]
    pub treatment_notes: String,
}

/// The bed allocation ledger
///
/// Guarantees bed/admission consistency under create, admit, and discharge:
/// a bed is occupied iff exactly one active admission references it, and
/// `available_beds` is always derived from ledger state, never cached.
pub struct BedLedger {
    store: Arc<dyn AdmissionStore>,
}

impl BedLedger {
    /// Creates a ledger over the given store
    pub fn new(store: Arc<dyn AdmissionStore>) -> Self {
        Self { store }
    }

    /// Creates a ward and materializes its beds
    ///
    /// Beds are numbered "1" through `total_beds`, all vacant, and written
    /// atomically with the ward.
    ///
    /// # Errors
    ///
    /// - `Validation` if capacity is zero or the daily rate is negative
    /// - `Conflict` if the ward id is already taken
    pub async fn create_ward(&self, new: NewWard) -> Result<Ward, CoreError> {
        if new.total_beds < 1 {
            return Err(CoreError::validation("total beds must be at least 1"));
        }
        if new.charge_per_day.is_negative() {
            return Err(CoreError::validation("charge per day must not be negative"));
        }

        let ward = Ward {
            id: new.id,
            name: new.name,
            ward_type: new.ward_type,
            floor: new.floor,
            total_beds: new.total_beds,
            charge_per_day: new.charge_per_day,
        };
        let beds = (1..=ward.total_beds)
            .map(|n| Bed::new(ward.id.clone(), n.to_string()))
            .collect();

        self.store.insert_ward(ward.clone(), beds).await?;
        debug!(ward = %ward.id, beds = ward.total_beds, "ward created");
        Ok(ward)
    }

    /// Admits a patient to a bed
    ///
    /// The bed claim and the admission write happen atomically; either both
    /// succeed or neither does.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the bed does not exist
    /// - `Conflict` if the bed is not vacant at the time of the attempt,
    ///   including when a concurrent admission claimed it first
    pub async fn admit(&self, req: AdmitRequest) -> Result<Admission, CoreError> {
        let now = Utc::now();
        let admission = Admission {
            id: req.admission_id,
            patient_id: req.patient_id,
            doctor_id: req.doctor_id,
            bed_id: Some(req.bed_id),
            admitted_at: req.admitted_at,
            discharged_at: None,
            diagnosis: req.diagnosis,
            treatment_notes: req.treatment_notes,
            status: AdmissionStatus::Admitted,
            created_at: now,
            updated_at: now,
        };

        let admission = self.store.claim_bed_and_admit(admission).await?;
        debug!(admission = %admission.id, bed = ?admission.bed_id, "patient admitted");
        Ok(admission)
    }

    /// Discharges an admission and releases its bed
    ///
    /// The admission update and the bed release are a single atomic step. An
    /// admission whose bed was removed in the meantime is discharged with no
    /// bed side effect.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the admission does not exist
    /// - `InvalidState` if it is already discharged; stored state is unchanged
    pub async fn discharge(
        &self,
        id: &AdmissionId,
        discharged_at: DateTime<Utc>,
    ) -> Result<Admission, CoreError> {
        let mut admission = self.store.admission(id).await?;
        admission.discharge(discharged_at)?;

        // The store re-checks lifecycle state under its lock, so a concurrent
        // discharge between the read above and this write still loses cleanly.
        let admission = self.store.complete_discharge(admission).await?;
        debug!(admission = %admission.id, "patient discharged");
        Ok(admission)
    }

    /// Number of beds currently available in a ward
    ///
    /// Pure read: `total_beds - occupied`, derived from ledger state on every
    /// call rather than stored.
    pub async fn available_beds(&self, ward_id: &WardId) -> Result<u32, CoreError> {
        let ward = self.store.ward(ward_id).await?;
        let occupied = self.store.occupied_bed_count(ward_id).await?;
        Ok(ward.total_beds - occupied)
    }

    /// Takes a vacant bed out of service for maintenance
    ///
    /// A maintenance bed cannot be admitted to; it still counts toward
    /// `total_beds`, so `available_beds` reflects occupancy only.
    pub async fn flag_maintenance(&self, bed_id: &BedId) -> Result<Bed, CoreError> {
        let bed = self.store.flag_bed_maintenance(bed_id).await?;
        debug!(bed = %bed.id, "bed flagged for maintenance");
        Ok(bed)
    }

    /// Returns a maintenance bed to service as vacant
    pub async fn return_to_service(&self, bed_id: &BedId) -> Result<Bed, CoreError> {
        let bed = self.store.return_bed_to_service(bed_id).await?;
        debug!(bed = %bed.id, "bed returned to service");
        Ok(bed)
    }

    /// Deletes a bed, refusing while it is occupied
    pub async fn remove_bed(&self, bed_id: &BedId) -> Result<(), CoreError> {
        self.store.remove_bed(bed_id).await?;
        debug!(bed = %bed_id, "bed removed");
        Ok(())
    }

    /// Deletes a ward and its beds, refusing while any bed is occupied
    pub async fn remove_ward(&self, ward_id: &WardId) -> Result<(), CoreError> {
        self.store.remove_ward(ward_id).await?;
        debug!(ward = %ward_id, "ward removed");
        Ok(())
    }

    /// Fetches an admission by id
    pub async fn admission(&self, id: &AdmissionId) -> Result<Admission, CoreError> {
        self.store.admission(id).await
    }
}

/// Room charge accrued by an admission in the given ward
///
/// Whole days of stay (partial days count in full, minimum one) times the
/// ward's daily rate. After discharge the figure is final; before it, `as_of`
/// bounds the accrual. This is the room-charge input the billing engine
/// consumes.
pub fn room_charge(admission: &Admission, ward: &Ward, as_of: DateTime<Utc>) -> Money {
    ward.stay_charge(admission.stay_days(as_of))
}
