//! Admission (IPD record) entity
//!
//! An admission covers a single in-patient stay from intake to discharge.
//! The record transitions exactly once, admitted -> discharged, and is never
//! reused for a re-admission. Its bed reference is weak: if the bed goes away
//! the reference is nulled and the admission survives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AdmissionId, BedId, CoreError, DoctorId, PatientId};

const SECS_PER_DAY: i64 = 86_400;

/// Admission lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionStatus {
    Admitted,
    Discharged,
}

/// An in-patient admission record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Admission {
    /// Caller-supplied identifier (the IPD number)
    pub id: AdmissionId,
    /// Admitted patient
    pub patient_id: PatientId,
    /// Attending doctor
    pub doctor_id: DoctorId,
    /// Bed held for the stay; None once the bed has been removed
    pub bed_id: Option<BedId>,
    /// When the patient was admitted
    pub admitted_at: DateTime<Utc>,
    /// When the patient was discharged; set iff status is discharged
    pub discharged_at: Option<DateTime<Utc>>,
    /// Admitting diagnosis
    pub diagnosis: String,
    /// Free-text treatment notes
    pub treatment_notes: String,
    /// Lifecycle state
    pub status: AdmissionStatus,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Admission {
    /// Returns true while the patient is still admitted
    pub fn is_active(&self) -> bool {
        self.status == AdmissionStatus::Admitted
    }

    /// Transitions the admission to discharged
    ///
    /// This is the single permitted lifecycle transition. The caller persists
    /// the result together with the bed release in one atomic step.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the admission is already discharged; the
    /// record is left unchanged.
    pub fn discharge(&mut self, at: DateTime<Utc>) -> Result<(), CoreError> {
        if self.status == AdmissionStatus::Discharged {
            return Err(CoreError::invalid_state(format!(
                "admission {} is already discharged",
                self.id
            )));
        }
        self.status = AdmissionStatus::Discharged;
        self.discharged_at = Some(at);
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whole days of stay, for room-charge accrual
    ///
    /// Counts from admission to discharge, or to `as_of` while still admitted.
    /// A partial day counts as a full day and every stay is at least one day.
    pub fn stay_days(&self, as_of: DateTime<Utc>) -> u32 {
        let end = self.discharged_at.unwrap_or(as_of);
        let secs = (end - self.admitted_at).num_seconds();
        if secs <= 0 {
            return 1;
        }
        ((secs + SECS_PER_DAY - 1) / SECS_PER_DAY).max(1) as u32
    }
}

impl fmt::Display for Admission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.patient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn admission(admitted_at: DateTime<Utc>) -> Admission {
        Admission {
            id: AdmissionId::new("IPD-1"),
            patient_id: PatientId::new("PAT-1"),
            doctor_id: DoctorId::new("DOC-1"),
            bed_id: Some(BedId::new("WRD-1/1")),
            admitted_at,
            discharged_at: None,
            diagnosis: "pneumonia".to_string(),
            treatment_notes: String::new(),
            status: AdmissionStatus::Admitted,
            created_at: admitted_at,
            updated_at: admitted_at,
        }
    }

    #[test]
    fn test_discharge_sets_timestamp_and_status() {
        let admitted = Utc::now();
        let mut a = admission(admitted);
        let at = admitted + Duration::days(2);
        a.discharge(at).unwrap();
        assert_eq!(a.status, AdmissionStatus::Discharged);
        assert_eq!(a.discharged_at, Some(at));
        assert!(!a.is_active());
    }

    #[test]
    fn test_double_discharge_fails_and_preserves_state() {
        let admitted = Utc::now();
        let mut a = admission(admitted);
        let first = admitted + Duration::days(1);
        a.discharge(first).unwrap();

        let before = a.clone();
        let err = a.discharge(first + Duration::days(1)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidState(_)));
        assert_eq!(a, before);
    }

    #[test]
    fn test_stay_days_rounds_up_and_has_floor_of_one() {
        let admitted = Utc::now();
        let a = admission(admitted);
        // same instant: still one day
        assert_eq!(a.stay_days(admitted), 1);
        // six hours: partial day counts in full
        assert_eq!(a.stay_days(admitted + Duration::hours(6)), 1);
        // 2.5 days rounds up to 3
        assert_eq!(a.stay_days(admitted + Duration::hours(60)), 3);
    }

    #[test]
    fn test_stay_days_uses_discharge_time_once_set() {
        let admitted = Utc::now();
        let mut a = admission(admitted);
        a.discharge(admitted + Duration::days(2)).unwrap();
        // as_of after discharge has no effect on a finalized stay
        assert_eq!(a.stay_days(admitted + Duration::days(30)), 2);
    }
}
