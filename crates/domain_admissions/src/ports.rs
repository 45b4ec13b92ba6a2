//! Admissions storage port
//!
//! Defines the operations the bed ledger needs from the transactional store.
//! The adapter behind this trait must apply each compound operation
//! atomically: `claim_bed_and_admit` is the read-check-write race the system
//! has to close, and `complete_discharge` pairs the admission update with the
//! bed release. The in-process adapter in `infra_memory` does this under a
//! single writer lock; a database adapter does it in one transaction with a
//! row lock on the targeted bed.

use async_trait::async_trait;

use core_kernel::{AdmissionId, BedId, CoreError, DomainPort, WardId};

use crate::admission::Admission;
use crate::bed::Bed;
use crate::ward::Ward;

/// Storage operations for wards, beds, and admissions
#[async_trait]
pub trait AdmissionStore: DomainPort {
    /// Inserts a ward together with its materialized beds, atomically.
    ///
    /// Fails with `Conflict` if the ward id is already present.
    async fn insert_ward(&self, ward: Ward, beds: Vec<Bed>) -> Result<(), CoreError>;

    /// Fetches a ward by id, or `NotFound`.
    async fn ward(&self, id: &WardId) -> Result<Ward, CoreError>;

    /// Fetches a bed by id, or `NotFound`.
    async fn bed(&self, id: &BedId) -> Result<Bed, CoreError>;

    /// All beds owned by a ward, or `NotFound` if the ward is absent.
    async fn beds_in_ward(&self, id: &WardId) -> Result<Vec<Bed>, CoreError>;

    /// Number of occupied beds in a ward, or `NotFound` if the ward is absent.
    async fn occupied_bed_count(&self, id: &WardId) -> Result<u32, CoreError>;

    /// Fetches an admission by id, or `NotFound`.
    async fn admission(&self, id: &AdmissionId) -> Result<Admission, CoreError>;

    /// Claims the admission's bed and inserts the admission, atomically.
    ///
    /// Checks that the referenced bed exists (`NotFound`) and is vacant, marks
    /// it occupied, and inserts the record - all in one step, so two callers
    /// racing for the same bed cannot both observe it vacant. The loser gets
    /// `Conflict`; no retry happens here.
    async fn claim_bed_and_admit(&self, admission: Admission) -> Result<Admission, CoreError>;

    /// Persists a discharge and releases the bed, atomically.
    ///
    /// Fails with `NotFound` if the stored record is absent and with
    /// `InvalidState` if it is already discharged (the check runs against
    /// stored state, so concurrent discharges cannot both succeed). A bed
    /// reference pointing at a bed that no longer exists is tolerated: the
    /// admission is updated and no bed write is attempted.
    async fn complete_discharge(&self, admission: Admission) -> Result<Admission, CoreError>;

    /// Takes a vacant bed out of service for maintenance.
    ///
    /// Fails with `NotFound` if the bed is absent and `Conflict` while it is
    /// occupied.
    async fn flag_bed_maintenance(&self, id: &BedId) -> Result<Bed, CoreError>;

    /// Returns a maintenance bed to service as vacant.
    ///
    /// Fails with `InvalidState` if the bed is not under maintenance.
    async fn return_bed_to_service(&self, id: &BedId) -> Result<Bed, CoreError>;

    /// Deletes a bed.
    ///
    /// Fails with `Conflict` while the bed is occupied, preserving referential
    /// consistency. On success, any admission still referencing the bed has
    /// its reference nulled.
    async fn remove_bed(&self, id: &BedId) -> Result<(), CoreError>;

    /// Deletes a ward, cascading to its beds.
    ///
    /// Fails with `Conflict` while any owned bed is occupied; a ward deletion
    /// never discharges a patient. Admission references to the cascaded beds
    /// are nulled.
    async fn remove_ward(&self, id: &WardId) -> Result<(), CoreError>;
}
