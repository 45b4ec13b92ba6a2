//! Domain-invariant assertion helpers

use core_kernel::WardId;
use domain_admissions::{AdmissionStore, BedLedger, BedStatus};

/// Asserts that a ward's reported availability matches a recount of its beds
///
/// `available_beds(ward) == total_beds - count(occupied beds of ward)` must
/// hold after every admit, discharge, and bed-deletion attempt; this recounts
/// from raw bed records rather than trusting the counter the ledger uses.
pub async fn assert_available_consistent(
    ledger: &BedLedger,
    store: &dyn AdmissionStore,
    ward_id: &WardId,
) {
    let ward = store.ward(ward_id).await.expect("ward must exist");
    let beds = store.beds_in_ward(ward_id).await.expect("beds must exist");
    let occupied = beds
        .iter()
        .filter(|b| b.status == BedStatus::Occupied)
        .count() as u32;

    let reported = ledger
        .available_beds(ward_id)
        .await
        .expect("available_beds must succeed");
    assert_eq!(
        reported,
        ward.total_beds - occupied,
        "available beds for {ward_id} diverged from ledger state"
    );
}
