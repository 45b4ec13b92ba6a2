//! The in-memory store backing both domain ports

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use core_kernel::{AdmissionId, BedId, BillId, CoreError, DomainPort, Money, WardId};
use domain_admissions::{Admission, AdmissionStatus, AdmissionStore, Bed, BedStatus, Ward};
use domain_billing::{Bill, BillStore, PaymentMethod};

#[derive(Default)]
struct State {
    wards: HashMap<WardId, Ward>,
    beds: HashMap<BedId, Bed>,
    admissions: HashMap<AdmissionId, Admission>,
    bills: HashMap<BillId, Bill>,
}

/// In-process adapter for [`AdmissionStore`] and [`BillStore`]
///
/// All state lives behind one writer lock, so each port operation is atomic
/// with respect to every other.
#[derive(Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

impl MemoryStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store ready to share across services
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }
}

impl DomainPort for MemoryStore {}

#[async_trait]
impl AdmissionStore for MemoryStore {
    async fn insert_ward(&self, ward: Ward, beds: Vec<Bed>) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        if state.wards.contains_key(&ward.id) {
            return Err(CoreError::conflict(format!(
                "ward {} already exists",
                ward.id
            )));
        }
        for bed in beds {
            state.beds.insert(bed.id.clone(), bed);
        }
        state.wards.insert(ward.id.clone(), ward);
        Ok(())
    }

    async fn ward(&self, id: &WardId) -> Result<Ward, CoreError> {
        let state = self.state.read().await;
        state
            .wards
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Ward", id))
    }

    async fn bed(&self, id: &BedId) -> Result<Bed, CoreError> {
        let state = self.state.read().await;
        state
            .beds
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Bed", id))
    }

    async fn beds_in_ward(&self, id: &WardId) -> Result<Vec<Bed>, CoreError> {
        let state = self.state.read().await;
        if !state.wards.contains_key(id) {
            return Err(CoreError::not_found("Ward", id));
        }
        let mut beds: Vec<Bed> = state
            .beds
            .values()
            .filter(|b| &b.ward_id == id)
            .cloned()
            .collect();
        beds.sort_by(|a, b| a.bed_number.cmp(&b.bed_number));
        Ok(beds)
    }

    async fn occupied_bed_count(&self, id: &WardId) -> Result<u32, CoreError> {
        let state = self.state.read().await;
        if !state.wards.contains_key(id) {
            return Err(CoreError::not_found("Ward", id));
        }
        let occupied = state
            .beds
            .values()
            .filter(|b| &b.ward_id == id && b.status == BedStatus::Occupied)
            .count();
        Ok(occupied as u32)
    }

    async fn admission(&self, id: &AdmissionId) -> Result<Admission, CoreError> {
        let state = self.state.read().await;
        state
            .admissions
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Admission", id))
    }

    async fn claim_bed_and_admit(&self, admission: Admission) -> Result<Admission, CoreError> {
        let mut state = self.state.write().await;

        let bed_id = admission
            .bed_id
            .clone()
            .ok_or_else(|| CoreError::validation("admission has no bed to claim"))?;
        if state.admissions.contains_key(&admission.id) {
            return Err(CoreError::conflict(format!(
                "admission {} already exists",
                admission.id
            )));
        }

        let bed = state
            .beds
            .get_mut(&bed_id)
            .ok_or_else(|| CoreError::not_found("Bed", &bed_id))?;
        if bed.status != BedStatus::Vacant {
            return Err(CoreError::conflict(format!(
                "bed {} is not vacant (currently {})",
                bed_id, bed.status
            )));
        }

        bed.status = BedStatus::Occupied;
        state
            .admissions
            .insert(admission.id.clone(), admission.clone());
        Ok(admission)
    }

    async fn complete_discharge(&self, admission: Admission) -> Result<Admission, CoreError> {
        if admission.status != AdmissionStatus::Discharged {
            return Err(CoreError::validation(
                "complete_discharge requires a discharged record",
            ));
        }

        let mut state = self.state.write().await;

        let stored = state
            .admissions
            .get(&admission.id)
            .ok_or_else(|| CoreError::not_found("Admission", &admission.id))?;
        if stored.status == AdmissionStatus::Discharged {
            return Err(CoreError::invalid_state(format!(
                "admission {} is already discharged",
                admission.id
            )));
        }

        // A bed that was removed in the meantime is tolerated: the admission
        // still discharges, with no bed write attempted.
        if let Some(bed_id) = &admission.bed_id {
            if let Some(bed) = state.beds.get_mut(bed_id) {
                bed.status = BedStatus::Vacant;
            }
        }

        state
            .admissions
            .insert(admission.id.clone(), admission.clone());
        Ok(admission)
    }

    async fn flag_bed_maintenance(&self, id: &BedId) -> Result<Bed, CoreError> {
        let mut state = self.state.write().await;
        let bed = state
            .beds
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("Bed", id))?;
        if bed.status == BedStatus::Occupied {
            return Err(CoreError::conflict(format!(
                "bed {id} is occupied and cannot enter maintenance"
            )));
        }
        bed.status = BedStatus::Maintenance;
        Ok(bed.clone())
    }

    async fn return_bed_to_service(&self, id: &BedId) -> Result<Bed, CoreError> {
        let mut state = self.state.write().await;
        let bed = state
            .beds
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("Bed", id))?;
        if bed.status != BedStatus::Maintenance {
            return Err(CoreError::invalid_state(format!(
                "bed {id} is not under maintenance (currently {})",
                bed.status
            )));
        }
        bed.status = BedStatus::Vacant;
        Ok(bed.clone())
    }

    async fn remove_bed(&self, id: &BedId) -> Result<(), CoreError> {
        let mut state = self.state.write().await;

        let bed = state
            .beds
            .get(id)
            .ok_or_else(|| CoreError::not_found("Bed", id))?;
        if bed.status == BedStatus::Occupied {
            return Err(CoreError::conflict(format!(
                "bed {id} is occupied and cannot be removed"
            )));
        }

        state.beds.remove(id);
        for admission in state.admissions.values_mut() {
            if admission.bed_id.as_ref() == Some(id) {
                admission.bed_id = None;
                admission.updated_at = Utc::now();
            }
        }
        Ok(())
    }

    async fn remove_ward(&self, id: &WardId) -> Result<(), CoreError> {
        let mut state = self.state.write().await;

        if !state.wards.contains_key(id) {
            return Err(CoreError::not_found("Ward", id));
        }
        let occupied = state
            .beds
            .values()
            .any(|b| &b.ward_id == id && b.status == BedStatus::Occupied);
        if occupied {
            return Err(CoreError::conflict(format!(
                "ward {id} has occupied beds and cannot be removed"
            )));
        }

        let cascaded: Vec<BedId> = state
            .beds
            .values()
            .filter(|b| &b.ward_id == id)
            .map(|b| b.id.clone())
            .collect();
        for bed_id in &cascaded {
            state.beds.remove(bed_id);
        }
        for admission in state.admissions.values_mut() {
            if let Some(bed_id) = &admission.bed_id {
                if cascaded.contains(bed_id) {
                    admission.bed_id = None;
                    admission.updated_at = Utc::now();
                }
            }
        }
        state.wards.remove(id);
        Ok(())
    }
}

#[async_trait]
impl BillStore for MemoryStore {
    async fn insert_bill(&self, bill: Bill) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        if state.bills.contains_key(&bill.id) {
            return Err(CoreError::conflict(format!(
                "bill {} already exists",
                bill.id
            )));
        }
        state.bills.insert(bill.id.clone(), bill);
        Ok(())
    }

    async fn bill(&self, id: &BillId) -> Result<Bill, CoreError> {
        let state = self.state.read().await;
        state
            .bills
            .get(id)
            .cloned()
            .ok_or_else(|| CoreError::not_found("Bill", id))
    }

    async fn update_bill(&self, bill: Bill) -> Result<Bill, CoreError> {
        let mut state = self.state.write().await;
        if !state.bills.contains_key(&bill.id) {
            return Err(CoreError::not_found("Bill", &bill.id));
        }
        state.bills.insert(bill.id.clone(), bill.clone());
        Ok(bill)
    }

    async fn remove_bill(&self, id: &BillId) -> Result<(), CoreError> {
        let mut state = self.state.write().await;
        state
            .bills
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CoreError::not_found("Bill", id))
    }

    async fn apply_payment(
        &self,
        id: &BillId,
        amount: Money,
        method: PaymentMethod,
    ) -> Result<Bill, CoreError> {
        let mut state = self.state.write().await;
        let bill = state
            .bills
            .get_mut(id)
            .ok_or_else(|| CoreError::not_found("Bill", id))?;

        // The domain mutation runs against the stored record under the lock,
        // so concurrent payments serialize rather than overwrite each other.
        bill.apply_payment(amount, method)?;
        Ok(bill.clone())
    }
}
