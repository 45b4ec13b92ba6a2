//! Billing computation engine
//!
//! Thin orchestration over the bill entity and the storage port. The entity
//! owns the derivation; the engine owns persistence ordering and the
//! overpayment review log.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

use core_kernel::{AdmissionId, BillId, CoreError, Money, OpdRecordId, PatientId};

use crate::bill::{Bill, ChargeSheet};
use crate::payment::PaymentMethod;
use crate::ports::BillStore;

/// Input for creating a bill
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBill {
    /// Caller-supplied bill id (the bill number)
    pub id: BillId,
    pub patient_id: PatientId,
    #[serde(default)]
    pub opd_record_id: Option<OpdRecordId>,
    #[serde(default)]
    pub admission_id: Option<AdmissionId>,
    pub charges: ChargeSheet,
    pub discount: Money,
    pub tax: Money,
    #[serde(default)]
    pub payment_method: Option<PaymentMethod>,
}

/// The billing computation engine
pub struct BillingEngine {
    store: Arc<dyn BillStore>,
}

impl BillingEngine {
    /// Creates an engine over the given store
    pub fn new(store: Arc<dyn BillStore>) -> Self {
        Self { store }
    }

    /// Creates a bill with its derived fields computed before persistence
    ///
    /// # Errors
    ///
    /// - `Validation` if any charge, the discount, or the tax is negative
    /// - `Conflict` if the bill id is already taken
    pub async fn create_bill(&self, new: NewBill) -> Result<Bill, CoreError> {
        let bill = Bill::new(
            new.id,
            new.patient_id,
            new.opd_record_id,
            new.admission_id,
            new.charges,
            new.discount,
            new.tax,
            new.payment_method,
        )?;

        self.store.insert_bill(bill.clone()).await?;
        debug!(bill = %bill.id, total = %bill.totals().total_amount, "bill created");
        Ok(bill)
    }

    /// Records a payment against a bill
    ///
    /// The amount accumulates onto `amount_paid` and the totals are
    /// re-derived in the same atomic step that persists them. Overpayment is
    /// accepted by policy; the resulting negative balance is logged for
    /// review rather than rejected.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the bill does not exist
    /// - `Validation` if the amount is not strictly positive
    pub async fn record_payment(
        &self,
        id: &BillId,
        amount: Money,
        method: PaymentMethod,
    ) -> Result<Bill, CoreError> {
        let bill = self.store.apply_payment(id, amount, method).await?;

        if bill.totals().is_overpaid() {
            warn!(
                bill = %bill.id,
                balance = %bill.totals().balance,
                "bill overpaid; flagging for review"
            );
        }
        debug!(bill = %bill.id, paid = %bill.amount_paid(), status = %bill.status(), "payment recorded");
        Ok(bill)
    }

    /// Fetches a bill by id
    pub async fn bill(&self, id: &BillId) -> Result<Bill, CoreError> {
        self.store.bill(id).await
    }
}
