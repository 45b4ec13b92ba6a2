//! Billing storage port
//!
//! The engine persists bills through this trait. `apply_payment` is the one
//! compound operation: the read of the independent fields, the accumulation,
//! the re-derivation, and the write must be one atomic step so no concurrent
//! reader observes a bill mid-recomputation and no concurrent payment is
//! lost. The other methods are the plain create/read/update/delete surface
//! the surrounding layer consumes.

use async_trait::async_trait;

use core_kernel::{BillId, CoreError, DomainPort, Money};

use crate::bill::Bill;
use crate::payment::PaymentMethod;

/// Storage operations for bills
#[async_trait]
pub trait BillStore: DomainPort {
    /// Inserts a bill. Fails with `Conflict` if the id is already present.
    async fn insert_bill(&self, bill: Bill) -> Result<(), CoreError>;

    /// Fetches a bill by id, or `NotFound`.
    async fn bill(&self, id: &BillId) -> Result<Bill, CoreError>;

    /// Replaces a stored bill as a single atomic write, or `NotFound`.
    async fn update_bill(&self, bill: Bill) -> Result<Bill, CoreError>;

    /// Deletes a bill, or `NotFound`.
    async fn remove_bill(&self, id: &BillId) -> Result<(), CoreError>;

    /// Accumulates a payment onto the stored bill, atomically.
    ///
    /// The adapter must run the domain's payment mutation (validation,
    /// accumulation, re-derivation) against the stored record under its
    /// transaction, so concurrent payments serialize instead of overwriting
    /// each other. Fails with `NotFound` if the bill is absent and with
    /// `Validation` if the amount is not positive.
    async fn apply_payment(
        &self,
        id: &BillId,
        amount: Money,
        method: PaymentMethod,
    ) -> Result<Bill, CoreError>;
}
