//! Bill entity and the derived-totals view
//!
//! A bill aggregates five independent charge components, a discount, a tax,
//! and a cumulative amount paid. Everything else about it is derived: the
//! [`BillTotals`] view holds subtotal, total, balance, and status, and the
//! only way to obtain one is the pure derivation in [`BillTotals::derive`].
//! Every mutating method on [`Bill`] routes through that derivation before
//! returning, so the stored totals always match the independent fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use core_kernel::{AdmissionId, BillId, CoreError, Money, OpdRecordId, PatientId};

use crate::payment::PaymentMethod;

/// Payment status of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillStatus {
    Unpaid,
    Partial,
    Paid,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BillStatus::Unpaid => "unpaid",
            BillStatus::Partial => "partial",
            BillStatus::Paid => "paid",
        };
        write!(f, "{name}")
    }
}

/// The five independent charge components of a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChargeSheet {
    pub consultation: Money,
    pub room: Money,
    pub medicine: Money,
    pub lab: Money,
    pub other: Money,
}

impl ChargeSheet {
    /// Sum of all five components
    pub fn subtotal(&self) -> Money {
        self.consultation + self.room + self.medicine + self.lab + self.other
    }

    /// Validates that no component is negative
    pub fn validate(&self) -> Result<(), CoreError> {
        let components = [
            ("consultation", self.consultation),
            ("room", self.room),
            ("medicine", self.medicine),
            ("lab", self.lab),
            ("other", self.other),
        ];
        for (name, amount) in components {
            if amount.is_negative() {
                return Err(CoreError::validation(format!(
                    "{name} charge must not be negative, got {amount}"
                )));
            }
        }
        Ok(())
    }
}

/// Derived bill fields, obtainable only through [`BillTotals::derive`]
///
/// Holding the derived values in their own struct means no caller can set
/// subtotal, total, balance, or status independently of the inputs they are
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillTotals {
    /// Sum of the five charge components
    pub subtotal: Money,
    /// `subtotal - discount + tax`
    pub total_amount: Money,
    /// `total_amount - amount_paid`; negative on overpayment
    pub balance: Money,
    /// Derived payment status
    pub status: BillStatus,
}

impl BillTotals {
    /// Pure derivation of all computed fields from the independent ones
    ///
    /// Deterministic and side-effect free; calling it twice on the same
    /// inputs yields identical results. Overpayment is tolerated: the balance
    /// goes negative and the status stays paid.
    pub fn derive(
        charges: &ChargeSheet,
        discount: Money,
        tax: Money,
        amount_paid: Money,
    ) -> Self {
        let subtotal = charges.subtotal();
        let total_amount = subtotal - discount + tax;
        let balance = total_amount - amount_paid;

        let status = if balance.is_zero() {
            BillStatus::Paid
        } else if balance.is_negative() && amount_paid.is_positive() {
            BillStatus::Paid
        } else if amount_paid.is_positive() {
            BillStatus::Partial
        } else {
            BillStatus::Unpaid
        };

        Self {
            subtotal,
            total_amount,
            balance,
            status,
        }
    }

    /// Returns true if more than the total has been paid
    pub fn is_overpaid(&self) -> bool {
        self.balance.is_negative() && self.status == BillStatus::Paid
    }
}

/// A bill for a patient encounter
///
/// Independent fields are private and only reachable through methods that
/// re-derive the totals, so the invariants hold by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    /// Caller-supplied identifier (the bill number)
    pub id: BillId,
    /// Billed patient
    pub patient_id: PatientId,
    /// Out-patient visit this bill covers, if any
    pub opd_record_id: Option<OpdRecordId>,
    /// Admission this bill covers, if any
    pub admission_id: Option<AdmissionId>,
    charges: ChargeSheet,
    discount: Money,
    tax: Money,
    amount_paid: Money,
    payment_method: Option<PaymentMethod>,
    totals: BillTotals,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Bill {
    /// Creates a bill with its totals derived immediately
    ///
    /// # Errors
    ///
    /// Returns `Validation` if any charge component, the discount, or the tax
    /// is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: BillId,
        patient_id: PatientId,
        opd_record_id: Option<OpdRecordId>,
        admission_id: Option<AdmissionId>,
        charges: ChargeSheet,
        discount: Money,
        tax: Money,
        payment_method: Option<PaymentMethod>,
    ) -> Result<Self, CoreError> {
        charges.validate()?;
        if discount.is_negative() {
            return Err(CoreError::validation("discount must not be negative"));
        }
        if tax.is_negative() {
            return Err(CoreError::validation("tax must not be negative"));
        }

        let amount_paid = Money::zero();
        let totals = BillTotals::derive(&charges, discount, tax, amount_paid);
        let now = Utc::now();
        Ok(Self {
            id,
            patient_id,
            opd_record_id,
            admission_id,
            charges,
            discount,
            tax,
            amount_paid,
            payment_method,
            totals,
            created_at: now,
            updated_at: now,
        })
    }

    /// The five charge components
    pub fn charges(&self) -> &ChargeSheet {
        &self.charges
    }

    /// The discount applied to the subtotal
    pub fn discount(&self) -> Money {
        self.discount
    }

    /// The tax added on top
    pub fn tax(&self) -> Money {
        self.tax
    }

    /// Cumulative amount paid so far
    pub fn amount_paid(&self) -> Money {
        self.amount_paid
    }

    /// Most recent payment method, if any payment was recorded
    pub fn payment_method(&self) -> Option<PaymentMethod> {
        self.payment_method
    }

    /// The derived totals, consistent with the independent fields
    pub fn totals(&self) -> &BillTotals {
        &self.totals
    }

    /// Shorthand for the derived payment status
    pub fn status(&self) -> BillStatus {
        self.totals.status
    }

    /// Re-runs the pure derivation over the current independent fields
    ///
    /// Exposed for testability; the result always equals [`Bill::totals`]
    /// because every mutation refreshes the stored view.
    pub fn recompute(&self) -> BillTotals {
        BillTotals::derive(&self.charges, self.discount, self.tax, self.amount_paid)
    }

    /// Replaces the charge components, re-deriving the totals
    ///
    /// # Errors
    ///
    /// Returns `Validation` if any component is negative; the bill is left
    /// unchanged.
    pub fn set_charges(&mut self, charges: ChargeSheet) -> Result<(), CoreError> {
        charges.validate()?;
        self.charges = charges;
        self.refresh_totals();
        Ok(())
    }

    /// Accumulates a payment and re-derives the totals
    ///
    /// `amount_paid` only ever grows; it is never overwritten. Overpayment is
    /// accepted and drives the balance negative while the status stays paid.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if the amount is not strictly positive.
    pub fn apply_payment(
        &mut self,
        amount: Money,
        method: PaymentMethod,
    ) -> Result<(), CoreError> {
        if !amount.is_positive() {
            return Err(CoreError::validation(format!(
                "payment amount must be positive, got {amount}"
            )));
        }
        self.amount_paid = self.amount_paid + amount;
        self.payment_method = Some(method);
        self.refresh_totals();
        Ok(())
    }

    fn refresh_totals(&mut self) {
        self.totals = self.recompute();
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Bill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.id, self.patient_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn charges() -> ChargeSheet {
        ChargeSheet {
            consultation: Money::new(dec!(500.00)),
            room: Money::new(dec!(1200.00)),
            medicine: Money::zero(),
            lab: Money::zero(),
            other: Money::zero(),
        }
    }

    fn bill() -> Bill {
        Bill::new(
            BillId::new("BILL-1"),
            PatientId::new("PAT-1"),
            None,
            None,
            charges(),
            Money::new(dec!(100.00)),
            Money::new(dec!(50.00)),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_totals_derived_on_creation() {
        let b = bill();
        assert_eq!(b.totals().subtotal, Money::new(dec!(1700.00)));
        assert_eq!(b.totals().total_amount, Money::new(dec!(1650.00)));
        assert_eq!(b.totals().balance, Money::new(dec!(1650.00)));
        assert_eq!(b.status(), BillStatus::Unpaid);
    }

    #[test]
    fn test_negative_charge_rejected() {
        let mut c = charges();
        c.lab = Money::new(dec!(-1.00));
        let err = Bill::new(
            BillId::new("BILL-2"),
            PatientId::new("PAT-1"),
            None,
            None,
            c,
            Money::zero(),
            Money::zero(),
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn test_payment_accumulates() {
        let mut b = bill();
        b.apply_payment(Money::new(dec!(800.00)), PaymentMethod::Cash)
            .unwrap();
        assert_eq!(b.amount_paid(), Money::new(dec!(800.00)));
        assert_eq!(b.status(), BillStatus::Partial);

        b.apply_payment(Money::new(dec!(850.00)), PaymentMethod::Upi)
            .unwrap();
        assert_eq!(b.amount_paid(), Money::new(dec!(1650.00)));
        assert_eq!(b.totals().balance, Money::zero());
        assert_eq!(b.status(), BillStatus::Paid);
        assert_eq!(b.payment_method(), Some(PaymentMethod::Upi));
    }

    #[test]
    fn test_zero_or_negative_payment_rejected() {
        let mut b = bill();
        assert!(b.apply_payment(Money::zero(), PaymentMethod::Cash).is_err());
        assert!(b
            .apply_payment(Money::new(dec!(-5.00)), PaymentMethod::Cash)
            .is_err());
        // failed payments leave the bill untouched
        assert_eq!(b.amount_paid(), Money::zero());
        assert_eq!(b.status(), BillStatus::Unpaid);
    }

    #[test]
    fn test_overpayment_goes_negative_and_stays_paid() {
        let mut b = bill();
        b.apply_payment(Money::new(dec!(2000.00)), PaymentMethod::Card)
            .unwrap();
        assert_eq!(b.totals().balance, Money::new(dec!(-350.00)));
        assert_eq!(b.status(), BillStatus::Paid);
        assert!(b.totals().is_overpaid());
    }

    #[test]
    fn test_recompute_matches_stored_totals() {
        let mut b = bill();
        b.apply_payment(Money::new(dec!(123.45)), PaymentMethod::Cash)
            .unwrap();
        assert_eq!(b.recompute(), *b.totals());
        // and is idempotent
        assert_eq!(b.recompute(), b.recompute());
    }

    #[test]
    fn test_set_charges_rederives() {
        let mut b = bill();
        let mut c = *b.charges();
        c.room = Money::new(dec!(2400.00));
        b.set_charges(c).unwrap();
        assert_eq!(b.totals().subtotal, Money::new(dec!(2900.00)));
        assert_eq!(b.totals().total_amount, Money::new(dec!(2850.00)));
    }
}
