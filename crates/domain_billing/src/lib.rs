//! Billing Domain - Deterministic Bill Computation
//!
//! This crate derives every computed bill field - subtotal, total, balance,
//! payment status - from the bill's independent fields, on every mutation.
//! The derived values live in a separate read-only [`BillTotals`] struct that
//! can only be produced by the pure `recompute` derivation, so nothing can set
//! them directly and they can never drift from the charges and payments they
//! are defined over.
//!
//! # Formulas
//!
//! - `subtotal = consultation + room + medicine + lab + other`
//! - `total_amount = subtotal - discount + tax`
//! - `balance = total_amount - amount_paid`
//! - `status`: paid when the balance reaches zero (overpayment keeps it paid
//!   with a negative balance), partial while something but not everything has
//!   been paid, unpaid otherwise
//!
//! All arithmetic is two-decimal fixed-point; the status comparison is exact
//! decimal equality, never an epsilon test.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{BillingEngine, NewBill};
//!
//! let engine = BillingEngine::new(store);
//! let bill = engine.create_bill(new_bill).await?;
//! let bill = engine.record_payment(&bill.id, amount, PaymentMethod::Cash).await?;
//! assert!(bill.totals().balance.is_zero());
//! ```

pub mod bill;
pub mod payment;
pub mod ports;
pub mod engine;

pub use bill::{Bill, BillStatus, BillTotals, ChargeSheet};
pub use payment::PaymentMethod;
pub use ports::BillStore;
pub use engine::{BillingEngine, NewBill};
