//! Admissions Domain - Bed Allocation Ledger
//!
//! This crate keeps a ward's bed inventory consistent with patient admission
//! state. The central invariant: a bed is `occupied` if and only if exactly one
//! active admission references it, so a ward's available-bed count is always
//! derivable from ledger state alone and is never stored redundantly.
//!
//! # Lifecycle
//!
//! - Creating a ward materializes its beds, numbered 1..capacity, all vacant
//! - Admitting claims a vacant bed and writes the admission atomically; a lost
//!   race on the same bed rejects the second caller with a conflict
//! - Discharging is the single, terminal transition of an admission; it
//!   releases the bed (if one is still attached) in the same atomic step
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_admissions::{BedLedger, NewWard, AdmitRequest};
//!
//! let ledger = BedLedger::new(store);
//! let ward = ledger.create_ward(new_ward).await?;
//! let admission = ledger.admit(admit_request).await?;
//! assert_eq!(ledger.available_beds(&ward.id).await?, ward.total_beds - 1);
//! ```

pub mod ward;
pub mod bed;
pub mod admission;
pub mod ports;
pub mod service;

pub use ward::{Ward, WardType};
pub use bed::{Bed, BedStatus};
pub use admission::{Admission, AdmissionStatus};
pub use ports::AdmissionStore;
pub use service::{BedLedger, NewWard, AdmitRequest, room_charge};
