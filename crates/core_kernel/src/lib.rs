//! Core Kernel - Foundational types and utilities for the hospital system
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Money type with precise two-decimal fixed-point arithmetic
//! - Opaque identifiers for clinical and billing entities
//! - The common error taxonomy shared by domain services and storage ports

pub mod money;
pub mod identifiers;
pub mod error;
pub mod ports;

pub use money::{Money, MoneyError};
pub use identifiers::{
    PatientId, DoctorId, WardId, BedId,
    AdmissionId, OpdRecordId, BillId,
};
pub use error::{CoreError, ErrorKind};
pub use ports::DomainPort;
