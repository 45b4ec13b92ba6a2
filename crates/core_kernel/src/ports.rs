//! Port infrastructure shared by the domain storage traits
//!
//! Each domain defines a port trait describing the create/read/update/delete
//! operations it needs from the transactional store. Adapters implement these
//! traits; the in-process adapter in `infra_memory` is the reference
//! implementation used by the test suite, and a database-backed adapter slots
//! in behind the same trait.
//!
//! Compound port operations (claim-and-admit, complete-discharge, bill update)
//! are the transactional boundary: an adapter must apply each one atomically,
//! so the read-check-write inside `admit` cannot interleave with a concurrent
//! caller. That is the row-lock/transaction requirement expressed at the trait
//! level rather than in SQL.

/// Marker trait for all domain storage ports
///
/// Port traits extend this marker so they are thread-safe and usable behind
/// `Arc<dyn ...>` in async contexts.
pub trait DomainPort: Send + Sync + 'static {}
