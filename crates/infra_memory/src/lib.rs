//! In-Process Storage Adapter
//!
//! Implements the admissions and billing storage ports over in-memory maps
//! guarded by a single `tokio::sync::RwLock`. Every compound port operation
//! runs under one writer acquisition, which is the in-process equivalent of
//! the row-locked transaction a database adapter would use: two tasks racing
//! to claim the same bed serialize on the lock, the first wins, and the
//! second observes the bed occupied and gets a conflict.
//!
//! The adapter is the reference implementation for the port contracts and
//! backs the integration test suite. It holds no derived state of its own -
//! available-bed counts and bill totals are always computed from what is
//! stored.

pub mod store;

pub use store::MemoryStore;
