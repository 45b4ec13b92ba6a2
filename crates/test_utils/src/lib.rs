//! Test Utilities Crate
//!
//! Shared test infrastructure for the hospital core test suite.
//!
//! # Modules
//!
//! - `fixtures`: id generators and pre-built amounts for common entities
//! - `builders`: builder patterns for test data construction
//! - `assertions`: domain-invariant assertion helpers

pub mod fixtures;
pub mod builders;
pub mod assertions;

pub use fixtures::*;
pub use builders::*;
pub use assertions::*;

use once_cell::sync::Lazy;

static TRACING: Lazy<()> = Lazy::new(|| {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "debug".into()),
        )
        .with_test_writer()
        .try_init()
        .ok();
});

/// Initializes tracing output for a test, once per process
pub fn init_test_tracing() {
    Lazy::force(&TRACING);
}
