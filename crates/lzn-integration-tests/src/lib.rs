#![deny(missing_docs)]

//! # lzn-integration-tests
//!
//! Cross-crate scenario tests for the Lizenz Protocol core. The crate
//! itself only carries the shared tracing bootstrap; the scenarios live
//! under `tests/`.

/// Install a JSON test subscriber once per process. Safe to call from
/// every test; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .json()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_test_writer()
        .try_init();
}
