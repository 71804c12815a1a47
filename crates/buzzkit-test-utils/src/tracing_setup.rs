//! Tracing initialisation for tests.
//!
//! [`init_test_tracing`] installs a subscriber at most once per process, so
//! every test may call it.

use tracing_subscriber::EnvFilter;

/// Install a subscriber writing to the test-harness writer. `RUST_LOG`
/// overrides the default `warn` filter.
///
/// # Example
///
/// ```ignore
/// #[test]
/// fn my_test() {
///     buzzkit_test_utils::tracing_setup::init_test_tracing();
///     tracing::debug!("visible when RUST_LOG=debug");
/// }
/// ```
pub fn init_test_tracing() {
    init_test_tracing_at("warn");
}

/// Like [`init_test_tracing`] with an explicit default filter.
pub fn init_test_tracing_at(default_filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_test_writer()
        .try_init();
}
