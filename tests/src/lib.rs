//! Shared fixtures for the integration tests.

pub mod prelude;

/// Routes library logs through the test harness.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
