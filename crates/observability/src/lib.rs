//! Tracing and logging setup shared by the catalog binaries and tests.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize human-readable logging for tests.
///
/// Output goes through the test harness capture, so it only shows up for
/// failing tests (or with `--nocapture`).
pub fn init_for_tests() {
    tracing::init_test();
}

/// Tracing configuration (filters, layers).
pub mod tracing;
