//! Tracing and logging setup shared by every binary and test harness that
//! drives the feed crates.

/// Initialize process-wide tracing.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Initialize tracing with an explicit filter directive (e.g. `"feedkit_products=debug"`).
///
/// `RUST_LOG` still wins when it is set.
pub fn init_with_default(directive: &str) {
    tracing::init_with_default(directive);
}

/// Subscriber configuration (filters, layers).
pub mod tracing;
