//! Tracing/logging (shared setup).

/// Initialize process-wide observability (tracing/logging) with the default
/// filter.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init("info");
}

/// Initialize with a different fallback filter (still overridable via
/// `RUST_LOG`).
pub fn init_with_default_filter(filter: &str) {
    tracing::init(filter);
}

/// Tracing configuration (filters, output format).
pub mod tracing;
