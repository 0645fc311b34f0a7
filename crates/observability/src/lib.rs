//! Tracing and logging setup shared by binaries.

/// Initialize process-wide logging from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogSettings::from_env());
}

/// Log settings (filter, output format).
pub mod settings;

/// Tracing subscriber installation.
pub mod tracing;

pub use settings::{LogFormat, LogSettings};
