//! Logging utilities
//!
//! The crate logs through the `log` facade. Applications that do not
//! install their own logger can call [`init`] to get an `env_logger`
//! backed default.

pub use log::{debug, error, info, trace, warn};

/// Initialize the default logging backend.
///
/// Reads the `RUST_LOG` environment variable. Calling this more than once
/// (or after another logger was installed) is a no-op.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
