//! Diagnostic logging setup
//!
//! Off by default: hooks run inside another tool's event loop, and stdout is
//! reserved for the advisory payload. Setting `CODELORE_LOG` to anything but
//! `off` enables debug logging on stderr.

use std::env;
use std::io;

use tracing::Level;

/// Environment switch for diagnostic logging
pub const LOG_ENV: &str = "CODELORE_LOG";

/// Initialize stderr logging when `CODELORE_LOG` asks for it
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    let enabled = env::var(LOG_ENV).is_ok_and(|value| !value.is_empty() && value != "off");
    if !enabled {
        return;
    }

    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(io::stderr)
        .try_init()
        .ok();
}
