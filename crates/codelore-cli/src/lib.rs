//! Codelore hook CLI
//!
//! Thin binary layer over [`codelore_hooks`]: reads one hook event from
//! stdin, routes it through the dispatcher, prints the advisory (if any) to
//! stdout, and always exits 0 on the hook paths. Stdout belongs to the
//! advisory payload; diagnostics go to stderr behind the `CODELORE_LOG`
//! switch.

pub mod commands;
pub mod logging;

pub use commands::{run_hook, run_init_rules, run_validate, ValidationReport, PLUGIN_ROOT_ENV};
