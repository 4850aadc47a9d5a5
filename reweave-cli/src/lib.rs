//! Library surface of the reweave CLI.
//!
//! Exposes command parsing, execution, rendering, and logging bootstrap so
//! integration tests can drive the CLI without spawning a process.

pub mod cli;
pub mod logging;
