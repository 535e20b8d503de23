// src/exit_codes.rs
//! Stable exit codes for scripting around the CLI.

/// Every directory was reached and every planned action applied.
pub const OK: i32 = 0;
/// The run finished, but some directories were skipped or some writes
/// failed; details are in the run log.
pub const PARTIAL: i32 = 1;
/// A configuration or environment problem stopped the run before or during
/// the pass.
pub const FATAL: i32 = 2;
