//! Exit codes for the CLI
//!
//! A failing `git log` exits with git's own status instead of `GIT_ERROR`.

/// Success
pub const SUCCESS: i32 = 0;

/// General error, including usage and changelog precondition failures
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Git error without an exit status of its own
pub const GIT_ERROR: i32 = 3;
