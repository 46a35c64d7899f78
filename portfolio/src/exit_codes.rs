//! Stable exit codes for portfolio CLI commands.

/// Command succeeded.
pub const OK: i32 = 0;
/// Invalid config, arguments, or project data, or any other error.
pub const INVALID: i32 = 1;
/// Validation blocked the contact submission; nothing was sent.
pub const BLOCKED: i32 = 2;
/// The contact submission was sent but the transport call failed.
pub const FAILED: i32 = 3;
