//! Process exit codes returned by [`run`](crate::run).

pub const SUCCESS: i32 = 0;

/// Any failure: bad arguments, invalid configuration, engine or I/O errors.
pub const ERROR: i32 = 2;

/// Interactive input ended mid-game (stdin closed or Ctrl+D).
pub const INTERRUPTED: i32 = 130;
