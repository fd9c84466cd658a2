//! Exit code constants for the rowlint CLI.
//!
//! Findings in the scanned file never change the exit code; only
//! operational failures do:
//! - 0: Success (with or without findings)
//! - 1: User error (bad args, unreadable source file)
//! - 2: Config error (unreadable, unparsable, or invalid config file)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or unreadable source file.
pub const USER_ERROR: i32 = 1;

/// Config error: the config file could not be loaded or failed validation.
pub const CONFIG_ERROR: i32 = 2;
