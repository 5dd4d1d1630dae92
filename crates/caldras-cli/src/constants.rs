//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure (I/O, persistence).
    pub const FAILURE: i32 = 1;

    /// Note number out of range.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// Missing or wrong note password.
    pub const AUTH_FAILED: i32 = 5;
}

/// Environment variable holding the password for a protected note.
pub const PASSWORD_ENV: &str = "CALDRAS_PASSWORD";

/// Environment variable holding the new password for `passwd`.
pub const NEW_PASSWORD_ENV: &str = "CALDRAS_NEW_PASSWORD";

/// Line that ends interactive multi-line entry.
pub const END_OF_INPUT: &str = "EOF";

/// Characters of body shown by `check`.
pub const PREVIEW_CHARS: usize = 100;
