// src/exit.rs
//! Standardized process exit codes for `reekrun`.
//!
//! Provides a stable contract for scripts and editor integrations.

use std::process::Termination;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ReekrunExit {
    /// Analysis completed and found nothing.
    Success = 0,
    /// Analyzer could not be run, or its output was unreadable.
    Error = 1,
    /// Input could not be read (missing file, unreadable stdin).
    InvalidInput = 2,
    /// Analysis completed and reported at least one smell.
    SmellsFound = 6,
}

impl ReekrunExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Termination for ReekrunExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}
