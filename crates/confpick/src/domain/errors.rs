//! Domain-specific errors.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that end a selection attempt.
#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("failed to create config root {}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to list config root {}", .path.display())]
    DirectoryReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The root exists but holds no subdirectories. Callers are expected to stop here.
    #[error("no config directories found under {}", .root.display())]
    NoCandidatesFound { root: PathBuf },
    #[error("input ended before a config was chosen")]
    InputStreamExhausted,
    #[error("console i/o failed")]
    Console(#[from] io::Error),
}

/// Rejected operator input. The prompt loop recovers from these by asking again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Invalid number, try again:")]
    InvalidNumber,
    #[error("No config for that number, try again:")]
    OutOfRange { value: i32, count: usize },
}
