//! Error taxonomy. Every variant is fatal for the command-line tool; the
//! library still propagates `Result` so callers can decide.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// No resolvable home directory for the current user.
    #[error("could not locate the user's home directory")]
    NoHomeDir,

    /// The history file could not be (re)written. Read failures are not an
    /// error: a missing history file simply yields an empty history.
    #[error("failed to write history to {}: {source}", path.display())]
    WriteHistory {
        path: PathBuf,
        source: io::Error,
    },

    /// The space-joined command exceeds the fixed length cap.
    #[error("command too long: {len} bytes exceeds the {max} byte limit")]
    CommandTooLong { len: usize, max: usize },

    /// Stream I/O failure on stdin/stdout.
    #[error(transparent)]
    Io(#[from] io::Error),
}
