use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Indicates that an error occurred while building the word index or reading the board.
#[derive(Debug, Error)]
pub enum SolverError {
    /// The dictionary could not be opened or read. This is fatal for a run.
    #[error("failed to load dictionary {path:?}: {source}")]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// A dictionary entry was too long or contained non-alphabetic characters.
    ///
    /// The loader logs and skips these; they are never fatal.
    #[error("skipping dictionary entry {entry:?}: {reason}")]
    MalformedEntry { entry: String, reason: &'static str },
    /// The three letter pools do not form a valid board.
    #[error("invalid letter pool: {0}")]
    InvalidLetterPool(String),
    /// A word given directly to the index contained a character outside `a`-`z`.
    #[error("unsupported character {0:?}, only the letters a-z are allowed")]
    UnsupportedCharacter(char),
    /// Words cannot be added once the index has been collapsed into a radix tree.
    #[error("cannot insert into an index that has already been collapsed")]
    IndexCollapsed,
}
