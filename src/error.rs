//! Error type shared by filter construction and the command runner.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A construction parameter was out of range: a zero-sized bit
    /// array, an empty hash family, more hashers than available seeds,
    /// or a value that could not be parsed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The command source could not be opened or read.
    #[error("could not read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub(crate) fn invalid<S: Into<String>>(msg: S) -> Error {
        Error::InvalidArgument(msg.into())
    }
}
