//! Error types for the bundling pipeline.
//!
//! Every variant is fatal: the run aborts and the output is treated as garbage.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for bundling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while walking, reading, normalizing or emitting.
#[derive(Error, Debug)]
pub enum Error {
    /// The source tree could not be enumerated.
    #[error("failed to walk {}: {source}", .root.display())]
    Walk {
        /// Root the walk started from
        root: PathBuf,
        /// Underlying traversal error
        #[source]
        source: walkdir::Error,
    },

    /// The source root is missing or is not a directory.
    #[error("source root {} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A path component cannot be represented as UTF-8.
    #[error("path {} is not valid UTF-8; no identifier can be derived", .0.display())]
    NonUtf8Path(PathBuf),

    /// Two relative paths normalize to the same identifier.
    #[error("identifier collision: {first:?} and {second:?} both normalize to {identifier}")]
    IdentifierCollision {
        /// Shared identifier
        identifier: String,
        /// Relative path that claimed the identifier first
        first: String,
        /// Relative path that collided with it
        second: String,
    },

    /// File system operation with context.
    #[error("{context} {}: {source}", .path.display())]
    Fs {
        /// Action that failed (e.g. "reading")
        context: &'static str,
        /// Path the action was applied to
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Manifest serialization failure.
    #[error("failed to write manifest {}: {source}", .path.display())]
    Manifest {
        /// Manifest destination
        path: PathBuf,
        /// Serialization error
        #[source]
        source: serde_json::Error,
    },

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

/// Attaches a path and an action description to IO errors.
pub trait ErrorExt<T> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Turns a missing value into a [`Error::GenericError`].
pub trait Context<T> {
    fn context(self, msg: &str) -> Result<T>;
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::GenericError(msg.to_string()))
    }
}

/// Returns early with a formatted [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($($arg)*)))
    };
}
