//! Error taxonomy for path resolution.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub(crate) const PATH_NULL_OR_EMPTY: &str = "The provided path cannot be null or empty!";
pub(crate) const FILE_NOT_FOUND: &str = "The provided file does not exists!";
pub(crate) const DIRECTORY_NOT_FOUND: &str = "The provided directory does not exists!";

/// Errors raised while resolving a [`PathSpec`](super::PathSpec) into test cases.
///
/// The first three variants are usage errors and display their message verbatim,
/// so a test report shows exactly what went wrong with the configuration.
/// `Io` carries any other file-system failure untranslated.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{}", PATH_NULL_OR_EMPTY)]
    EmptyPath,

    #[error("{}", FILE_NOT_FOUND)]
    FileNotFound { path: PathBuf },

    #[error("{}", DIRECTORY_NOT_FOUND)]
    DirectoryNotFound { path: PathBuf },

    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ResolveError {
    /// Returns the user-facing message for this error.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns true for configuration mistakes, false for environment failures.
    pub fn is_usage_error(&self) -> bool {
        !matches!(self, ResolveError::Io { .. })
    }

    /// Returns the absolute path the error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            ResolveError::EmptyPath => None,
            ResolveError::FileNotFound { path }
            | ResolveError::DirectoryNotFound { path }
            | ResolveError::Io { path, .. } => Some(path.as_path()),
        }
    }
}
