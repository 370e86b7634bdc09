//! Syntactic classification of a resolved path into a file or directory target.

use std::path::{Path, PathBuf};

use super::pattern::WildcardPattern;

/// What a resolved absolute path denotes.
///
/// Classification looks only at the path string: a last segment containing
/// a `.` is a file, anything else is a directory. Nothing is read from disk,
/// so an extensionless file is treated as a directory and a directory named
/// `archive.old` as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTarget {
    SingleFile(PathBuf),
    Directory {
        path: PathBuf,
        pattern: Option<WildcardPattern>,
    },
}

impl ResolvedTarget {
    /// Classifies `absolute`, attaching `pattern` only to directory targets.
    pub fn classify(absolute: PathBuf, pattern: Option<WildcardPattern>) -> Self {
        if has_extension(&absolute) {
            log::debug!("classified {} as a single file", absolute.display());
            ResolvedTarget::SingleFile(absolute)
        } else {
            log::debug!("classified {} as a directory", absolute.display());
            ResolvedTarget::Directory {
                path: absolute,
                pattern,
            }
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            ResolvedTarget::SingleFile(path) => path,
            ResolvedTarget::Directory { path, .. } => path,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, ResolvedTarget::SingleFile(_))
    }
}

/// Returns true if the last segment of `path` contains an extension separator.
pub fn has_extension(path: &Path) -> bool {
    path.file_name()
        .is_some_and(|name| name.to_string_lossy().contains('.'))
}
