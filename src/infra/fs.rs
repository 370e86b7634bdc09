//! File enumeration for resolved targets.

use crate::domain::{ResolveError, ResolvedTarget, WildcardPattern};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists the file paths a target denotes.
///
/// # Errors
///
/// Returns `ResolveError::FileNotFound` or `ResolveError::DirectoryNotFound`
/// when the target does not exist, and `ResolveError::Io` for any other
/// file-system failure.
pub fn enumerate(target: &ResolvedTarget) -> Result<Vec<PathBuf>, ResolveError> {
    match target {
        ResolvedTarget::SingleFile(path) => single_file(path),
        ResolvedTarget::Directory { path, pattern } => list_directory(path, pattern.as_ref()),
    }
}

/// Returns `path` as a one-element list if it is an existing file.
///
/// A directory at `path` counts as a missing file.
///
/// # Errors
///
/// Returns `ResolveError::FileNotFound` if no file exists at `path`.
/// Returns `ResolveError::Io` if the file system cannot be queried.
pub fn single_file(path: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(vec![path.to_path_buf()]),
        Ok(_) => Err(ResolveError::FileNotFound { path: path.into() }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(ResolveError::FileNotFound { path: path.into() })
        }
        Err(e) => Err(ResolveError::Io {
            path: path.into(),
            source: e,
        }),
    }
}

/// Lists the files directly inside `dir`, optionally filtered by `pattern`.
///
/// Only immediate children whose type is a file are returned (symlinks are
/// followed). Children that cannot be inspected are skipped with a warning.
/// Results keep the order the file system lists them in.
///
/// # Errors
///
/// Returns `ResolveError::DirectoryNotFound` if no directory exists at `dir`.
/// Returns `ResolveError::Io` if the directory cannot be read.
pub fn list_directory(
    dir: &Path,
    pattern: Option<&WildcardPattern>,
) -> Result<Vec<PathBuf>, ResolveError> {
    match std::fs::metadata(dir) {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => return Err(ResolveError::DirectoryNotFound { path: dir.into() }),
        Err(e) => return Err(from_io(dir, e)),
    }

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true);

    let mut files = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            // A broken child (dangling link, link loop, unreadable target)
            // is skipped; only failures on `dir` itself abort the listing.
            Err(e) if e.depth() > 0 => {
                log::warn!(
                    "skipping unreadable entry {}: {}",
                    display_error_path(&e, dir),
                    e
                );
                continue;
            }
            Err(e) => {
                let path = e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                return Err(from_io(&path, io::Error::from(e)));
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if let Some(pattern) = pattern {
            if !pattern.matches(&entry.file_name().to_string_lossy()) {
                log::trace!("pattern '{}' rejected {}", pattern, entry.path().display());
                continue;
            }
        }

        log::trace!("listed {}", entry.path().display());
        files.push(entry.into_path());
    }

    log::debug!("listed {} file(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Maps a failed directory query, keeping "not found" distinct from other I/O failures.
fn from_io(path: &Path, error: io::Error) -> ResolveError {
    match error.kind() {
        io::ErrorKind::NotFound => ResolveError::DirectoryNotFound { path: path.into() },
        _ => ResolveError::Io {
            path: path.into(),
            source: error,
        },
    }
}

fn display_error_path(error: &walkdir::Error, fallback: &Path) -> String {
    error.path().unwrap_or(fallback).display().to_string()
}
