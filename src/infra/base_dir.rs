//! Turning a raw, possibly relative path into an absolute one.

use std::io;
use std::path::{Component, Path, PathBuf};

/// Resolves a raw path string to an absolute path.
///
/// Implementations must not touch the file system.
pub trait PathResolver {
    fn resolve_absolute(&self, raw: &str) -> PathBuf;
}

/// Resolves relative paths against a fixed base directory.
///
/// Absolute input is returned as-is apart from lexical normalization
/// (`.` removed, `..` folded into its parent, never above the root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir {
    base: PathBuf,
}

impl BaseDir {
    /// Creates a resolver for `base`, normalizing it lexically.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self {
            base: normalize(&base.into()),
        }
    }

    /// Base directory for code running under `cargo test`.
    ///
    /// Uses `CARGO_MANIFEST_DIR` when set, otherwise the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if `CARGO_MANIFEST_DIR` is unset and the working
    /// directory cannot be read.
    pub fn for_tests() -> io::Result<Self> {
        match std::env::var_os("CARGO_MANIFEST_DIR") {
            Some(dir) => Ok(Self::new(dir)),
            None => Self::current_dir(),
        }
    }

    /// Base directory of the running process.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory cannot be read (for
    /// example, it was deleted). The base must be absolute, so there is no
    /// relative fallback.
    pub fn current_dir() -> io::Result<Self> {
        std::env::current_dir().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.base
    }
}

impl PathResolver for BaseDir {
    fn resolve_absolute(&self, raw: &str) -> PathBuf {
        let raw = to_native_separators(raw);
        let raw = Path::new(&raw);
        let resolved = if raw.is_absolute() {
            normalize(raw)
        } else {
            normalize(&self.base.join(raw))
        };
        log::debug!("resolved '{}' to {}", raw.display(), resolved.display());
        resolved
    }
}

/// Accepts `/` everywhere and `\` where it is the native separator.
fn to_native_separators(raw: &str) -> String {
    if std::path::MAIN_SEPARATOR == '/' {
        raw.to_string()
    } else {
        raw.replace('/', std::path::MAIN_SEPARATOR_STR)
    }
}

/// Lexically normalizes a path without consulting the file system.
pub fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    out
}
