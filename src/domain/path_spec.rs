//! Input configuration for a single resolution.

use serde::{Deserialize, Serialize};

use super::error::ResolveError;

/// A path (file or directory, absolute or relative) plus an optional
/// wildcard pattern applied to file names when the path is a directory.
///
/// # Examples
///
/// ```
/// use filepaths::domain::PathSpec;
///
/// let spec = PathSpec::new("TestFiles").with_pattern("*.json");
/// assert_eq!(spec.path(), "TestFiles");
/// assert_eq!(spec.search_pattern(), Some("*.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSpec {
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    search_pattern: Option<String>,
}

impl PathSpec {
    /// Creates a spec with no search pattern.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            search_pattern: None,
        }
    }

    /// Sets the search pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.search_pattern = Some(pattern.into());
        self
    }

    /// Sets or clears the search pattern.
    pub fn with_optional_pattern(mut self, pattern: Option<String>) -> Self {
        self.search_pattern = pattern;
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the search pattern, treating an empty string as absent.
    pub fn search_pattern(&self) -> Option<&str> {
        self.search_pattern.as_deref().filter(|p| !p.is_empty())
    }

    /// Rejects an empty path. The search pattern is never validated.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::EmptyPath` if the path is empty.
    pub fn validate(&self) -> Result<(), ResolveError> {
        if self.path.is_empty() {
            return Err(ResolveError::EmptyPath);
        }
        Ok(())
    }
}
