//! Resolution of a [`PathSpec`] into per-test-case parameters.
//!
//! `validate → resolve_absolute → classify → enumerate → to_cases`

use std::path::{Path, PathBuf};

use crate::domain::{MatchCase, PathSpec, ResolveError, ResolvedTarget, WildcardPattern};
use crate::infra::{BaseDir, PathResolver, enumerate};

/// Parameters for one generated test case: the absolute path of one file.
pub type TestCase = (PathBuf,);

/// Wraps each path as a single-element parameter tuple, preserving order.
pub fn to_cases(paths: Vec<PathBuf>) -> Vec<TestCase> {
    paths.into_iter().map(|path| (path,)).collect()
}

/// Stateless resolver over a [`PathResolver`] collaborator.
#[derive(Debug, Clone)]
pub struct Resolver<R = BaseDir> {
    paths: R,
    match_case: MatchCase,
}

impl<R: PathResolver> Resolver<R> {
    pub fn new(paths: R) -> Self {
        Self {
            paths,
            match_case: MatchCase::default(),
        }
    }

    /// Sets how search patterns compare file names.
    pub fn with_match_case(mut self, match_case: MatchCase) -> Self {
        self.match_case = match_case;
        self
    }

    /// Validates `spec`, resolves its path and classifies it.
    ///
    /// Does not touch the file system.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::EmptyPath` if the spec's path is empty.
    pub fn target(&self, spec: &PathSpec) -> Result<ResolvedTarget, ResolveError> {
        spec.validate()?;
        let absolute = self.paths.resolve_absolute(spec.path());
        let pattern = spec
            .search_pattern()
            .map(|p| WildcardPattern::with_match_case(p, self.match_case));
        Ok(ResolvedTarget::classify(absolute, pattern))
    }

    /// Resolves `spec` into one test case per matching file.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::EmptyPath` before any path resolution,
    /// `ResolveError::FileNotFound`/`DirectoryNotFound` for missing targets,
    /// and `ResolveError::Io` for other file-system failures.
    pub fn resolve(&self, spec: &PathSpec) -> Result<Vec<TestCase>, ResolveError> {
        let target = self.target(spec)?;
        let files = enumerate(&target)?;
        log::debug!(
            "resolved '{}' into {} test case(s)",
            spec.path(),
            files.len()
        );
        Ok(to_cases(files))
    }
}

/// Base directory of the crate under test.
fn test_base() -> Result<BaseDir, ResolveError> {
    BaseDir::for_tests().map_err(|source| ResolveError::Io {
        path: Path::new(".").into(),
        source,
    })
}

/// Resolves `path` (and optional `pattern`) relative to the crate under test.
///
/// ```no_run
/// let cases = filepaths::file_paths("tests/fixtures/TestFiles", Some("*.json")).unwrap();
/// for (path,) in cases {
///     let _contents = std::fs::read_to_string(path).unwrap();
/// }
/// ```
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn file_paths(path: &str, pattern: Option<&str>) -> Result<Vec<TestCase>, ResolveError> {
    let spec = PathSpec::new(path).with_optional_pattern(pattern.map(str::to_string));
    Resolver::new(test_base()?).resolve(&spec)
}

/// Data source that yields one test case per file.
///
/// A thin builder over [`PathSpec`] and [`Resolver`] for use from test code.
///
/// ```no_run
/// use filepaths::FilePathsData;
///
/// let cases = FilePathsData::new("tests/fixtures/TestFiles")
///     .pattern("testFile?.json")
///     .cases()
///     .unwrap();
/// assert_eq!(cases.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct FilePathsData {
    spec: PathSpec,
    base: Option<PathBuf>,
    match_case: MatchCase,
}

impl FilePathsData {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            spec: PathSpec::new(path),
            base: None,
            match_case: MatchCase::default(),
        }
    }

    pub fn pattern(mut self, pattern: impl Into<String>) -> Self {
        self.spec = self.spec.with_pattern(pattern);
        self
    }

    /// Resolves relative paths against `base` instead of the manifest directory.
    pub fn base_dir(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    pub fn case_sensitive(mut self) -> Self {
        self.match_case = MatchCase::Sensitive;
        self
    }

    pub fn spec(&self) -> &PathSpec {
        &self.spec
    }

    /// Resolves into test-case tuples.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`].
    pub fn cases(&self) -> Result<Vec<TestCase>, ResolveError> {
        let base = match &self.base {
            Some(base) => BaseDir::new(base.clone()),
            None => test_base()?,
        };
        Resolver::new(base)
            .with_match_case(self.match_case)
            .resolve(&self.spec)
    }

    /// Resolves into bare paths.
    ///
    /// # Errors
    ///
    /// See [`Resolver::resolve`].
    pub fn paths(&self) -> Result<Vec<PathBuf>, ResolveError> {
        Ok(self.cases()?.into_iter().map(|(path,)| path).collect())
    }
}
