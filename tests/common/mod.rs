//! Test fixture utilities for integration tests.

pub mod harness;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Returns the path to the fixtures directory.
#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Returns the path to the nine-file `TestFiles` fixture directory.
#[allow(dead_code)]
pub fn test_files_dir() -> PathBuf {
    fixtures_dir().join("TestFiles")
}

/// Path of `TestFiles` relative to the manifest directory.
#[allow(dead_code)]
pub const TEST_FILES: &str = "tests/fixtures/TestFiles";

/// Collects the file names of `paths` into a set.
#[allow(dead_code)]
pub fn file_names<P: AsRef<Path>>(paths: impl IntoIterator<Item = P>) -> HashSet<String> {
    paths
        .into_iter()
        .map(|p| {
            p.as_ref()
                .file_name()
                .expect("resolved path should have a file name")
                .to_string_lossy()
                .to_string()
        })
        .collect()
}
