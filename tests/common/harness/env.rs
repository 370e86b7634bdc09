//! Isolated test environment with temp directories.

#![allow(dead_code)]

use super::FilepathsCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with a temporary data directory.
///
/// Directories are cleaned up on drop. A separate config home keeps the
/// developer's own `filepaths/config.toml` out of CLI runs.
pub struct TestEnv {
    /// The temporary data directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Temporary config home
    _config_dir: TempDir,
    root: PathBuf,
    config_home: PathBuf,
}

impl TestEnv {
    /// Creates a new isolated test environment.
    ///
    /// The root directory name contains no `.`, so it classifies as a directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::Builder::new()
            .prefix("filepaths-env-")
            .tempdir()
            .expect("Failed to create temp directory");
        let config_dir = tempfile::Builder::new()
            .prefix("filepaths-config-")
            .tempdir()
            .expect("Failed to create config directory");
        let root = temp_dir.path().to_path_buf();
        let config_home = config_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            _config_dir: config_dir,
            root,
            config_home,
        }
    }

    /// Returns the path to the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory used as `XDG_CONFIG_HOME` for CLI runs.
    pub fn config_home(&self) -> &Path {
        &self.config_home
    }

    /// Writes a file (creating parent directories) and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Creates files with the given names and empty content.
    pub fn touch_all(&self, names: &[&str]) {
        for name in names {
            self.write_file(name, "");
        }
    }

    /// Creates a subdirectory and returns its path.
    pub fn mkdir(&self, name: &str) -> PathBuf {
        let path = self.root.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create directory");
        path
    }

    /// Writes `filepaths/config.toml` under the config home.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let dir = self.config_home.join("filepaths");
        std::fs::create_dir_all(&dir).expect("Failed to create config directory");
        let path = dir.join("config.toml");
        std::fs::write(&path, content).expect("Failed to write config");
        path
    }

    /// Creates a command that resolves relative paths against this environment.
    pub fn cmd(&self) -> FilepathsCommand {
        FilepathsCommand::new()
            .config_home(&self.config_home)
            .base(&self.root)
    }

    /// Creates a command with no `--base`, relying on config or working directory.
    pub fn cmd_without_base(&self) -> FilepathsCommand {
        FilepathsCommand::new()
            .config_home(&self.config_home)
            .current_dir(&self.root)
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
