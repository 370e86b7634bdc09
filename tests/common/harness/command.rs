//! Fluent wrapper around assert_cmd::Command.

// Allow dead code since each test binary uses a different subset
#![allow(dead_code)]

use assert_cmd::Command;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Fluent wrapper around `assert_cmd::Command` for the `filepaths` binary.
///
/// Provides a builder-style API for constructing and executing CLI commands.
pub struct FilepathsCommand {
    args: Vec<String>,
    envs: Vec<(String, String)>,
    current_dir: Option<PathBuf>,
}

impl FilepathsCommand {
    /// Creates a new command for the `filepaths` binary.
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            envs: Vec::new(),
            current_dir: None,
        }
    }

    /// Sets the `--base` option.
    pub fn base(mut self, path: &Path) -> Self {
        self.args.push("--base".to_string());
        self.args.push(path.to_string_lossy().to_string());
        self
    }

    /// Points `XDG_CONFIG_HOME` at `path`.
    pub fn config_home(mut self, path: &Path) -> Self {
        self.envs.push((
            "XDG_CONFIG_HOME".to_string(),
            path.to_string_lossy().to_string(),
        ));
        self
    }

    /// Runs the binary from `path`.
    pub fn current_dir(mut self, path: &Path) -> Self {
        self.current_dir = Some(path.to_path_buf());
        self
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Returns the current arguments (for testing).
    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("filepaths").expect("Failed to find filepaths binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        for (key, value) in &self.envs {
            cmd.env(key, value);
        }
        if let Some(dir) = &self.current_dir {
            cmd.current_dir(dir);
        }
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses stdout as JSON.
    pub fn output_json<T: DeserializeOwned>(self) -> T {
        let output = self.output_success();
        serde_json::from_str(&output).expect("Failed to parse output as JSON")
    }

    // ===========================================
    // Command Shortcuts
    // ===========================================

    /// Configures for the `resolve` command.
    pub fn resolve(self, path: &str) -> Self {
        self.args(["resolve", path])
    }

    /// Configures for the `resolve` command with a search pattern.
    pub fn resolve_with(self, path: &str, pattern: &str) -> Self {
        self.args(["resolve", path, pattern])
    }

    /// Configures for the `classify` command.
    pub fn classify(self, path: &str) -> Self {
        self.args(["classify", path])
    }

    // ===========================================
    // Format Options
    // ===========================================

    /// Adds `--format json` to the command.
    pub fn format_json(self) -> Self {
        self.args(["--format", "json"])
    }

    /// Adds `--format paths` to the command.
    pub fn format_paths(self) -> Self {
        self.args(["--format", "paths"])
    }
}

impl Default for FilepathsCommand {
    fn default() -> Self {
        Self::new()
    }
}
