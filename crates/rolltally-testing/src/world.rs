//! TestWorld pattern for declarative integration test setup.
//!
//! Provides a fluent interface for:
//! - Creating isolated test environments
//! - Writing transcripts and config files
//! - Executing CLI commands with proper context

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Declarative test environment builder.
///
/// # Example
/// ```no_run
/// use rolltally_testing::{TestWorld, TranscriptBuilder};
///
/// let world = TestWorld::new();
/// let html = TranscriptBuilder::new().roll("Alice", "目星", "成功").build();
/// world.write_transcript("log.html", &html).unwrap();
///
/// let result = world
///     .run("target/debug/rolltally", &["report", "log.html"])
///     .unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    /// Create a new isolated test environment.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join(".rolltally").join("config.toml");

        let mut env_vars = HashMap::new();
        env_vars.insert(
            "HOME".to_string(),
            temp_dir.path().to_string_lossy().to_string(),
        );

        Self {
            temp_dir,
            config_path,
            env_vars,
        }
    }

    /// Get the temp directory root (also the working directory of commands).
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Get the config file path passed to every command.
    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Add an environment variable for executed commands.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Write a transcript under the temp root and return its path.
    pub fn write_transcript(&self, name: &str, contents: impl AsRef<[u8]>) -> Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }

    /// Write the config file used by executed commands.
    pub fn write_config(&self, toml: &str) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.config_path, toml)?;
        Ok(())
    }

    /// Configure a CLI command with this test environment's settings.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config").arg(&self.config_path);
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Create a CLI command for the binary at `bin_path`.
    ///
    /// Integration tests pass `env!("CARGO_BIN_EXE_rolltally")`.
    pub fn command(&self, bin_path: impl AsRef<std::ffi::OsStr>) -> Command {
        let mut cmd = Command::new(bin_path);
        self.configure_command(&mut cmd);
        cmd
    }

    /// Execute the binary with `args` and capture the result.
    pub fn run(&self, bin_path: impl AsRef<std::ffi::OsStr>, args: &[&str]) -> Result<CliResult> {
        let output = self.command(bin_path).args(args).output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Result of a CLI command execution.
#[derive(Debug)]
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    /// Check if the command succeeded.
    pub fn success(&self) -> bool {
        self.status.success()
    }

    /// Process exit code, if any.
    pub fn code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    /// Get stdout as a string.
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Get stderr as a string.
    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
