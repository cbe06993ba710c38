//! TestWorld pattern for declarative integration test setup.

use anyhow::Result;
use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated environment: a temp dir holding the config file and shipment data.
///
/// # Example
/// ```ignore
/// use assert_cmd::cargo::cargo_bin_cmd;
/// use shipdash_testing::TestWorld;
///
/// let world = TestWorld::new().with_shipments("[]");
/// let mut cmd = cargo_bin_cmd!("shipdash");
/// world.configure_command(&mut cmd).arg("dashboard");
/// ```
pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    endpoint: String,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config").join("config.toml");
        let endpoint = temp_dir
            .path()
            .join("shipments.json")
            .display()
            .to_string();

        Self {
            temp_dir,
            config_path,
            endpoint,
        }
    }

    /// Write `json` as the shipment list the CLI will read.
    pub fn with_shipments(self, json: &str) -> Self {
        std::fs::write(self.shipments_path(), json).expect("Failed to write shipments");
        self
    }

    /// Point the CLI somewhere else (an unreachable URL, a missing file, ...).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn shipments_path(&self) -> PathBuf {
        self.temp_dir.path().join("shipments.json")
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Configure a CLI command with this world's config path and endpoint.
    ///
    /// The caller provides the base command (from `cargo_bin_cmd!("shipdash")`).
    /// Ambient `SHIPDASH_*` and `RUST_LOG` variables are cleared.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--endpoint")
            .arg(&self.endpoint)
            .env_remove("SHIPDASH_CONFIG")
            .env_remove("SHIPDASH_ENDPOINT")
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path())
    }

    /// Like `configure_command`, without `--endpoint` so config resolution is exercised.
    pub fn configure_command_without_endpoint<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.arg("--config")
            .arg(&self.config_path)
            .env_remove("SHIPDASH_CONFIG")
            .env_remove("SHIPDASH_ENDPOINT")
            .env_remove("RUST_LOG")
            .current_dir(self.temp_dir.path())
    }

    /// Run a configured command and capture its output.
    pub fn run(&self, mut cmd: Command, args: &[&str]) -> Result<CliResult> {
        self.configure_command(&mut cmd);
        cmd.args(args);
        CliResult::from_command(cmd)
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
    pub fn from_command(mut cmd: Command) -> Result<Self> {
        let output = cmd.output()?;
        Ok(Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }
}
