//! Test environment for isolated asset-sha runs.
//!
//! Provides `TestEnv` - a temp working directory containing a `dist/`
//! build output folder, plus helpers to run the CLI against it.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Variables that would leak host configuration into a run
const ISOLATED_VARS: &[&str] = &[
    "ASSET_SHA_PATTERNS",
    "ASSET_SHA_ALGORITHM",
    "ASSET_SHA_OUT_FILE",
    "ASSET_SHA_COMPACT",
    "RUST_LOG",
];

/// Result of running the CLI
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim())
            .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, self.stdout))
    }
}

/// Isolated working directory with a `dist/` build output folder
pub struct TestEnv {
    pub root: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let root = tempfile::tempdir().expect("Failed to create temp dir");
        std::fs::create_dir_all(root.path().join("dist")).expect("Failed to create dist");
        Self {
            root,
            bin: PathBuf::from(env!("CARGO_BIN_EXE_asset-sha")),
        }
    }

    /// The build output directory
    pub fn dist(&self) -> PathBuf {
        self.root.path().join("dist")
    }

    /// Write a text asset into `dist/`
    pub fn write_asset(&self, name: &str, content: &str) -> &Self {
        self.write_asset_bytes(name, content.as_bytes())
    }

    /// Write a raw asset into `dist/`
    pub fn write_asset_bytes(&self, name: &str, content: &[u8]) -> &Self {
        let path = self.dist().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directories");
        }
        std::fs::write(&path, content).expect("Failed to write asset");
        self
    }

    /// Write a file relative to the working directory
    pub fn write_file(&self, relative: &str, content: &str) {
        std::fs::write(self.root.path().join(relative), content).expect("Failed to write file");
    }

    /// Read a file from `dist/`
    pub fn read_dist(&self, name: &str) -> String {
        std::fs::read_to_string(self.dist().join(name))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
    }

    pub fn dist_has(&self, name: &str) -> bool {
        self.dist().join(name).exists()
    }

    /// Run the CLI from the working directory
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run the CLI with extra environment variables
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_in(self.root.path(), args, env_vars)
    }

    fn run_in(&self, cwd: &Path, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(cwd).args(args);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute asset-sha");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
