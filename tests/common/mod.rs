//! Shared testing utilities for publish-trigger CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

#[allow(dead_code)]
pub const REPO_URL: &str = "https://github.com/octo/site";
#[allow(dead_code)]
pub const TOKEN: &str = "ghp_integration_token";
#[allow(dead_code)]
pub const LIST_PATH: &str = "/repos/octo/site/actions/workflows";

/// Testing harness providing an isolated settings file and key material.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    settings_path: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with no API override.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let settings_path = root.path().join("publish-trigger.toml");
        Self { root, settings_path }
    }

    /// Create an environment whose API calls go to `api_url`.
    pub fn with_api(api_url: &str) -> Self {
        let ctx = Self::new();
        fs::write(
            &ctx.settings_path,
            format!("[api]\nbase_url = \"{}\"\ntimeout_secs = 5\n", api_url),
        )
        .expect("Failed to write settings file");
        ctx
    }

    pub fn settings_path(&self) -> &Path {
        &self.settings_path
    }

    /// Build a command for the `publish-trigger` binary with fixed key material.
    pub fn cli(&self) -> Command {
        let mut cmd = self.cli_without_keys();
        cmd.env("TRIGGER_GITHUB_ACTION_ENCRYPTION_KEY", "integration-key")
            .env("TRIGGER_GITHUB_ACTION_SALT", "integration-salt-value");
        cmd
    }

    /// Build a command with no key material in the environment.
    pub fn cli_without_keys(&self) -> Command {
        let mut cmd =
            Command::cargo_bin("publish-trigger").expect("Failed to locate publish-trigger binary");
        cmd.current_dir(self.root.path())
            .env("PUBLISH_TRIGGER_SETTINGS", &self.settings_path)
            .env_remove("TRIGGER_GITHUB_ACTION_ENCRYPTION_KEY")
            .env_remove("TRIGGER_GITHUB_ACTION_SALT")
            .env_remove("LOGGED_IN_KEY")
            .env_remove("LOGGED_IN_SALT")
            .env_remove("GITHUB_PERSONAL_ACCESS_TOKEN")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Store `repo_url` and the integration token through the CLI.
    pub fn configure(&self, repo_url: &str) {
        self.cli()
            .args(["configure", "--repo-url", repo_url, "--token", TOKEN])
            .assert()
            .success();
    }

    pub fn read_settings(&self) -> String {
        fs::read_to_string(&self.settings_path).expect("Failed to read settings file")
    }
}
