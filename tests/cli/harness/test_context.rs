//! Shared testing harness for `faasd` integration tests.

use assert_cmd::Command;
use faasd::InstallConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated install layout under a temporary root.
pub(crate) struct TestContext {
    root: TempDir,
    config: InstallConfig,
    config_path: PathBuf,
}

impl TestContext {
    /// Layout whose service manager always succeeds.
    pub(crate) fn new() -> Self {
        Self::with_systemctl("true")
    }

    /// Layout using `program` in place of `systemctl`.
    pub(crate) fn with_systemctl(program: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let config = InstallConfig::rooted_at(root.path(), program);
        let config_path = root.path().join("install.toml");
        let content = toml::to_string(&config).expect("Failed to serialize install config");
        fs::write(&config_path, content).expect("Failed to write install config");
        Self { root, config, config_path }
    }

    pub(crate) fn root(&self) -> &Path {
        self.root.path()
    }

    pub(crate) fn config(&self) -> &InstallConfig {
        &self.config
    }

    /// Replace the config file with raw TOML.
    pub(crate) fn write_raw_config(&self, content: &str) {
        fs::write(&self.config_path, content).expect("Failed to write install config");
    }

    /// Place a stand-in `faasd` binary where the installer expects it.
    pub(crate) fn install_binary(&self) {
        fs::create_dir_all(&self.config.bin_dir).expect("Failed to create bin dir");
        fs::write(self.config.bin_dir.join("faasd"), "#!/bin/sh\n")
            .expect("Failed to write faasd stub");
    }

    pub(crate) fn secret(&self, name: &str) -> Vec<u8> {
        fs::read(self.config.secrets_dir().join(name)).expect("Failed to read secret")
    }

    pub(crate) fn unit_file(&self, name: &str) -> PathBuf {
        self.config.unit_dir.join(format!("{name}.service"))
    }

    /// Build a command for invoking the compiled `faasd` binary against this layout.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("faasd").expect("Failed to locate faasd binary");
        cmd.current_dir(self.root())
            .env("FAASD_INSTALL_CONFIG", &self.config_path)
            .env_remove("RUST_LOG");
        cmd
    }
}
