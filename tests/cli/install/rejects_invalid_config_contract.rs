use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn install_rejects_unknown_config_keys_before_touching_disk() {
    let ctx = TestContext::new();
    ctx.write_raw_config("basedir = \"/tmp/faasd\"\n");

    ctx.cli()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOML parse error"));

    assert!(!ctx.config().base_dir.exists());
}

#[test]
fn install_rejects_relative_paths() {
    let ctx = TestContext::new();
    ctx.write_raw_config("bin_dir = \"usr/local/bin\"\n");

    ctx.cli()
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("bin_dir must be an absolute path"));
}

#[test]
fn install_rejects_missing_config_file() {
    let ctx = TestContext::new();

    ctx.cli()
        .arg("install")
        .env("FAASD_INSTALL_CONFIG", ctx.root().join("absent.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
