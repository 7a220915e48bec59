use crate::harness::TestContext;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;

#[test]
fn install_provisions_clean_host_and_prints_guidance() {
    let ctx = TestContext::new();
    ctx.install_binary();

    let password_path = ctx.config().secrets_dir().join("basic-auth-password");
    ctx.cli()
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Check status with:"))
        .stdout(predicate::str::contains("sudo journalctl -u faasd --lines 100 -f"))
        .stdout(predicate::str::contains(format!(
            "sudo cat {} | faas-cli login -s",
            password_path.display()
        )));

    assert_eq!(ctx.secret("basic-auth-user"), b"admin");
    let mode = fs::metadata(&password_path).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);

    for name in ["docker-compose.yaml", "prometheus.yml", "resolv.conf"] {
        assert!(ctx.config().base_dir.join(name).is_file(), "{name} should be deployed");
    }
    assert!(ctx.config().provider_dir.is_dir());

    let provider = fs::read_to_string(ctx.unit_file("faasd-provider")).unwrap();
    assert!(provider.contains(&format!(
        "secret_mount_path={}",
        ctx.config().secrets_dir().display()
    )));
    let gateway = fs::read_to_string(ctx.unit_file("faasd")).unwrap();
    assert!(gateway.contains(&format!("WorkingDirectory={}", ctx.config().base_dir.display())));

    let faasd_bin = ctx.config().bin_dir.join("faasd");
    assert!(provider.contains(&format!("ExecStart={} provider", faasd_bin.display())));
    assert!(gateway.contains(&format!("ExecStart={} up", faasd_bin.display())));
}
