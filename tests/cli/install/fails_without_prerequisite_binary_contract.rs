use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn install_fails_when_faasd_binary_is_missing() {
    let ctx = TestContext::new();
    let expected = ctx.config().bin_dir.join("faasd");

    ctx.cli()
        .arg("install")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(format!(
            "Error: missing prerequisite: unable to stat {}, install this binary before continuing",
            expected.display()
        )));

    assert!(!ctx.unit_file("faasd").exists());
    assert!(!ctx.unit_file("faasd-provider").exists());
    assert!(ctx.config().base_dir.join("docker-compose.yaml").exists());
}
