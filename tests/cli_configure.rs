mod common;

use common::{REPO_URL, TOKEN, TestContext};
use predicates::prelude::*;

#[test]
fn configure_writes_encrypted_token() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["configure", "--repo-url", REPO_URL, "--token", TOKEN])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    let content = ctx.read_settings();
    assert!(content.contains(REPO_URL));
    assert!(content.contains("github_personal_access_token"));
    assert!(!content.contains(TOKEN), "token must not be stored in plaintext");
}

#[test]
fn configure_warns_about_invalid_url_but_saves() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["configure", "--repo-url", "gitlab.com/octo/site", "--token", TOKEN])
        .assert()
        .success()
        .stdout(predicate::str::contains("Repository URL is invalid"));

    assert!(ctx.read_settings().contains("gitlab.com/octo/site"));
}

#[test]
fn status_masks_token() {
    let ctx = TestContext::new();
    ctx.configure(REPO_URL);

    ctx.cli()
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains(REPO_URL))
        .stdout(predicate::str::contains("*********"))
        .stdout(predicate::str::contains(TOKEN).not());
}

#[test]
fn status_with_other_key_material_reports_missing_token() {
    let ctx = TestContext::new();
    ctx.configure(REPO_URL);

    ctx.cli()
        .env("TRIGGER_GITHUB_ACTION_ENCRYPTION_KEY", "rotated-key")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Token: (not set)"));
}

#[test]
fn missing_key_material_logs_fallback_warning() {
    let ctx = TestContext::new();

    ctx.cli_without_keys()
        .args(["configure", "--repo-url", REPO_URL, "--token", TOKEN])
        .assert()
        .success()
        .stderr(predicate::str::contains("fallback"));
}

#[test]
fn platform_secrets_are_used_without_overrides() {
    let ctx = TestContext::new();

    ctx.cli_without_keys()
        .env("LOGGED_IN_KEY", "platform-key")
        .env("LOGGED_IN_SALT", "platform-salt-value")
        .args(["configure", "--repo-url", REPO_URL, "--token", TOKEN])
        .assert()
        .success()
        .stderr(predicate::str::contains("fallback").not());

    ctx.cli_without_keys()
        .env("LOGGED_IN_KEY", "platform-key")
        .env("LOGGED_IN_SALT", "platform-salt-value")
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("*********"));
}

#[test]
fn malformed_settings_file_is_reported() {
    let ctx = TestContext::new();
    std::fs::write(ctx.settings_path(), "[api]\ntimeout_secs = 0\n").unwrap();

    ctx.cli()
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("timeout_secs"));
}
