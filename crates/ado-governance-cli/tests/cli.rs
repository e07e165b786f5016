use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn write_config(endpoint_override: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
tenant = "contoso"
project_id = "fabrikam"
token_identifier = "ADO_GOV_CLI_TEST_TOKEN"
endpoint_override = "{}"
"#,
        endpoint_override
    )
    .unwrap();
    file
}

fn ado_gov() -> Command {
    let mut cmd = Command::cargo_bin("ado-gov").unwrap();
    cmd.env_remove("ADO_GOV_CONFIG")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_lists_remove_policy() {
    ado_gov()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("remove-policy"));
}

#[test]
fn missing_config_file_fails() {
    ado_gov()
        .args([
            "--config",
            "/nonexistent/ado-gov.toml",
            "remove-policy",
            "--policy-id",
            "abc123",
            "--repository-id",
            "repo-9",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

#[test]
fn missing_token_fails() {
    let config = write_config("http://127.0.0.1:1");

    ado_gov()
        .env_remove("ADO_GOV_CLI_TEST_TOKEN")
        .arg("--config")
        .arg(config.path())
        .args(["remove-policy", "--policy-id", "abc123", "--repository-id", "repo-9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("ADO_GOV_CLI_TEST_TOKEN"));
}

#[test]
fn dry_run_prints_request() {
    let config = write_config("http://127.0.0.1:1");

    ado_gov()
        .env("ADO_GOV_CLI_TEST_TOKEN", "pat")
        .arg("--config")
        .arg(config.path())
        .args([
            "remove-policy",
            "--policy-id",
            "abc123",
            "--repository-id",
            "repo-9",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "DELETE http://127.0.0.1:1/contoso/fabrikam/_apis/ComponentGovernance/GovernedRepositories/repo-9/policyreferences/abc123?api-version=5.1-preview.1",
        ));
}

#[test]
fn dry_run_without_token_succeeds() {
    let config = write_config("http://127.0.0.1:1");

    ado_gov()
        .env_remove("ADO_GOV_CLI_TEST_TOKEN")
        .arg("--config")
        .arg(config.path())
        .args([
            "remove-policy",
            "--policy-id",
            "abc123",
            "--repository-id",
            "repo-9",
            "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "/GovernedRepositories/repo-9/policyreferences/abc123?api-version=5.1-preview.1",
        ))
        .stdout(predicate::str::contains("no request sent"));
}
