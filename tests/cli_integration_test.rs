//! Binary-level tests. None of these reach the network.

mod common;

use assert_cmd::Command;
use common::{Workspace, ANA_AND_BOB};
use serde_json::Value;

fn stancemap(workspace: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("stancemap").unwrap();
    cmd.current_dir(workspace.path())
        .env_remove("RUST_LOG")
        .env_remove("STANCEMAP_MAX_CONCURRENCY")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_init_writes_config_and_refuses_overwrite() {
    let workspace = Workspace::with_source("[]");

    stancemap(&workspace).arg("init").assert().success();
    assert!(workspace.path().join("stancemap.toml").is_file());

    let output = stancemap(&workspace).arg("init").output().unwrap();
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--force"));

    stancemap(&workspace).args(["init", "--force"]).assert().success();
}

#[test]
fn test_run_plots_existing_curated_file() {
    let workspace = Workspace::with_source(ANA_AND_BOB);
    std::fs::write(
        workspace.curated_path(),
        r#"[
          {"id":"1","firstName":"Ana","lastName":"Silva","age":45,"computedStanceScore":0.8,"politicalAffiliationCategory":"DEMOCRAT"},
          {"id":"2","firstName":"Bob","lastName":"Lima","age":60,"computedStanceScore":null,"politicalAffiliationCategory":"REPUBLICAN"}
        ]"#,
    )
    .unwrap();

    let output = stancemap(&workspace)
        .args(["run", "--plain", "--format", "json", "--output", "plot.json"])
        .output()
        .unwrap();

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(stdout.contains("1 DEMOCRATS | 0 REPUBLICANS"), "stdout: {stdout}");

    let plot: Value =
        serde_json::from_str(&std::fs::read_to_string(workspace.path().join("plot.json")).unwrap())
            .unwrap();
    assert_eq!(plot["data"].as_array().map(Vec::len), Some(1));
    assert_eq!(plot["layout"]["xaxis"]["title"]["text"], "Age");
}

#[test]
fn test_config_file_disables_tally() {
    let workspace = Workspace::with_source(ANA_AND_BOB);
    std::fs::write(workspace.curated_path(), "[]").unwrap();
    std::fs::write(workspace.path().join("stancemap.toml"), "count_bias = false\n").unwrap();

    let output = stancemap(&workspace).args(["run", "--plain"]).output().unwrap();

    assert!(output.status.success());
    assert!(!String::from_utf8_lossy(&output.stdout).contains("DEMOCRATS"));
    assert!(workspace.path().join("data/stance-vs-age.html").is_file());
}

#[test]
fn test_curate_without_credentials_fails_before_any_request() {
    let workspace = Workspace::with_source(ANA_AND_BOB);

    let output = stancemap(&workspace)
        .args(["run", "--curate", "--plain"])
        .env_remove("OXYLABS_USER")
        .env_remove("OXYLABS_PASS")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("OXYLABS_USER"));
    assert!(!workspace.curated_path().exists());
}

#[test]
fn test_no_curate_flag_overrides_config_file() {
    let workspace = Workspace::with_source(ANA_AND_BOB);
    std::fs::write(workspace.curated_path(), "[]").unwrap();
    std::fs::write(workspace.path().join("stancemap.toml"), "curate = true\n").unwrap();

    let output = stancemap(&workspace)
        .args(["run", "--no-curate", "--plain"])
        .env_remove("OXYLABS_USER")
        .env_remove("OXYLABS_PASS")
        .output()
        .unwrap();

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(String::from_utf8_lossy(&output.stdout).contains("0 DEMOCRATS | 0 REPUBLICANS"));
}

#[test]
fn test_malformed_curated_file_terminates_run() {
    let workspace = Workspace::with_source(ANA_AND_BOB);
    std::fs::write(workspace.curated_path(), "{ not json").unwrap();

    let output = stancemap(&workspace).args(["run", "--plain"]).output().unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("politicians-curated.json"));
}
