//! CLI tests for the `portfolio` binary.
//!
//! Spawns the binary in a scratch directory and checks exit codes and output
//! for listing, validation, contact submission, and configuration errors.

mod common;

use std::process::{Command, Output};
use std::sync::Arc;

use portfolio::exit_codes;
use portfolio::io::config::load_config;
use portfolio::test_support::{ConfigDir, projects};
use serde_json::{Value, json};

use common::{Received, accepting_webhook, unreachable_webhook};

fn portfolio(dir: &ConfigDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_portfolio"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn projects_json_lists_first_page_of_bundled_data() {
    let dir = ConfigDir::new().expect("dir");
    let output = portfolio(&dir)
        .args(["projects", "--json"])
        .output()
        .expect("portfolio projects");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let page: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(page["page"], 1);
    assert_eq!(page["page_size"], 8);
    assert_eq!(page["projects"].as_array().map(Vec::len), Some(8));
    assert!(page["controls"].is_array());
}

#[test]
fn projects_uses_configured_data_file() {
    let dir = ConfigDir::new().expect("dir");
    let data_path = dir.path().join("projects.json");
    std::fs::write(
        &data_path,
        serde_json::to_string(&projects(20)).expect("serialize"),
    )
    .expect("write data");
    let config = dir
        .write_config("[projects]\ndata_path = \"projects.json\"\n")
        .expect("config");

    let output = portfolio(&dir)
        .arg("--config")
        .arg(&config)
        .args(["projects", "--json", "--page", "3"])
        .output()
        .expect("portfolio projects");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let page: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(page["total_pages"], 3);
    let titles: Vec<&str> = page["projects"]
        .as_array()
        .expect("projects array")
        .iter()
        .filter_map(|project| project["title"].as_str())
        .collect();
    assert_eq!(
        titles,
        vec!["project-16", "project-17", "project-18", "project-19"]
    );
}

#[test]
fn validate_blank_name_exits_blocked() {
    let dir = ConfigDir::new().expect("dir");
    let output = portfolio(&dir)
        .args(["validate", "--email", "a@b.com", "--message", "hi"])
        .output()
        .expect("portfolio validate");

    assert_eq!(output.status.code(), Some(exit_codes::BLOCKED));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout, "Name: Name is required\n");
}

#[test]
fn validate_complete_form_exits_ok() {
    let dir = ConfigDir::new().expect("dir");
    let status = portfolio(&dir)
        .args([
            "validate",
            "--name",
            "Ada",
            "--email",
            "ada@example.com",
            "--message",
            "hello",
        ])
        .status()
        .expect("portfolio validate");

    assert_eq!(status.code(), Some(exit_codes::OK));
}

#[test]
fn invalid_config_exits_invalid() {
    let dir = ConfigDir::new().expect("dir");
    let config = dir
        .write_config("[contact]\nwebhook_url = \"ftp://example.com\"\n")
        .expect("config");
    let output = portfolio(&dir)
        .arg("--config")
        .arg(&config)
        .args(["projects"])
        .output()
        .expect("portfolio projects");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("http or https"));
}

#[test]
fn check_data_rejects_duplicate_titles() {
    let dir = ConfigDir::new().expect("dir");
    let data_path = dir.path().join("dupes.json");
    let mut records = projects(2);
    records[1].title = records[0].title.clone();
    std::fs::write(&data_path, serde_json::to_string(&records).expect("serialize"))
        .expect("write data");

    let output = portfolio(&dir)
        .arg("check-data")
        .arg("--path")
        .arg(&data_path)
        .output()
        .expect("portfolio check-data");

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("duplicate title"));
}

/// Run the binary off the async runtime so the local webhook keeps serving.
async fn run_blocking(mut cmd: Command) -> Output {
    tokio::task::spawn_blocking(move || cmd.output().expect("portfolio"))
        .await
        .expect("join")
}

fn contact_args(cmd: &mut Command, name: &str) {
    cmd.args([
        "contact",
        "--name",
        name,
        "--email",
        "ada@example.com",
        "--message",
        "hello",
    ]);
}

#[test]
fn contact_validates_before_requiring_a_webhook() {
    let dir = ConfigDir::new().expect("dir");
    let output = portfolio(&dir)
        .args(["contact", "--email", "a@b.com", "--message", "hi"])
        .output()
        .expect("portfolio contact");

    assert_eq!(output.status.code(), Some(exit_codes::BLOCKED));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Name: Name is required\n"
    );
}

#[tokio::test]
async fn contact_delivers_and_reports_success() {
    let received: Received = Arc::default();
    let url = accepting_webhook(received.clone()).await;
    let dir = ConfigDir::new().expect("dir");
    let config = dir
        .write_config(&format!("[contact]\nwebhook_url = \"{}\"\n", url))
        .expect("config");

    let mut cmd = portfolio(&dir);
    cmd.arg("--config").arg(&config);
    contact_args(&mut cmd, "Ada");
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Message sent!: Thanks for reaching out. I'll get back to you soon.\n"
    );
    assert_eq!(
        received.lock().expect("received lock").clone(),
        vec![json!({"name": "Ada", "email": "ada@example.com", "message": "hello"})]
    );
}

#[tokio::test]
async fn contact_blocked_with_webhook_sends_nothing() {
    let received: Received = Arc::default();
    let url = accepting_webhook(received.clone()).await;
    let dir = ConfigDir::new().expect("dir");
    let config = dir
        .write_config(&format!("[contact]\nwebhook_url = \"{}\"\n", url))
        .expect("config");

    let mut cmd = portfolio(&dir);
    cmd.arg("--config").arg(&config);
    contact_args(&mut cmd, " ");
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(exit_codes::BLOCKED));
    assert_eq!(
        String::from_utf8_lossy(&output.stdout),
        "Name: Name is required\n"
    );
    assert!(received.lock().expect("received lock").is_empty());
}

#[tokio::test]
async fn contact_unreachable_webhook_exits_failed() {
    let (url, addr) = unreachable_webhook().await;
    let dir = ConfigDir::new().expect("dir");
    let config = dir
        .write_config(&format!("[contact]\nwebhook_url = \"{}\"\n", url))
        .expect("config");

    let mut cmd = portfolio(&dir);
    cmd.arg("--config").arg(&config);
    contact_args(&mut cmd, "Ada");
    let output = run_blocking(cmd).await;

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("Error: "), "stdout: {}", stdout);
    assert!(!stdout.contains(&addr.to_string()));
}

#[test]
fn init_writes_config_and_refuses_overwrite() {
    let dir = ConfigDir::new().expect("dir");
    let status = portfolio(&dir)
        .args([
            "init",
            "--webhook-url",
            "https://hooks.example.com/contact",
            "--timeout-secs",
            "10",
        ])
        .status()
        .expect("portfolio init");
    assert_eq!(status.code(), Some(exit_codes::OK));

    let cfg = load_config(&dir.path().join("portfolio.toml")).expect("load");
    assert_eq!(
        cfg.contact.webhook_url.as_deref(),
        Some("https://hooks.example.com/contact")
    );
    assert_eq!(cfg.contact.timeout_secs, Some(10));

    let output = portfolio(&dir).arg("init").output().expect("portfolio init");
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("already exists"));

    let status = portfolio(&dir)
        .args(["init", "--force"])
        .status()
        .expect("portfolio init --force");
    assert_eq!(status.code(), Some(exit_codes::OK));
    let cfg = load_config(&dir.path().join("portfolio.toml")).expect("load");
    assert_eq!(cfg.contact.webhook_url, None);
}

#[test]
fn relative_data_path_follows_config_directory() {
    let dir = ConfigDir::new().expect("dir");
    let site = dir.path().join("site");
    std::fs::create_dir_all(&site).expect("site dir");
    std::fs::write(
        site.join("projects.json"),
        serde_json::to_string(&projects(3)).expect("serialize"),
    )
    .expect("write data");
    let config = site.join("portfolio.toml");
    std::fs::write(&config, "[projects]\ndata_path = \"projects.json\"\n").expect("config");

    let output = portfolio(&dir)
        .arg("--config")
        .arg(&config)
        .args(["projects", "--json"])
        .output()
        .expect("portfolio projects");

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let page: Value = serde_json::from_slice(&output.stdout).expect("json output");
    assert_eq!(page["total_records"], 3);
}
