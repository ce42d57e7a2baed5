use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn qrbatch() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qrbatch"));
    // Keep the run independent of the developer's environment.
    for var in [
        "QRBATCH_COUNT",
        "QRBATCH_OUT",
        "QRBATCH_VERIFY",
        "QRBATCH_SECRET",
        "QRBATCH_LOG_FILE",
        "QRBATCH_LOG_ROTATION",
        "XDG_CONFIG_HOME",
    ] {
        cmd.env_remove(var);
    }
    cmd.env("QRBATCH_LOG_LEVEL", "warn");
    cmd
}

fn png_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .expect("read output dir")
        .filter(|entry| {
            entry
                .as_ref()
                .map(|e| e.file_name().to_string_lossy().ends_with(".png"))
                .unwrap_or(false)
        })
        .count()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

#[test]
fn prints_confirmation_line() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("qr_output");

    let output = qrbatch()
        .current_dir(tmp.path())
        .args(["--base-url", "https://example.fr/scan?qr=", "--count", "3", "--out"])
        .arg(&out)
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim_end(),
        format!("Generated 3 QR codes in {}", out.display())
    );
    assert!(out.join("qr_00003.png").exists());
    assert!(!out.join("qr_00004.png").exists());
}

#[test]
fn missing_base_url_fails_before_work() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let output = qrbatch()
        .current_dir(tmp.path())
        .args(["--count", "2"])
        .output()
        .expect("run qrbatch");

    assert!(!output.status.success());
    assert!(!tmp.path().join("qr_output").exists());
}

#[test]
fn negative_count_writes_header_only_manifest() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let output = qrbatch()
        .current_dir(tmp.path())
        .args(["--base-url", "https://example.fr/l/", "--count", "-4", "--out", "labels"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    let manifest =
        fs::read_to_string(tmp.path().join("labels").join("qr_list.csv")).expect("read manifest");
    assert_eq!(manifest, "qr_id,url,status\n");
}

#[test]
fn count_defaults_from_config_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(
        tmp.path().join("qrbatch.toml"),
        "[batch]\ncount = 2\nout_dir = \"from_config\"\n",
    )
    .expect("write config");

    let output = qrbatch()
        .current_dir(tmp.path())
        .args(["--base-url", "https://example.fr/l/", "--json"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    let summary: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("json summary");
    assert_eq!(summary["generated"], 2);
    assert_eq!(summary["signed"], false);
    assert!(tmp.path().join("from_config").join("qr_00002.png").exists());
}

#[test]
fn unwritable_output_exits_non_zero() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("blocker"), b"file").expect("create blocker");

    let output = qrbatch()
        .current_dir(tmp.path())
        .args(["--base-url", "https://example.fr/l/", "--count", "1", "--out", "blocker/out"])
        .output()
        .expect("run qrbatch");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn env_count_overrides_config_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("qrbatch.toml"), "[batch]\ncount = 5\n").expect("write config");

    let output = qrbatch()
        .current_dir(tmp.path())
        .env("QRBATCH_COUNT", "2")
        .args(["--base-url", "https://example.fr/l/", "--out", "o"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Generated 2 QR codes in o"
    );
    assert_eq!(png_count(&tmp.path().join("o")), 2);
}

#[test]
fn count_flag_overrides_env() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let output = qrbatch()
        .current_dir(tmp.path())
        .env("QRBATCH_COUNT", "4")
        .args(["--base-url", "https://example.fr/l/", "--count", "1", "--out", "o"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    assert_eq!(png_count(&tmp.path().join("o")), 1);
}

#[test]
fn negative_env_count_generates_nothing() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let output = qrbatch()
        .current_dir(tmp.path())
        .env("QRBATCH_COUNT", "-3")
        .args(["--base-url", "https://example.fr/l/", "--out", "o"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Generated 0 QR codes in o"
    );
    let out = tmp.path().join("o");
    assert_eq!(png_count(&out), 0);
    assert_eq!(
        fs::read_to_string(out.join("qr_list.csv")).expect("read manifest"),
        "qr_id,url,status\n"
    );
}

#[test]
fn invalid_env_count_is_rejected() {
    let tmp = tempfile::tempdir().expect("tempdir");

    let output = qrbatch()
        .current_dir(tmp.path())
        .env("QRBATCH_COUNT", "abc")
        .args(["--base-url", "https://example.fr/l/", "--out", "o"])
        .output()
        .expect("run qrbatch");

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("QRBATCH_COUNT"));
    assert!(!tmp.path().join("o").exists());
}

#[test]
fn log_file_receives_run_events() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let log = tmp.path().join("logs").join("run.log");

    let output = qrbatch()
        .current_dir(tmp.path())
        .env("QRBATCH_LOG_LEVEL", "info")
        .env("QRBATCH_LOG_FILE", &log)
        .args(["--base-url", "https://example.fr/l/", "--count", "1", "--out", "o"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    let contents = fs::read_to_string(&log).expect("read log file");
    assert!(contents.contains("Wrote manifest"), "log: {contents}");
    assert!(contents.contains("Generating QR batch"), "log: {contents}");
}

#[test]
fn rotated_log_file_receives_run_events() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let logs = tmp.path().join("logs");

    let output = qrbatch()
        .current_dir(tmp.path())
        .env("QRBATCH_LOG_LEVEL", "info")
        .env("QRBATCH_LOG_FILE", logs.join("run.log"))
        .env("QRBATCH_LOG_ROTATION", "daily")
        .args(["--base-url", "https://example.fr/l/", "--count", "1", "--out", "o"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    let rotated: Vec<String> = fs::read_dir(&logs)
        .expect("read log dir")
        .map(|entry| fs::read_to_string(entry.expect("log entry").path()).expect("read log"))
        .collect();
    assert_eq!(rotated.len(), 1, "expected one dated log file");
    assert!(rotated[0].contains("Wrote manifest"), "log: {}", rotated[0]);
}

#[test]
fn discovered_config_file_is_logged() {
    let tmp = tempfile::tempdir().expect("tempdir");
    fs::write(tmp.path().join("qrbatch.toml"), "[batch]\ncount = 1\n").expect("write config");

    let output = qrbatch()
        .current_dir(tmp.path())
        .env("QRBATCH_LOG_LEVEL", "info")
        .env("QRBATCH_LOG_COLOR", "off")
        .args(["--base-url", "https://example.fr/l/", "--out", "o"])
        .output()
        .expect("run qrbatch");

    assert_success(&output);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Using configuration file"), "stderr: {stderr}");
    assert!(stderr.contains("qrbatch.toml"), "stderr: {stderr}");
}
