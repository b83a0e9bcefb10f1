use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn probe(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_qpid-probe"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn defaults_without_any_configuration() {
    let dir = TempDir::new().unwrap();

    probe(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("= amqp://localhost:5672\n"))
        .stdout(predicate::str::contains("deserializationPolicy.whiteList = *\n"));
}

#[test]
fn reads_file_and_checks_types() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("probe.toml");
    fs::write(
        &path,
        r#"
remoteURL = "amqp://broker:5672?jms.receiveLocalOnly=false"
username = "probe"
password = "do-not-print"
receiveLocalOnly = true

[deserializationPolicy]
whiteList = "java.lang,com.acme.*"
"#,
    )
    .unwrap();

    probe(&dir)
        .arg("--config")
        .arg(&path)
        .args(["--check", "java.lang.Long", "--check", "com.acme.Order"])
        .assert()
        .success()
        .stdout(predicate::str::contains("= amqp://broker:5672\n"))
        .stdout(predicate::str::contains("= probe\n"))
        .stdout(predicate::str::contains("do-not-print").not())
        .stdout(predicate::str::contains("TRUSTED  com.acme.Order"));
}

#[test]
fn rejected_type_sets_exit_code() {
    let dir = TempDir::new().unwrap();

    probe(&dir)
        .env("QPIDJMS__DESERIALIZATION_POLICY__BLACK_LIST", "java.rmi.*")
        .args(["--check", "java.rmi.server.RemoteObject"])
        .assert()
        .code(2)
        .stdout(predicate::str::contains("REJECTED java.rmi.server.RemoteObject"));
}

#[test]
fn bad_remote_url_fails() {
    let dir = TempDir::new().unwrap();

    probe(&dir)
        .env("QPIDJMS__REMOTE_URL", "amqp://broker:5672?jms.unknownOption=1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("connection factory could not be created"));
}

#[test]
fn missing_config_file_fails() {
    let dir = TempDir::new().unwrap();

    probe(&dir)
        .args(["--config", "absent.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("properties are malformed"));
}

#[test]
fn malformed_url_error_hides_password() {
    let dir = TempDir::new().unwrap();

    probe(&dir)
        .env("QPIDJMS__REMOTE_URL", "amqp://broker:notaport?jms.password=TOPSECRET")
        .assert()
        .failure()
        .stderr(predicate::str::contains("TOPSECRET").not())
        .stderr(predicate::str::contains("jms.password=<redacted>"));
}
