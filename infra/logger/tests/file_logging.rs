use qpid_logger::{LevelFilter, Logger, LoggerError};
use serial_test::serial;
use std::fs;
use std::time::Duration;
use tempfile::tempdir;

#[test]
#[serial]
fn file_logging_creates_log_file_and_rejects_second_init() -> Result<(), Box<dyn std::error::Error>>
{
    let tmp_dir = tempdir()?;
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder()
        .name("qpid-file-logging")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()?;
    assert!(logger.guard().is_some(), "file output must hold a worker guard");

    tracing::info!(remote_uri = "amqp://localhost:5672", "connection factory created");

    let err = Logger::builder()
        .name("qpid-file-logging-second")
        .init()
        .expect_err("second init should fail");
    assert!(matches!(err, LoggerError::Subscriber { .. }), "expected subscriber error");

    std::thread::sleep(Duration::from_millis(30));
    drop(logger);

    let log_file = fs::read_dir(&log_dir)?
        .flatten()
        .map(|entry| entry.path())
        .find(|path| path.extension().and_then(|ext| ext.to_str()) == Some("log"))
        .expect("log file should be created");

    let content = fs::read_to_string(&log_file)?;
    assert!(content.contains("connection factory created"), "event should reach the file");

    Ok(())
}
