//! Integration tests for the logging facility
//!
//! These tests verify:
//! - Threshold filtering across sinks
//! - Byte-identical round-trips through the file sink (no escaping)
//! - Acquisition conflicts rolling to suffixed paths
//! - Degraded console-only mode after acquisition gives up

use parking_lot::Mutex;
use plainlog::{ConsoleSink, Formatter, LogRecord, Logger, Severity};
use plainlog::sinks::FileSink;
use std::collections::{BTreeSet, HashMap};
use std::fs;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tempfile::TempDir;

fn console_capture(logger: &Logger) -> Arc<Mutex<Vec<String>>> {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);
    logger.set_output_fn(Box::new(move |line| sink_lines.lock().push(line.to_string())));
    lines
}

/// Console sink whose lines stay unstyled regardless of the environment's
/// color settings, so assertions can look at raw line content.
fn plain_console() -> ConsoleSink {
    ConsoleSink::new().with_colors(false)
}

#[test]
fn test_console_line_ends_with_joined_message() {
    // Console-only logger, default threshold Trace.
    let logger = Logger::builder()
        .program("app")
        .console_sink(plain_console())
        .build();
    let lines = console_capture(&logger);

    logger.info(["hello", "world"]);

    let lines = lines.lock();
    assert_eq!(lines.len(), 1);
    assert!(
        lines[0].ends_with(":hello world"),
        "unexpected line: {}",
        lines[0]
    );
}

#[test]
fn test_file_sink_receives_error_line() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .program("app")
        .to_file(true)
        .to_console(false)
        .directory(temp_dir.path())
        .flush_interval(Duration::from_millis(20))
        .build();

    logger.error(["disk full"]);

    // Wait out a flush cycle instead of flushing explicitly.
    thread::sleep(Duration::from_millis(200));

    let path = temp_dir.path().join("app.log");
    assert_eq!(logger.log_file_path(), Some(path.as_path()));

    let content = fs::read_to_string(&path).expect("Failed to read log file");
    assert!(content.contains("[ERROR]"), "content: {content}");
    assert!(content.contains("disk full"), "content: {content}");
}

#[test]
fn test_concurrent_acquisition_lands_on_distinct_suffixes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let dir = temp_dir.path().to_path_buf();

    let handles: Vec<_> = (0..2)
        .map(|_| {
            let dir = dir.clone();
            thread::spawn(move || {
                FileSink::acquire_in(&dir, "svc", Duration::from_millis(50))
                    .expect("Failed to acquire")
            })
        })
        .collect();

    let sinks: Vec<FileSink> = handles
        .into_iter()
        .map(|handle| handle.join().expect("thread panicked"))
        .collect();

    let paths: BTreeSet<_> = sinks
        .iter()
        .map(|sink| sink.path().to_path_buf())
        .collect();
    let expected: BTreeSet<_> = [dir.join("svc.log"), dir.join("svc1.log")].into();
    assert_eq!(paths, expected);
}

#[test]
fn test_warning_threshold_drops_debug_passes_warn() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Logger::builder()
        .program("app")
        .to_file(true)
        .directory(temp_dir.path())
        .build();
    let lines = console_capture(&logger);

    logger.set_level(Severity::Warning);

    logger.debug(["x"]);
    logger.flush().expect("Failed to flush");
    assert!(lines.lock().is_empty(), "debug leaked to console");
    let content = fs::read_to_string(temp_dir.path().join("app.log")).expect("read");
    assert!(content.is_empty(), "debug leaked to file: {content}");

    logger.warn(["y"]);
    logger.flush().expect("Failed to flush");
    assert_eq!(lines.lock().len(), 1);
    let content = fs::read_to_string(temp_dir.path().join("app.log")).expect("read");
    assert!(content.contains("[WARNING]"), "content: {content}");
    assert!(content.trim_end().ends_with(":y"), "content: {content}");
}

#[test]
fn test_file_roundtrip_preserves_message_bytes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let sink = FileSink::acquire_in(temp_dir.path(), "app", Duration::from_millis(50))
        .expect("Failed to acquire");

    // Brackets, colons, and an embedded newline must pass through verbatim.
    let formatter = Formatter::new();
    let record = LogRecord::new(
        Severity::Info,
        plainlog::CallerTag::Disabled,
        ["[fake] ERROR:", "first\nsecond"],
    );
    let line = formatter.format(&record);

    sink.append(&line).expect("Failed to append");
    sink.flush_now().expect("Failed to flush");

    let content = fs::read_to_string(sink.path()).expect("Failed to read log file");
    assert_eq!(content, format!("{line}\n"));
    assert!(content.contains("[fake] ERROR: first\nsecond"));
}

#[test]
fn test_exhausted_acquisition_degrades_to_console_only() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    // Hold every candidate path: app.log plus app1.log through app10.log.
    let held: Vec<FileSink> = (0..11)
        .map(|_| {
            FileSink::acquire_in(temp_dir.path(), "app", Duration::from_millis(50))
                .expect("Failed to acquire candidate")
        })
        .collect();
    assert_eq!(held.len(), 11);

    let logger = Logger::builder()
        .program("app")
        .to_file(true)
        .directory(temp_dir.path())
        .console_sink(plain_console())
        .build();
    let lines = console_capture(&logger);

    // File output is disabled, console keeps working, nothing panics.
    assert!(logger.log_file_path().is_none());
    logger.error(["still", "alive"]);
    assert_eq!(lines.lock().len(), 1);
    assert!(lines.lock()[0].ends_with(":still alive"));
}

#[test]
fn test_console_failure_does_not_block_file_sink() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    // An empty palette makes every console write fail with an unmapped
    // severity; the file sink must still receive the line.
    let logger = Logger::builder()
        .program("app")
        .to_file(true)
        .directory(temp_dir.path())
        .console_sink(ConsoleSink::with_palette(HashMap::new()))
        .build();

    logger.error(["survives", "console", "failure"]);
    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(temp_dir.path().join("app.log")).expect("read");
    assert!(
        content.trim_end().ends_with(":survives console failure"),
        "content: {content}"
    );
    assert!(content.contains("[ERROR]"), "content: {content}");
}

#[test]
fn test_repeated_set_level_is_observably_idempotent() {
    let logger = Logger::builder()
        .program("app")
        .console_sink(plain_console())
        .build();
    let lines = console_capture(&logger);

    logger.set_level(Severity::Info);
    logger.set_level(Severity::Info);
    logger.set_level(Severity::Info);

    logger.warn(["dropped"]);
    logger.info(["kept"]);

    let lines = lines.lock();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(":kept"));
}

#[test]
fn test_emission_from_multiple_threads() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let logger = Arc::new(
        Logger::builder()
            .program("app")
            .to_file(true)
            .to_console(false)
            .directory(temp_dir.path())
            .build(),
    );

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..25 {
                    logger.info([format!("worker {worker} message {i}")]);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked");
    }

    logger.flush().expect("Failed to flush");

    let content = fs::read_to_string(temp_dir.path().join("app.log")).expect("read");
    assert_eq!(content.lines().count(), 100, "expected one line per emission");
}
