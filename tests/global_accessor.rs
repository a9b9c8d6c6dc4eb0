//! Tests for the process-wide shared-instance accessor.
//!
//! Kept in their own test binary: the accessor is process-global state, and
//! a dedicated process keeps the before-init and after-init observations
//! from racing other tests.

use parking_lot::Mutex;
use plainlog::{global, ConsoleSink, Logger, Severity};
use std::sync::Arc;

#[test]
fn test_accessor_requires_explicit_init() {
    // Before init: no instance, and forwarding fails fast.
    assert!(global::try_get().is_none());
    let panicked = std::panic::catch_unwind(|| {
        global::info(["too", "early"]);
    });
    assert!(panicked.is_err(), "use before init must panic");

    // Install the shared instance and capture its console output, with
    // colors off so assertions see raw line content.
    global::init(
        Logger::builder()
            .program("shared")
            .console_sink(ConsoleSink::new().with_colors(false))
            .build(),
    );
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = Arc::clone(&lines);
    global::get().set_output_fn(Box::new(move |line| sink_lines.lock().push(line.to_string())));

    global::set_level(Severity::Warning);
    global::debug(["dropped"]);
    global::warn(["kept"]);

    let lines = lines.lock();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(":kept"));

    // Re-init replaces the instance; the accessor serves the new one.
    global::init(Logger::builder().program("replacement").build());
    assert_eq!(global::get().program(), "replacement");
    assert_eq!(global::get().level(), Severity::Trace);
}
