//! Main logger implementation

use super::caller::{CallerCapture, DisabledCaller};
use super::error::Result;
use super::formatter::{Formatter, TimeFormat};
use super::record::LogRecord;
use super::severity::Severity;
use crate::sinks::{ConsoleSink, FileSink, OutputFn, DEFAULT_FLUSH_INTERVAL};
use parking_lot::RwLock;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Hook run by [`Logger::fatal`] after the error is logged and before the
/// process exits, typically to wait for an acknowledgment. The default reads
/// one line from standard input; headless deployments install a no-op.
pub type FatalHook = Box<dyn Fn() + Send + Sync>;

/// A leveled logger dispatching formatted lines to a console sink and/or an
/// exclusively-owned log file.
///
/// Emission calls are synchronous and may be made from any thread. Dropping
/// the logger stops the file sink's flush timer, flushes, and releases the
/// log file handle; to re-initialize (e.g. under a new program name), drop
/// the old instance first and build a new one.
pub struct Logger {
    program: String,
    threshold: RwLock<Severity>,
    formatter: Formatter,
    caller: Box<dyn CallerCapture>,
    console: Option<ConsoleSink>,
    file: Option<FileSink>,
    fatal_hook: FatalHook,
}

impl Logger {
    /// Console-only logger with default settings.
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self::builder().program(program).build()
    }

    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Active threshold below which records are dropped.
    pub fn level(&self) -> Severity {
        *self.threshold.read()
    }

    /// Mutate the active threshold. Takes effect on the next emission call.
    pub fn set_level(&self, severity: Severity) {
        *self.threshold.write() = severity;
    }

    /// Replace the console sink's output function. No-op when console output
    /// is disabled.
    pub fn set_output_fn(&self, output: OutputFn) {
        if let Some(ref console) = self.console {
            console.set_output(output);
        }
    }

    /// Path of the acquired log file, if file output is active.
    pub fn log_file_path(&self) -> Option<&Path> {
        self.file.as_ref().map(FileSink::path)
    }

    /// Emit a record at `severity` made of one or more message parts, joined
    /// with single spaces. Filtered-out records pay no formatting cost.
    pub fn log<I>(&self, severity: Severity, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        if severity < *self.threshold.read() {
            return;
        }

        let record = LogRecord::new(severity, self.caller.capture(), parts);
        let line = self.formatter.format(&record);
        self.dispatch(&line, severity);
    }

    /// Sinks are independent: a failure in one is reported to stderr and
    /// never prevents the other from writing, nor reaches the caller.
    fn dispatch(&self, line: &str, severity: Severity) {
        if let Some(ref console) = self.console {
            if let Err(e) = console.write(line, severity) {
                eprintln!("[LOGGER ERROR] console sink failed: {e}");
            }
        }

        if let Some(ref file) = self.file {
            if let Err(e) = file.append(line) {
                eprintln!("[LOGGER ERROR] file sink failed: {e}");
            }
        }
    }

    #[inline]
    pub fn trace<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.log(Severity::Trace, parts);
    }

    #[inline]
    pub fn debug<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.log(Severity::Debug, parts);
    }

    #[inline]
    pub fn info<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.log(Severity::Info, parts);
    }

    #[inline]
    pub fn warn<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.log(Severity::Warning, parts);
    }

    #[inline]
    pub fn error<I>(&self, parts: I)
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        self.log(Severity::Error, parts);
    }

    /// Flush the file buffer without waiting for the background timer.
    pub fn flush(&self) -> Result<()> {
        if let Some(ref file) = self.file {
            file.flush_now()?;
        }
        Ok(())
    }

    /// Log a fatal error and terminate the process.
    ///
    /// Emits a banner line plus the error detail at [`Severity::Error`]
    /// (which, being maximal, always passes the threshold), flushes the file
    /// buffer, runs the fatal hook, and exits with status 1. This call never
    /// returns.
    pub fn fatal(&self, error: impl fmt::Display) -> ! {
        self.log(
            Severity::Error,
            ["================== FATAL =================="],
        );
        self.log(Severity::Error, [error.to_string()]);
        let _ = self.flush();
        (self.fatal_hook)();
        std::process::exit(1);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// # Example
/// ```
/// use plainlog::prelude::*;
///
/// let logger = Logger::builder()
///     .program("app")
///     .threshold(Severity::Debug)
///     .to_console(true)
///     .build();
/// logger.info(["ready"]);
/// ```
pub struct LoggerBuilder {
    program: Option<String>,
    to_file: bool,
    to_console: bool,
    console_sink: Option<ConsoleSink>,
    threshold: Severity,
    directory: PathBuf,
    flush_interval: Duration,
    time_format: TimeFormat,
    caller: Box<dyn CallerCapture>,
    fatal_hook: FatalHook,
}

impl LoggerBuilder {
    pub fn new() -> Self {
        Self {
            program: None,
            to_file: false,
            to_console: true,
            console_sink: None,
            threshold: Severity::default(),
            directory: PathBuf::from("logs"),
            flush_interval: DEFAULT_FLUSH_INTERVAL,
            time_format: TimeFormat::default(),
            caller: Box::new(DisabledCaller),
            fatal_hook: default_fatal_hook(),
        }
    }

    /// Program name used for the log file. Defaults to the current
    /// executable's base name.
    #[must_use = "builder methods return a new value"]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Enable or disable the file sink (default: disabled).
    #[must_use = "builder methods return a new value"]
    pub fn to_file(mut self, to_file: bool) -> Self {
        self.to_file = to_file;
        self
    }

    /// Enable or disable the console sink (default: enabled).
    #[must_use = "builder methods return a new value"]
    pub fn to_console(mut self, to_console: bool) -> Self {
        self.to_console = to_console;
        self
    }

    /// Provide a pre-configured console sink, e.g. with colors disabled or a
    /// custom palette. Only used while console output is enabled.
    #[must_use = "builder methods return a new value"]
    pub fn console_sink(mut self, sink: ConsoleSink) -> Self {
        self.console_sink = Some(sink);
        self
    }

    /// Initial severity threshold (default: [`Severity::Trace`], everything
    /// passes).
    #[must_use = "builder methods return a new value"]
    pub fn threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Directory holding log files (default: `logs`).
    #[must_use = "builder methods return a new value"]
    pub fn directory(mut self, directory: impl Into<PathBuf>) -> Self {
        self.directory = directory.into();
        self
    }

    /// Interval between background flushes of the file buffer.
    #[must_use = "builder methods return a new value"]
    pub fn flush_interval(mut self, flush_interval: Duration) -> Self {
        self.flush_interval = flush_interval;
        self
    }

    /// Time-of-day pattern for formatted lines.
    #[must_use = "builder methods return a new value"]
    pub fn time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    /// Install a caller capture capability (default: disabled, rendering
    /// `---`).
    #[must_use = "builder methods return a new value"]
    pub fn caller_capture<C: CallerCapture + 'static>(mut self, caller: C) -> Self {
        self.caller = Box::new(caller);
        self
    }

    /// Replace the acknowledgment hook run by [`Logger::fatal`] before the
    /// process exits.
    #[must_use = "builder methods return a new value"]
    pub fn fatal_hook(mut self, hook: FatalHook) -> Self {
        self.fatal_hook = hook;
        self
    }

    /// Build the logger.
    ///
    /// When file output is requested but acquisition exhausts its retry
    /// budget, the failure is reported to stderr and the logger comes up in
    /// degraded mode with file output disabled; this is never fatal.
    pub fn build(self) -> Logger {
        let program = self.program.unwrap_or_else(default_program);

        let file = if self.to_file {
            match FileSink::acquire_in(&self.directory, &program, self.flush_interval) {
                Ok(sink) => Some(sink),
                Err(e) => {
                    eprintln!("[LOGGER ERROR] {e}; file output disabled");
                    None
                }
            }
        } else {
            None
        };

        let console = if self.to_console {
            Some(self.console_sink.unwrap_or_default())
        } else {
            None
        };

        Logger {
            program,
            threshold: RwLock::new(self.threshold),
            formatter: Formatter::new().with_time_format(self.time_format),
            caller: self.caller,
            console,
            file,
            fatal_hook: self.fatal_hook,
        }
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn default_program() -> String {
    std::env::current_exe()
        .ok()
        .and_then(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
        .unwrap_or_else(|| "log".to_string())
}

fn default_fatal_hook() -> FatalHook {
    Box::new(|| {
        let mut ack = String::new();
        let _ = std::io::stdin().read_line(&mut ack);
    })
}
