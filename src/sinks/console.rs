//! Console sink implementation

use crate::core::{LoggerError, Result, Severity};
use colored::{Color, Colorize};
use parking_lot::Mutex;
use std::collections::HashMap;

/// Output function invoked with each (possibly styled) formatted line.
pub type OutputFn = Box<dyn Fn(&str) + Send + Sync>;

/// Writes formatted lines to a console-like output, colored by severity.
///
/// Styling wraps each line and resets at its end, so color never bleeds into
/// unrelated output; two loggers writing the same terminal can still
/// interleave whole styled lines. The output function is swappable at
/// runtime, e.g. to redirect lines into a test buffer or a GUI console. The
/// default writes the line plus a newline to standard output.
pub struct ConsoleSink {
    palette: HashMap<Severity, Color>,
    use_colors: bool,
    output: Mutex<OutputFn>,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self::with_palette(default_palette())
    }

    /// Build a sink with a custom severity palette. A severity missing from
    /// the palette makes [`write`](Self::write) fail.
    pub fn with_palette(palette: HashMap<Severity, Color>) -> Self {
        Self {
            palette,
            use_colors: true,
            output: Mutex::new(Box::new(|line| println!("{line}"))),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Replace the output function. Takes effect on the next write.
    pub fn set_output(&self, output: OutputFn) {
        *self.output.lock() = output;
    }

    pub fn write(&self, line: &str, severity: Severity) -> Result<()> {
        let color = self
            .palette
            .get(&severity)
            .copied()
            .ok_or_else(|| LoggerError::unmapped_severity(severity))?;

        let styled = if self.use_colors {
            line.color(color).to_string()
        } else {
            line.to_string()
        };

        (*self.output.lock())(&styled);
        Ok(())
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

fn default_palette() -> HashMap<Severity, Color> {
    HashMap::from([
        (Severity::Trace, Color::Magenta),
        (Severity::Debug, Color::BrightBlack),
        (Severity::Warning, Color::Yellow),
        (Severity::Info, Color::White),
        (Severity::Error, Color::Red),
    ])
}
