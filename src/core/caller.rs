//! Best-effort caller identification
//!
//! Resolving the calling type and method needs symbol information and is
//! runtime specific, so capture is an injectable capability rather than a
//! built-in. The default never inspects the stack and renders as `---`.

use std::fmt;

const TYPE_WIDTH: usize = 8;
const METHOD_WIDTH: usize = 14;

/// Caller tag rendered into every formatted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallerTag {
    /// Capture is disabled; renders as `---`.
    Disabled,
    /// Capture ran but could not resolve a frame; renders as `???`. The
    /// shipped [`DisabledCaller`] never produces this; it exists for custom
    /// [`CallerCapture`] implementations backed by real symbol lookup.
    Unresolved,
    /// A resolved frame: the calling type and method names. The type is
    /// clipped to 8 characters and the method to 14, each padded to that
    /// width and joined by three spaces.
    Frame { type_name: String, method: String },
}

impl CallerTag {
    pub fn frame(type_name: impl Into<String>, method: impl Into<String>) -> Self {
        CallerTag::Frame {
            type_name: type_name.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for CallerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CallerTag::Disabled => f.write_str("---"),
            CallerTag::Unresolved => f.write_str("???"),
            CallerTag::Frame { type_name, method } => write!(
                f,
                "{:<tw$}   {:<mw$}",
                clip(type_name, TYPE_WIDTH),
                clip(method, METHOD_WIDTH),
                tw = TYPE_WIDTH,
                mw = METHOD_WIDTH,
            ),
        }
    }
}

/// Clip a string to at most `width` characters on a char boundary.
fn clip(s: &str, width: usize) -> &str {
    match s.char_indices().nth(width) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Source of caller tags, consulted once per emitted record.
pub trait CallerCapture: Send + Sync {
    fn capture(&self) -> CallerTag;
}

/// Default capture that never inspects the stack.
pub struct DisabledCaller;

impl CallerCapture for DisabledCaller {
    fn capture(&self) -> CallerTag {
        CallerTag::Disabled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_renders_dashes() {
        assert_eq!(CallerTag::Disabled.to_string(), "---");
    }

    #[test]
    fn test_unresolved_renders_question_marks() {
        assert_eq!(CallerTag::Unresolved.to_string(), "???");
    }

    #[test]
    fn test_frame_pads_short_names() {
        let tag = CallerTag::frame("Engine", "start");
        assert_eq!(tag.to_string(), "Engine     start         ");
    }

    #[test]
    fn test_frame_clips_long_names() {
        let tag = CallerTag::frame("ConnectionPool", "acquire_with_backoff");
        assert_eq!(tag.to_string(), "Connecti   acquire_with_b");
    }

    #[test]
    fn test_default_capture_is_disabled() {
        assert_eq!(DisabledCaller.capture(), CallerTag::Disabled);
    }
}
