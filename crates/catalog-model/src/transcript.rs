//! Per-run, append-only log transcript.
//!
//! The transcript is the human-readable narration returned with every
//! validation report. Each line starts with a status marker so a long run
//! can be scanned quickly. Lines are forwarded to an optional [`LogSink`]
//! as they are produced, and mirrored to `tracing`.

use std::fmt;

/// Status marker prefixed to a transcript line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Failure,
    Warning,
    Info,
    Hint,
    Fix,
    Load,
    Report,
    Save,
    Rename,
    Inspect,
    File,
    /// Indented detail line under a failure.
    Detail,
    /// No marker (banners, separators).
    Plain,
}

impl Status {
    pub fn marker(self) -> &'static str {
        match self {
            Self::Success => "✅",
            Self::Failure => "❌",
            Self::Warning => "⚠️",
            Self::Info => "📋",
            Self::Hint => "💡",
            Self::Fix => "🔧",
            Self::Load => "📂",
            Self::Report => "📊",
            Self::Save => "💾",
            Self::Rename => "🔄",
            Self::Inspect => "🔍",
            Self::File => "📁",
            Self::Detail => "   •",
            Self::Plain => "",
        }
    }

    fn format(self, text: &str) -> String {
        match self {
            Self::Plain => text.to_string(),
            other => format!("{} {}", other.marker(), text),
        }
    }
}

/// Receiver of transcript lines, called synchronously in emission order.
pub trait LogSink {
    fn emit(&mut self, line: &str);
}

impl<F> LogSink for F
where
    F: FnMut(&str),
{
    fn emit(&mut self, line: &str) {
        self(line);
    }
}

/// Ordered transcript lines of a single validation run.
#[derive(Default)]
pub struct Transcript<'a> {
    lines: Vec<String>,
    sink: Option<Box<dyn LogSink + 'a>>,
}

impl fmt::Debug for Transcript<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transcript")
            .field("lines", &self.lines)
            .field("sink", &self.sink.is_some())
            .finish()
    }
}

impl<'a> Transcript<'a> {
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            sink: None,
        }
    }

    /// Create a transcript that forwards every line to `sink`.
    pub fn with_sink(sink: impl LogSink + 'a) -> Self {
        Self {
            lines: Vec::new(),
            sink: Some(Box::new(sink)),
        }
    }

    /// Append a line with the given status marker.
    pub fn log(&mut self, status: Status, text: impl AsRef<str>) {
        let line = status.format(text.as_ref());
        match status {
            Status::Failure | Status::Warning => tracing::warn!("{line}"),
            Status::Detail | Status::Plain => tracing::debug!("{line}"),
            _ => tracing::info!("{line}"),
        }
        if let Some(sink) = self.sink.as_mut() {
            sink.emit(&line);
        }
        self.lines.push(line);
    }

    pub fn success(&mut self, text: impl AsRef<str>) {
        self.log(Status::Success, text);
    }

    pub fn failure(&mut self, text: impl AsRef<str>) {
        self.log(Status::Failure, text);
    }

    pub fn warning(&mut self, text: impl AsRef<str>) {
        self.log(Status::Warning, text);
    }

    pub fn info(&mut self, text: impl AsRef<str>) {
        self.log(Status::Info, text);
    }

    pub fn detail(&mut self, text: impl AsRef<str>) {
        self.log(Status::Detail, text);
    }

    pub fn plain(&mut self, text: impl AsRef<str>) {
        self.log(Status::Plain, text);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the transcript, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
