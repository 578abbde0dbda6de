//! Transport-agnostic output sinks.
//!
//! Commands report everything through an [`OutputSink`]; render layers
//! decide how entries look. The level on each entry is what lets a
//! presentation layer style errors and warnings differently from normal
//! output — styling itself never happens here.

use std::io::Write;

use serde::Serialize;

/// Severity of a log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Normal command output.
    Output,
    /// A warning.
    Warning,
    /// An error (parse failure, validation failure, ...).
    Error,
}

impl LogLevel {
    /// Returns true for [`LogLevel::Error`].
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

/// One line of command output with its severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    /// Severity, for presentation-layer styling.
    pub level: LogLevel,
    /// The message text.
    pub message: String,
}

impl LogEntry {
    /// Creates an entry at the given level.
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }
}

/// Capability commands write their output through.
pub trait OutputSink {
    /// Writes a normal output line.
    fn log(&mut self, message: &str);

    /// Writes a warning line.
    fn warn(&mut self, message: &str);

    /// Writes an error line.
    fn error(&mut self, message: &str);

    /// Clears everything written so far.
    fn clear(&mut self);
}

/// Sink that buffers entries in memory.
///
/// Used by tests and by embedders that render the log themselves.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Vec<LogEntry>,
}

impl MemorySink {
    /// Creates an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The buffered entries, oldest first.
    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// Messages of all buffered entries, for convenience in assertions.
    pub fn messages(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.message.as_str()).collect()
    }
}

impl OutputSink for MemorySink {
    fn log(&mut self, message: &str) {
        self.entries.push(LogEntry::new(LogLevel::Output, message));
    }

    fn warn(&mut self, message: &str) {
        self.entries.push(LogEntry::new(LogLevel::Warning, message));
    }

    fn error(&mut self, message: &str) {
        self.entries.push(LogEntry::new(LogLevel::Error, message));
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Output format for [`ConsoleSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain text: output to stdout, warnings and errors to stderr.
    #[default]
    Text,
    /// One JSON object per entry, all on stdout.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Invalid output format: {s}. Expected: text or json")),
        }
    }
}

/// Sink that writes to the process's standard streams.
///
/// In text mode, `clear` wipes the screen with an ANSI escape; in JSON
/// mode every event, including `clear`, becomes one serialized record so
/// automation can replay the stream.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    format: OutputFormat,
}

impl ConsoleSink {
    /// Creates a sink with the given format.
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    fn emit(&mut self, entry: LogEntry) {
        match self.format {
            OutputFormat::Text => match entry.level {
                LogLevel::Output => println!("{}", entry.message),
                LogLevel::Warning => eprintln!("warning: {}", entry.message),
                LogLevel::Error => eprintln!("error: {}", entry.message),
            },
            OutputFormat::Json => self.emit_json(&entry),
        }
    }

    fn emit_json<T: Serialize>(&self, record: &T) {
        match serde_json::to_string(record) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("error: failed to serialize output: {e}"),
        }
    }
}

/// Control record emitted in JSON mode for non-message events.
#[derive(Debug, Serialize)]
struct ControlRecord {
    control: &'static str,
}

impl OutputSink for ConsoleSink {
    fn log(&mut self, message: &str) {
        self.emit(LogEntry::new(LogLevel::Output, message));
    }

    fn warn(&mut self, message: &str) {
        self.emit(LogEntry::new(LogLevel::Warning, message));
    }

    fn error(&mut self, message: &str) {
        self.emit(LogEntry::new(LogLevel::Error, message));
    }

    fn clear(&mut self) {
        match self.format {
            OutputFormat::Text => {
                // ESC[2J clears the screen, ESC[H homes the cursor.
                print!("\x1b[2J\x1b[H");
                let _ = std::io::stdout().flush();
            }
            OutputFormat::Json => self.emit_json(&ControlRecord { control: "clear" }),
        }
    }
}
