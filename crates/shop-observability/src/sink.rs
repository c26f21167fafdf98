//! Log sinks.

use std::fmt;
use std::sync::{Arc, Mutex};

use crate::logging::LogEntry;

/// Destination for emitted log entries.
pub trait LogSink: Send + Sync + fmt::Debug {
    /// Write one entry. `line` is the entry already rendered in the
    /// logger's configured format.
    fn write(&self, entry: &LogEntry, line: &str);
}

/// Writes each line to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _entry: &LogEntry, line: &str) {
        eprintln!("{}", line);
    }
}

/// Keeps entries in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        match self.entries.lock() {
            Ok(entries) => entries.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Messages written so far, in order.
    pub fn messages(&self) -> Vec<String> {
        self.entries().into_iter().map(|e| e.message).collect()
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry, _line: &str) {
        let mut entries = match self.entries.lock() {
            Ok(entries) => entries,
            Err(poisoned) => poisoned.into_inner(),
        };
        entries.push(entry.clone());
    }
}
