//! Log output destinations.

use std::sync::{Arc, Mutex};

use crate::logging::{LogEntry, LogLevel};

/// Where formatted log entries are written.
#[derive(Debug, Clone, Default)]
pub enum LogSink {
    /// Standard error.
    #[default]
    Stderr,
    /// The browser console, using the `console` method matching the level.
    /// Falls back to stderr off wasm32.
    Console,
    /// Keep entries in memory.
    Memory(MemorySink),
}

impl LogSink {
    pub(crate) fn write(&self, entry: &LogEntry, formatted: &str) {
        match self {
            LogSink::Stderr => eprintln!("{}", formatted),
            LogSink::Console => write_console(entry.level, formatted),
            LogSink::Memory(memory) => memory.push(entry.clone()),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: LogLevel, formatted: &str) {
    let value = wasm_bindgen::JsValue::from_str(formatted);
    match level {
        LogLevel::Trace | LogLevel::Debug => web_sys::console::debug_1(&value),
        LogLevel::Info => web_sys::console::info_1(&value),
        LogLevel::Warn => web_sys::console::warn_1(&value),
        LogLevel::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: LogLevel, formatted: &str) {
    eprintln!("{}", formatted);
}

/// Shared in-memory buffer of log entries.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }

    /// Snapshot of the captured entries.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Captured entries at `level`.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    /// Whether any captured entry's message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|e| e.message.contains(needle))
    }
}
