use crate::error::{ImportError, ImportResult};
use chrono::{Local, SecondsFormat};
use log::{Level, debug, warn};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Append-only event log for one import run.
///
/// Every event is forwarded to the `log` facade at debug level (the console
/// copy is the caller's job); when a file is attached it also gets one
/// `<timestamp> <LEVEL> <message>` line. Write failures
/// detach the file and the run carries on.
pub struct RunLog {
    writer: Option<BufWriter<File>>,
}

impl RunLog {
    #[must_use]
    pub const fn disabled() -> Self {
        Self { writer: None }
    }

    /// Truncates any log left by an earlier run.
    pub fn create(path: &Path) -> ImportResult<Self> {
        let file = File::create(path).map_err(|e| ImportError::io("create log", path, e))?;
        Ok(Self {
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn info(&mut self, message: &str) {
        self.record(Level::Info, message);
    }

    pub fn warn(&mut self, message: &str) {
        self.record(Level::Warn, message);
    }

    pub fn error(&mut self, message: &str) {
        self.record(Level::Error, message);
    }

    pub fn record(&mut self, level: Level, message: &str) {
        debug!("[{level}] {message}");

        let Some(writer) = self.writer.as_mut() else {
            return;
        };
        let timestamp = Local::now().to_rfc3339_opts(SecondsFormat::Secs, false);
        if let Err(e) = writeln!(writer, "{timestamp} {level:<5} {message}") {
            warn!("Run log disabled after write failure: {e}");
            self.writer = None;
        }
    }

    pub fn finish(mut self) {
        if let Some(mut writer) = self.writer.take() {
            if let Err(e) = writer.flush() {
                warn!("Failed to flush run log: {e}");
            }
        }
    }
}
