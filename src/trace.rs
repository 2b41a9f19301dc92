//! Trace records for DRAW and MOVE commands
//!
//! The interpreter emits one [`TraceRecord`] per DRAW/MOVE, holding the real
//! (pre-rounding) coordinates before and after the command. Records are
//! appended to `graphics.log` through the [`TraceSink`] seam; a sink failure
//! is a warning, never an abort.

use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceKind {
    Draw,
    Move,
}

/// Start and end coordinates of one DRAW or MOVE.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceRecord {
    pub kind: TraceKind,
    pub from: (f64, f64),
    pub to: (f64, f64),
}

impl fmt::Display for TraceRecord {
    /// Renders one log line, e.g. `DRAW (  0.000,  0.000)-(  9.000,  0.000)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            TraceKind::Draw => "DRAW",
            TraceKind::Move => "MOVE",
        };
        write!(
            f,
            "{} ({:7.3},{:7.3})-({:7.3},{:7.3})",
            kind, self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

/// Append-only trace collaborator. Write failures must not abort drawing.
pub trait TraceSink {
    fn record(&mut self, record: &TraceRecord) -> io::Result<()>;
}

/// Appends trace lines to a log file, one run per `---` separator.
///
/// A failed open leaves the sink disabled: `record` becomes a no-op and
/// `is_active` reports false so the caller can warn once.
#[derive(Debug)]
pub struct FileTrace {
    file: Option<File>,
}

impl FileTrace {
    pub fn open(path: impl AsRef<Path>) -> Self {
        let mut file = OpenOptions::new().append(true).create(true).open(path).ok();
        if let Some(f) = file.as_mut() {
            if writeln!(f, "---").is_err() {
                file = None;
            }
        }
        FileTrace { file }
    }

    pub fn is_active(&self) -> bool {
        self.file.is_some()
    }
}

impl TraceSink for FileTrace {
    fn record(&mut self, record: &TraceRecord) -> io::Result<()> {
        match self.file.as_mut() {
            Some(f) => writeln!(f, "{}", record),
            None => Ok(()),
        }
    }
}

/// In-memory sink for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryTrace {
    pub records: Vec<TraceRecord>,
}

impl TraceSink for MemoryTrace {
    fn record(&mut self, record: &TraceRecord) -> io::Result<()> {
        self.records.push(*record);
        Ok(())
    }
}
