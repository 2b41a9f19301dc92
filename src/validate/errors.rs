//! Validation error types
//!
//! Every rejected line is classified as one [`ErrorKind`] and reported with
//! its 1-based line number. Validation errors are collected, never fatal:
//! the scan always covers the whole file before the drawing decision is made.

use crate::command::CommandKind;
use std::fmt;

/// Why a single line was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// First token is not one of the six command names
    UnknownCommand,

    /// Value token missing or not parseable as the command's datatype
    BadDataType(CommandKind),

    /// More than one value token (or, for PATTERN, a multi-character value)
    BadArity(CommandKind),

    /// Value parsed but falls outside the command's allowed range
    BadRange(CommandKind),
}

/// A rejected line: where it is and why it was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineError {
    pub line_no: usize,
    pub kind: ErrorKind,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::UnknownCommand => {
                write!(f, "command unidentified (check spelling and that a value exists)")
            }
            ErrorKind::BadDataType(kind) => {
                write!(f, "{} data type expected for {}", datatype_name(*kind), kind)
            }
            ErrorKind::BadArity(kind) => {
                write!(f, "expected one parameter value for {}", kind)
            }
            ErrorKind::BadRange(kind) => f.write_str(range_description(*kind)),
        }
    }
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line_no, self.kind)
    }
}

impl std::error::Error for LineError {}

fn datatype_name(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Draw | CommandKind::Move | CommandKind::Rotate => "real",
        CommandKind::Fg | CommandKind::Bg => "integer",
        CommandKind::Pattern => "character",
    }
}

fn range_description(kind: CommandKind) -> &'static str {
    match kind {
        CommandKind::Draw => "draw distance must be between 0 and 80",
        CommandKind::Move => "move distance must be between 0 and 80",
        CommandKind::Fg => "foreground colour must be between 0 and 15",
        CommandKind::Bg => "background colour must be between 0 and 7",
        // ROTATE and PATTERN carry no range constraint, so these never reach
        // a report; the text exists to keep the match exhaustive.
        CommandKind::Rotate => "rotate angle out of range",
        CommandKind::Pattern => "pattern out of range",
    }
}
