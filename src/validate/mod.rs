//! Line-by-line command validation
//!
//! This module turns raw source text into a [`Script`] of validated commands:
//! - [`rules`]: the per-command (datatype, arity, range) check triples
//! - [`errors`]: line error classification and messages
//!
//! # Scan model
//!
//! Every line is evaluated; a rejected line never stops the scan. Errors are
//! collected with their line numbers, and the resulting [`Report`] makes the
//! all-or-nothing drawing decision: the interpreter only runs when the error
//! list is empty.
//!
//! Blank lines and lines of nothing but whitespace/control characters are
//! skipped silently, not counted and not stored.

pub mod errors;
pub mod rules;

use crate::command::{Command, CommandKind, Script};
use errors::{ErrorKind, LineError};
use rules::rules_for;
use std::fmt;

/// Outcome of validating one line.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Whitespace/control-only line, silently skipped
    Blank,
    /// Line passed every check and produced a command
    Valid(Command),
    /// Line failed a check
    Invalid(ErrorKind),
}

/// Result of scanning a whole source: the filled script plus every error.
#[derive(Debug, Default)]
pub struct Report {
    pub script: Script,
    pub errors: Vec<LineError>,
}

impl Report {
    /// True when the whole input validated and drawing may proceed.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// End-of-scan summary block.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        out.push_str("---------------------REPORT---------------------\n");
        out.push_str("End of file reached\n");
        out.push_str(&format!("{} command(s) valid\n", self.script.len()));
        if !self.is_clean() {
            out.push_str("Fix any listed errors to draw\n");
        }
        out.push_str("------------------------------------------------");
        out
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Scans every line of `source`, collecting valid commands and errors.
pub fn validate_source(source: &str) -> Report {
    let mut report = Report::default();

    for (index, line) in source.lines().enumerate() {
        match validate_line(line) {
            Verdict::Blank => {}
            Verdict::Valid(command) => report.script.push(command),
            Verdict::Invalid(kind) => report.errors.push(LineError {
                line_no: index + 1,
                kind,
            }),
        }
    }

    report
}

/// Validates one line: name lookup, then datatype, arity, and range checks.
///
/// The first failing check wins and becomes the verdict.
pub fn validate_line(line: &str) -> Verdict {
    if line.chars().all(|c| c.is_whitespace() || c.is_control()) {
        return Verdict::Blank;
    }

    let mut tokens = line.split_whitespace();
    let name = match tokens.next() {
        Some(name) => name,
        None => return Verdict::Blank,
    };

    let kind = match CommandKind::from_name(name) {
        Some(kind) => kind,
        None => return Verdict::Invalid(ErrorKind::UnknownCommand),
    };

    let rules = rules_for(kind);

    let value = match tokens.next() {
        Some(value) => value,
        None => return Verdict::Invalid(ErrorKind::BadDataType(kind)),
    };
    if !(rules.datatype)(value) {
        return Verdict::Invalid(ErrorKind::BadDataType(kind));
    }

    let no_more_tokens = tokens.next().is_none();
    if !(rules.arity)(value, no_more_tokens) {
        return Verdict::Invalid(ErrorKind::BadArity(kind));
    }

    if !(rules.range)(value) {
        return Verdict::Invalid(ErrorKind::BadRange(kind));
    }

    Verdict::Valid(Command::new(kind, value))
}
