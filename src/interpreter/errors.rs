//! Interpretation error types
//!
//! Validation catches malformed input before interpretation starts, so the
//! only way a run can fail is an empty script. Trace-sink failures are
//! handled as warnings inside the engine, not as errors.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScriptError {
    /// The command store held nothing to replay
    EmptyScript,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::EmptyScript => {
                write!(
                    f,
                    "no commands to perform drawing (check if file contains any commands)"
                )
            }
        }
    }
}

impl std::error::Error for ScriptError {}
