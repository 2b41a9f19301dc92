//! # Introduction
//!
//! turtty interprets a small language of turtle-graphics commands (DRAW,
//! MOVE, ROTATE, FG, BG, PATTERN) read one per line from a text file, and
//! draws the result directly on the terminal with
//! [crossterm](https://docs.rs/crossterm).
//!
//! ## Execution pipeline
//!
//! ```text
//! Source lines → Validator → Script → Interpreter → RenderSink / TraceSink
//! ```
//!
//! 1. [`validate`] — checks every line against its command's datatype, arity,
//!    and range rules, collecting all errors with line numbers.
//! 2. [`command`] — the command model and the append-only [`command::Script`]
//!    store, preserving source order for replay.
//! 3. [`interpreter`] — folds the script over a turtle state (position,
//!    heading, colours, pattern), rasterizing DRAW segments with Bresenham.
//! 4. [`render`] — the terminal collaborator: cell plotting, colours, clear,
//!    and cursor parking.
//! 5. [`trace`] — one log record per DRAW/MOVE, appended to `graphics.log`.
//!
//! Validation is all-or-nothing: a single bad line anywhere suppresses
//! drawing for the whole file, though every error is still reported.
//!
//! ## Command contract
//!
//! | Command | Value | Range |
//! |---------|----------------|---------|
//! | DRAW    | real           | 0..=80  |
//! | MOVE    | real           | 0..=80  |
//! | ROTATE  | real           | any     |
//! | FG      | integer        | 0..=15  |
//! | BG      | integer        | 0..=7   |
//! | PATTERN | single char    | any     |

pub mod command;
pub mod geometry;
pub mod interpreter;
pub mod render;
pub mod trace;
pub mod validate;
