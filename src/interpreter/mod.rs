//! Turtle interpretation engine
//!
//! This module provides the replay logic over a validated script:
//! - [`engine`]: the turtle state machine and command transitions
//! - [`raster`]: integer Bresenham line rasterization
//! - [`errors`]: interpretation error types
//!
//! # Execution Model
//!
//! Interpretation is strictly sequential: each transition mutates the single
//! [`engine::TurtleState`] left by the previous one. It runs at most once per
//! input, and only when validation recorded zero errors.

pub mod errors;
pub mod engine;
pub mod raster;

pub use engine::{Config, Interpreter, TurtleState};
pub use errors::ScriptError;
