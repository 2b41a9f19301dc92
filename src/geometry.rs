//! Coordinate math for the turtle
//!
//! Pure helpers shared by the interpreter: polar-to-cartesian conversion,
//! angle normalization, and the rounding convention used to address terminal
//! cells. No terminal or I/O concerns live here.

/// An integer grid cell on the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// Converts a heading and distance into the cartesian endpoint.
///
/// The y axis grows downward to match terminal rows, so a positive sine
/// component moves the endpoint *up* the screen (smaller y).
pub fn polar_to_cartesian(x0: f64, y0: f64, angle_degrees: f64, distance: f64) -> (f64, f64) {
    let radians = angle_degrees.to_radians();
    let x1 = x0 + distance * radians.cos();
    let y1 = y0 - distance * radians.sin();
    (x1, y1)
}

/// Folds any angle into `[0, 360)`.
///
/// The double-modulo handles negative inputs: `-10` becomes `350`.
pub fn normalize_angle(angle: f64) -> f64 {
    ((angle % 360.0) + 360.0) % 360.0
}

/// Rounds to the nearest integer with ties toward positive infinity.
///
/// `round_half_up(2.5) == 3` and `round_half_up(-2.5) == -2`. This matches
/// the `floor(x + 0.5)` convention used for screen cell addressing.
pub fn round_half_up(x: f64) -> i32 {
    (x + 0.5).floor() as i32
}
