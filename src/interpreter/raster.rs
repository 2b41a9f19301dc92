//! Integer line rasterization
//!
//! Bresenham's algorithm over grid cells, valid for every slope sign and
//! magnitude. The caller supplies a plot callback, keeping the algorithm
//! independent of where the cells end up (terminal, capture buffer, tests).

use crate::geometry::Point;

/// Rasterizes the segment from `start` to `end`, both endpoints inclusive,
/// invoking `plot` once per grid cell touched.
pub fn line<F: FnMut(Point)>(start: Point, end: Point, mut plot: F) {
    let dx = (end.x - start.x).abs();
    let dy = -(end.y - start.y).abs();
    let sx = if start.x < end.x { 1 } else { -1 };
    let sy = if start.y < end.y { 1 } else { -1 };

    let mut err = dx + dy;
    let mut x = start.x;
    let mut y = start.y;

    loop {
        plot(Point { x, y });
        if x == end.x && y == end.y {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
}
