//! Render sinks: where rasterized cells go
//!
//! [`RenderSink`] is the narrow terminal-collaborator interface the
//! interpreter draws through. [`TerminalRenderer`] implements it with
//! crossterm escape sequences on stdout; [`CaptureRenderer`] records every
//! call for tests and headless runs.

use crate::geometry::Point;
use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::execute;
use std::io::{self, Stdout};

/// Terminal collaborator used by the interpreter.
///
/// Calls are fire-and-forget: the interpreter never reads back from the
/// screen, and a failed escape write is not an interpretation error.
pub trait RenderSink {
    /// Draw one cell with the active pattern character.
    fn plot(&mut self, point: Point, pattern: char);
    fn set_fg(&mut self, colour: u8);
    fn set_bg(&mut self, colour: u8);
    fn clear(&mut self);
    /// Park the cursor at the bottom of the drawing area after a run.
    fn cursor_home(&mut self);
}

/// Draws directly on the terminal via crossterm.
pub struct TerminalRenderer {
    out: Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        TerminalRenderer { out: io::stdout() }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl RenderSink for TerminalRenderer {
    fn plot(&mut self, point: Point, pattern: char) {
        // Cells off the top or left edge are simply not drawn
        let (Ok(x), Ok(y)) = (u16::try_from(point.x), u16::try_from(point.y)) else {
            return;
        };
        let _ = execute!(self.out, MoveTo(x, y), Print(pattern));
    }

    fn set_fg(&mut self, colour: u8) {
        let _ = execute!(self.out, SetForegroundColor(Color::AnsiValue(colour)));
    }

    fn set_bg(&mut self, colour: u8) {
        let _ = execute!(self.out, SetBackgroundColor(Color::AnsiValue(colour)));
    }

    fn clear(&mut self) {
        let _ = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0));
    }

    fn cursor_home(&mut self) {
        let rows = terminal::size().map(|(_, rows)| rows).unwrap_or(24);
        let _ = execute!(
            self.out,
            ResetColor,
            MoveTo(0, rows.saturating_sub(1)),
            Print("\n")
        );
    }
}

/// Records every sink call instead of touching a terminal.
#[derive(Debug, Default)]
pub struct CaptureRenderer {
    pub cells: Vec<(Point, char)>,
    pub fg_calls: Vec<u8>,
    pub bg_calls: Vec<u8>,
    pub clears: usize,
    pub homes: usize,
}

impl CaptureRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The plotted points in order, without their pattern characters.
    pub fn points(&self) -> Vec<Point> {
        self.cells.iter().map(|(p, _)| *p).collect()
    }
}

impl RenderSink for CaptureRenderer {
    fn plot(&mut self, point: Point, pattern: char) {
        self.cells.push((point, pattern));
    }

    fn set_fg(&mut self, colour: u8) {
        self.fg_calls.push(colour);
    }

    fn set_bg(&mut self, colour: u8) {
        self.bg_calls.push(colour);
    }

    fn clear(&mut self) {
        self.clears += 1;
    }

    fn cursor_home(&mut self) {
        self.homes += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_records_calls_in_order() {
        let mut sink = CaptureRenderer::new();
        sink.clear();
        sink.set_fg(7);
        sink.plot(Point { x: 1, y: 2 }, '*');
        sink.plot(Point { x: 2, y: 2 }, '*');
        sink.cursor_home();

        assert_eq!(sink.clears, 1);
        assert_eq!(sink.fg_calls, vec![7]);
        assert_eq!(
            sink.points(),
            vec![Point { x: 1, y: 2 }, Point { x: 2, y: 2 }]
        );
        assert_eq!(sink.cells[0].1, '*');
        assert_eq!(sink.homes, 1);
    }
}
