// Execution engine for the turtle state machine

use crate::command::{Command, CommandKind, Script};
use crate::geometry::{normalize_angle, polar_to_cartesian, round_half_up, Point};
use crate::interpreter::errors::ScriptError;
use crate::interpreter::raster;
use crate::render::RenderSink;
use crate::trace::{TraceKind, TraceRecord, TraceSink};

/// Runtime configuration for one interpretation run.
///
/// `simple` fixes the colours at program start and disables the FG/BG side
/// effects; `debug` echoes every trace record to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    pub simple: bool,
    pub debug: bool,
}

/// Mutable turtle state folded over the script.
#[derive(Debug, Clone, PartialEq)]
pub struct TurtleState {
    pub x: f64,
    pub y: f64,
    /// Heading in degrees, kept in [0, 360) after every rotation
    pub angle: f64,
    pub fg: u8,
    pub bg: u8,
    pub pattern: char,
}

impl TurtleState {
    fn new(simple: bool) -> Self {
        // Simple mode swaps the colour defaults: black on white
        let (fg, bg) = if simple { (0, 7) } else { (7, 0) };
        TurtleState {
            x: 0.0,
            y: 0.0,
            angle: 0.0,
            fg,
            bg,
            pattern: '+',
        }
    }
}

/// Replays a validated [`Script`] against the turtle state, one transition
/// per command in store order.
pub struct Interpreter {
    config: Config,
    state: TurtleState,
    trace_failed: bool,
}

impl Interpreter {
    pub fn new(config: Config) -> Self {
        Interpreter {
            state: TurtleState::new(config.simple),
            config,
            trace_failed: false,
        }
    }

    /// Current turtle state; exposed so callers and tests can inspect the
    /// cursor position after a run.
    pub fn state(&self) -> &TurtleState {
        &self.state
    }

    /// True when at least one trace record could not be written. The run
    /// itself still completes; the caller decides how to surface the warning.
    pub fn trace_failed(&self) -> bool {
        self.trace_failed
    }

    /// Runs the whole script from the default state.
    ///
    /// The screen is cleared before the first command and the cursor parked
    /// at the bottom of the drawing area after the last one.
    pub fn run(
        &mut self,
        script: &Script,
        sink: &mut dyn RenderSink,
        trace: &mut dyn TraceSink,
    ) -> Result<(), ScriptError> {
        if script.is_empty() {
            return Err(ScriptError::EmptyScript);
        }

        sink.clear();
        if self.config.simple {
            // Fixed colours for the whole run; FG/BG commands won't touch them
            sink.set_fg(self.state.fg);
            sink.set_bg(self.state.bg);
        }

        for command in script.iter() {
            match command.kind {
                CommandKind::Draw => self.draw_line(command, sink, trace),
                CommandKind::Move => self.move_cursor(command, trace),
                CommandKind::Rotate => self.rotate(command),
                CommandKind::Fg => self.change_fg(command, sink),
                CommandKind::Bg => self.change_bg(command, sink),
                CommandKind::Pattern => self.set_pattern(command),
            }
        }

        sink.cursor_home();
        Ok(())
    }

    /// DRAW: rasterize a line of pattern characters, then advance the cursor.
    ///
    /// The last unit of the distance is reserved: the line is rasterized to
    /// `distance - 1` and the cursor then advanced one more unit from the
    /// *rounded* endpoint, so consecutive commands stay contiguous without
    /// re-plotting the shared cell.
    fn draw_line(&mut self, command: &Command, sink: &mut dyn RenderSink, trace: &mut dyn TraceSink) {
        let distance = parse_real(&command.value) - 1.0;

        let prev_x = self.state.x;
        let prev_y = self.state.y;
        let (end_x, end_y) = polar_to_cartesian(prev_x, prev_y, self.state.angle, distance);

        let start = Point {
            x: round_half_up(prev_x),
            y: round_half_up(prev_y),
        };
        let end = Point {
            x: round_half_up(end_x),
            y: round_half_up(end_y),
        };

        let pattern = self.state.pattern;
        raster::line(start, end, |point| sink.plot(point, pattern));

        // Continuity uses the integer-aligned endpoint, not the real one
        let (next_x, next_y) =
            polar_to_cartesian(f64::from(end.x), f64::from(end.y), self.state.angle, 1.0);
        self.state.x = next_x;
        self.state.y = next_y;

        self.emit_trace(TraceKind::Draw, (prev_x, prev_y), trace);
    }

    /// MOVE: reposition the cursor without plotting.
    fn move_cursor(&mut self, command: &Command, trace: &mut dyn TraceSink) {
        let distance = parse_real(&command.value);

        let prev_x = self.state.x;
        let prev_y = self.state.y;
        let (x, y) = polar_to_cartesian(prev_x, prev_y, self.state.angle, distance);
        self.state.x = x;
        self.state.y = y;

        self.emit_trace(TraceKind::Move, (prev_x, prev_y), trace);
    }

    fn rotate(&mut self, command: &Command) {
        self.state.angle = normalize_angle(self.state.angle + parse_real(&command.value));
    }

    fn change_fg(&mut self, command: &Command, sink: &mut dyn RenderSink) {
        if self.config.simple {
            return;
        }
        let colour = parse_colour(&command.value);
        self.state.fg = colour;
        sink.set_fg(colour);
    }

    fn change_bg(&mut self, command: &Command, sink: &mut dyn RenderSink) {
        if self.config.simple {
            return;
        }
        let colour = parse_colour(&command.value);
        self.state.bg = colour;
        sink.set_bg(colour);
    }

    fn set_pattern(&mut self, command: &Command) {
        if let Some(ch) = command.value.chars().next() {
            self.state.pattern = ch;
        }
    }

    fn emit_trace(&mut self, kind: TraceKind, from: (f64, f64), trace: &mut dyn TraceSink) {
        let record = TraceRecord {
            kind,
            from,
            to: (self.state.x, self.state.y),
        };
        if self.config.debug {
            eprintln!("{}", record);
        }
        if trace.record(&record).is_err() {
            self.trace_failed = true;
        }
    }
}

/// Values reach the engine already validated; fall back to 0 like atof would.
fn parse_real(value: &str) -> f64 {
    value.parse().unwrap_or(0.0)
}

fn parse_colour(value: &str) -> u8 {
    value.parse().unwrap_or(0)
}
