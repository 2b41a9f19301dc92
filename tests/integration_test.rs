// Integration tests for the full validate-then-interpret pipeline

use turtty::command::CommandKind;
use turtty::geometry::Point;
use turtty::interpreter::{Config, Interpreter, ScriptError};
use turtty::render::CaptureRenderer;
use turtty::trace::{MemoryTrace, TraceKind};
use turtty::validate;

/// Validates and, when clean, interprets a source through capture sinks.
fn run_source(source: &str, config: Config) -> (CaptureRenderer, MemoryTrace) {
    let report = validate::validate_source(source);
    assert!(
        report.is_clean(),
        "unexpected validation errors: {:?}",
        report.errors
    );

    let mut interpreter = Interpreter::new(config);
    let mut sink = CaptureRenderer::new();
    let mut trace = MemoryTrace::default();
    interpreter
        .run(&report.script, &mut sink, &mut trace)
        .expect("interpretation failed");
    (sink, trace)
}

#[test]
fn test_square_script_draws_four_sides() {
    let source = "\
DRAW 5
ROTATE 90
DRAW 5
ROTATE 90
DRAW 5
ROTATE 90
DRAW 5
";
    let (sink, trace) = run_source(source, Config::default());

    // Four sides of 5 cells each
    assert_eq!(sink.cells.len(), 20);
    assert_eq!(trace.records.len(), 4);
    assert!(trace.records.iter().all(|r| r.kind == TraceKind::Draw));

    // Every cell stays within the 5x5 square around the origin
    for point in sink.points() {
        assert!((0..=5).contains(&point.x), "x out of square: {:?}", point);
        assert!((-5..=0).contains(&point.y), "y out of square: {:?}", point);
    }
}

#[test]
fn test_one_bad_line_suppresses_all_drawing() {
    let source = "\
DRAW 10
ROTATE 90
DRAW abc
DRAW 10
";
    let report = validate::validate_source(source);

    assert!(!report.is_clean());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line_no, 3);
    // The other three commands still validated and were stored
    assert_eq!(report.script.len(), 3);

    // The caller's contract: interpretation never runs on a dirty report, so
    // zero cells are ever plotted for this file.
}

#[test]
fn test_case_insensitive_names_and_blank_lines() {
    let source = "\

draw 3

Rotate 90
dRaW 3
";
    let (sink, _) = run_source(source, Config::default());
    assert_eq!(sink.cells.len(), 6);
}

#[test]
fn test_move_breaks_the_line() {
    let source = "\
DRAW 3
MOVE 4
DRAW 3
";
    let (sink, trace) = run_source(source, Config::default());

    // MOVE plots nothing: two 3-cell segments with a 4-unit gap
    assert_eq!(sink.cells.len(), 6);
    assert_eq!(trace.records.len(), 3);
    assert_eq!(trace.records[1].kind, TraceKind::Move);

    let xs: Vec<i32> = sink.points().iter().map(|p| p.x).collect();
    assert_eq!(xs, vec![0, 1, 2, 7, 8, 9]);
}

#[test]
fn test_pattern_and_colours_flow_to_sink() {
    let source = "\
PATTERN #
FG 12
BG 4
DRAW 2
";
    let (sink, _) = run_source(source, Config::default());

    assert_eq!(sink.fg_calls, vec![12]);
    assert_eq!(sink.bg_calls, vec![4]);
    assert_eq!(sink.cells, vec![
        (Point { x: 0, y: 0 }, '#'),
        (Point { x: 1, y: 0 }, '#'),
    ]);
}

#[test]
fn test_simple_mode_ignores_colour_commands() {
    let source = "\
FG 12
BG 4
DRAW 2
";
    let config = Config {
        simple: true,
        debug: false,
    };
    let (sink, _) = run_source(source, config);

    // Only the fixed defaults set at the start of the run
    assert_eq!(sink.fg_calls, vec![0]);
    assert_eq!(sink.bg_calls, vec![7]);
    assert_eq!(sink.cells.len(), 2);
}

#[test]
fn test_single_command_file() {
    let (sink, trace) = run_source("DRAW 1\n", Config::default());

    // DRAW 1 rasterizes a single cell at the start
    assert_eq!(sink.points(), vec![Point { x: 0, y: 0 }]);
    assert_eq!(trace.records.len(), 1);
}

#[test]
fn test_empty_script_after_blank_only_file() {
    let report = validate::validate_source("  \n\t\n\n");
    assert!(report.is_clean());
    assert!(report.script.is_empty());

    let mut interpreter = Interpreter::new(Config::default());
    let mut sink = CaptureRenderer::new();
    let mut trace = MemoryTrace::default();
    let result = interpreter.run(&report.script, &mut sink, &mut trace);

    assert_eq!(result, Err(ScriptError::EmptyScript));
    assert!(sink.cells.is_empty());
}

#[test]
fn test_validation_boundaries_end_to_end() {
    // Every boundary value that should pass
    let source = "\
DRAW 0
DRAW 80
FG 0
FG 15
BG 0
BG 7
ROTATE -720
";
    let report = validate::validate_source(source);
    assert!(report.is_clean());
    assert_eq!(report.script.len(), 7);

    // And the ones just outside
    for line in ["DRAW 80.5", "MOVE -0.1", "FG 16", "BG 8"] {
        let report = validate::validate_source(line);
        assert_eq!(report.errors.len(), 1, "expected rejection for {:?}", line);
    }
}

#[test]
fn test_diagonal_draw_rasterizes_contiguously() {
    let source = "\
ROTATE 45
DRAW 10
";
    let (sink, _) = run_source(source, Config::default());
    let points = sink.points();

    assert_eq!(points[0], Point { x: 0, y: 0 });
    // Each step moves at most one cell in each axis
    for pair in points.windows(2) {
        assert!((pair[1].x - pair[0].x).abs() <= 1);
        assert!((pair[1].y - pair[0].y).abs() <= 1);
    }
    // Heading 45 degrees goes up-right on the screen
    let last = points.last().unwrap();
    assert!(last.x > 0 && last.y < 0);
}

#[test]
fn test_script_store_holds_every_valid_command_in_order() {
    let source = "\
PATTERN *
ROTATE 30
MOVE 12.5
DRAW 6
BG 2
FG 9
";
    let report = validate::validate_source(source);
    let kinds: Vec<CommandKind> = report.script.iter().map(|c| c.kind).collect();
    assert_eq!(
        kinds,
        vec![
            CommandKind::Pattern,
            CommandKind::Rotate,
            CommandKind::Move,
            CommandKind::Draw,
            CommandKind::Bg,
            CommandKind::Fg,
        ]
    );
}
