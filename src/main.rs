// turtty: turtle-graphics command interpreter for the terminal

use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use turtty::interpreter::{Config, Interpreter};
use turtty::render::TerminalRenderer;
use turtty::trace::FileTrace;
use turtty::validate;

const LOG_FILE: &str = "graphics.log";

/// Draws a script of turtle commands (DRAW, MOVE, ROTATE, FG, BG, PATTERN)
/// on the terminal.
#[derive(Parser)]
#[command(version)]
struct Args {
    /// Script file, one command per line
    file: PathBuf,

    /// Fixed black-on-white colours; FG and BG commands are ignored
    #[arg(long)]
    simple: bool,

    /// Echo each DRAW/MOVE trace line to stderr
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    let source = match fs::read_to_string(&args.file) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: file could not be opened: {}", e);
            eprintln!("       check if file exists");
            exit(1);
        }
    };

    if source.is_empty() {
        eprintln!("Error: file contains no data");
        exit(1);
    }

    let report = validate::validate_source(&source);
    for error in &report.errors {
        eprintln!("Error: {}", error);
    }
    println!("{}", report.summary());

    if !report.is_clean() {
        exit(1);
    }

    let mut renderer = TerminalRenderer::new();
    let mut trace = FileTrace::open(LOG_FILE);
    if !trace.is_active() {
        eprintln!("Warning: log file can't be updated");
    }

    let mut interpreter = Interpreter::new(Config {
        simple: args.simple,
        debug: args.debug,
    });

    if let Err(e) = interpreter.run(&report.script, &mut renderer, &mut trace) {
        eprintln!("Error: {}", e);
        exit(1);
    }

    if interpreter.trace_failed() {
        eprintln!("Warning: {} could not be written", LOG_FILE);
    }
}
