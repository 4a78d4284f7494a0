use std::io::{self, BufRead};
use std::process;

use clap::Parser;
use handcalc::{render_outcome, Expr, DEFAULT_PRECISION};

/// handcalc checks and evaluates arithmetic expressions as read from
/// handwriting: digits, `+ - * /`, and `[ ]` for brackets.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Number of decimal places shown for non-integer results.
    #[arg(short, long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Exit with a failure status if any expression is invalid or divides
    /// by zero.
    #[arg(short, long)]
    strict: bool,

    /// Log validation and evaluation steps. `RUST_LOG` gives finer control.
    #[arg(short, long)]
    verbose: bool,

    /// Expressions to evaluate. Read one per line from stdin when empty.
    expressions: Vec<String>,
}

fn main() {
    let args = Args::parse();

    let mut logger = env_logger::Builder::from_default_env();
    if args.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    let expressions = if args.expressions.is_empty() {
        read_expressions(io::stdin().lock()).unwrap_or_else(|e| {
            eprintln!("Failed to read the standard input: {e}");
            process::exit(1);
        })
    } else {
        args.expressions
    };

    let (lines, failed) = run(&expressions, args.precision);
    for line in &lines {
        println!("{line}");
    }
    process::exit(exit_status(failed, args.strict));
}

/// Read one expression per line, skipping blank lines.
fn read_expressions<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut expressions = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            expressions.push(line.to_string());
        }
    }
    Ok(expressions)
}

/// Evaluate every expression once. Returns the lines to print, and whether
/// any expression failed.
fn run(expressions: &[String], precision: u32) -> (Vec<String>, bool) {
    let mut failed = false;
    let lines = expressions
        .iter()
        .map(|expression| {
            let outcome = Expr::parse(expression).and_then(|expr| expr.eval());
            failed |= outcome.is_err();
            render_outcome(expression, &outcome, precision)
        })
        .collect();
    (lines, failed)
}

fn exit_status(failed: bool, strict: bool) -> i32 {
    if strict && failed {
        1
    } else {
        0
    }
}
