mod error;

use canon_poly::{canonicalize, EquationError};
use clap::Parser;
use env_logger::Env;
use error::Error;
use log::{debug, info};
use rayon::prelude::*;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read, Write}, path::{Path, PathBuf}, process::ExitCode};

/// Rewrites equations in the canonical polynomial form `P = 0`.
///
/// Valid variables are the single letters t, u, v, w, x, y, and z.
#[derive(Parser, Debug)]
#[command(name = "canon")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Equation to canonicalize, such as "x^2 + 3.5xy + y = y^2 - xy + y"
    #[arg(value_name = "EQUATION", conflicts_with = "batch")]
    equation: Option<String>,

    /// Canonicalize every line of the input file, writing one result per line to the output file
    #[arg(short, long)]
    batch: bool,

    /// Input file for batch mode
    #[arg(short, long, value_name = "FILE", default_value = "equations.in")]
    input_file: PathBuf,

    /// Output file for batch mode
    #[arg(short, long, value_name = "FILE", default_value = "equations.out")]
    output_file: PathBuf,
}

/// The output of batch mode.
#[derive(Debug)]
struct Batch {
    /// One line per input line.
    output: String,

    /// The number of lines that failed to canonicalize.
    failed: usize,
}

/// Formats the output line for the result of one input line. Blank input lines have no result.
fn output_line(result: Option<&Result<String, EquationError>>) -> String {
    match result {
        None => String::new(),
        Some(Ok(canonical)) => canonical.clone(),
        Some(Err(err)) => format!("error: {} (position {})", err.message(), err.position()),
    }
}

/// Canonicalizes every line of the input in parallel. Failed lines are reported to stderr, and
/// the output keeps the order of the input.
fn run_batch(src_id: &str, input: &str) -> Result<Batch, Error> {
    let lines = input.lines().collect::<Vec<_>>();
    debug!("canonicalizing {} lines from `{}`", lines.len(), src_id);

    let results = lines.par_iter()
        .map(|line| (!line.trim().is_empty()).then(|| canonicalize(line)))
        .collect::<Vec<_>>();

    let mut batch = Batch { output: String::new(), failed: 0 };
    for (i, (line, result)) in lines.iter().zip(&results).enumerate() {
        if let Some(Err(err)) = result {
            batch.failed += 1;
            err.report_to_stderr(&format!("{}:{}", src_id, i + 1), line)?;
        }
        batch.output.push_str(&output_line(result.as_ref()));
        batch.output.push('\n');
    }

    Ok(batch)
}

/// Runs batch mode from `input_file` to `output_file`. Returns true if every line was
/// canonicalized.
fn run_batch_file(input_file: &Path, output_file: &Path) -> Result<bool, Error> {
    let input = fs::read_to_string(input_file)
        .map_err(|err| Error::Read(input_file.to_path_buf(), err))?;
    let batch = run_batch(&input_file.display().to_string(), &input)?;
    fs::write(output_file, &batch.output)
        .map_err(|err| Error::Write(output_file.to_path_buf(), err))?;

    info!("wrote results to `{}`, {} line(s) failed", output_file.display(), batch.failed);
    Ok(batch.failed == 0)
}

/// Canonicalizes a single equation, printing the result to stdout, or the error report to stderr.
/// Returns true if the equation was canonicalized.
fn run_single(equation: &str) -> Result<bool, Error> {
    match canonicalize(equation) {
        Ok(canonical) => {
            println!("{}", canonical);
            Ok(true)
        },
        Err(err) => {
            err.report_to_stderr("input", equation)?;
            Ok(false)
        },
    }
}

/// Runs the interactive prompt until the user exits with Ctrl-C or Ctrl-D.
fn run_repl() -> Result<(), Error> {
    let mut rl = DefaultEditor::new()?;

    loop {
        let input = match rl.readline("> ") {
            Ok(input) => input,
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => return Ok(()),
            Err(err) => return Err(err.into()),
        };
        if input.trim().is_empty() {
            continue;
        }

        rl.add_history_entry(&input)?;

        match canonicalize(&input) {
            Ok(canonical) => println!("{}", canonical),
            Err(err) => err.report_to_stderr("input", &input)?,
        }
    }
}

/// Runs the mode selected by the arguments. Returns false if any equation failed.
fn run(args: Args) -> Result<bool, Error> {
    if let Some(equation) = &args.equation {
        return run_single(equation);
    }

    if args.batch {
        return run_batch_file(&args.input_file, &args.output_file);
    }

    if !io::stdin().is_terminal() {
        // read equations from stdin
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;

        let batch = run_batch("stdin", &input)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(batch.output.as_bytes())?;
        stdout.flush()?;
        return Ok(batch.failed == 0);
    }

    run_repl()?;
    Ok(true)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    match run(Args::parse()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        },
    }
}
