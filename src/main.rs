use std::{fs, path::PathBuf, process::ExitCode, time::Duration};

use anyhow::Context;
use clap::Parser;
use kaka::{
    interpreter::{
        console::StdConsole,
        lexer::tokenize,
        limits::{DEFAULT_MAX_CALL_DEPTH, Limits},
        parser::parse_program,
    },
    printer::to_source,
    run,
};

/// kaka runs programs written in Kaka, a small scripting language with
/// Bengali keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The program to run.
    file: PathBuf,

    /// Stops the program once it has printed this many lines.
    #[arg(long, env = "KAKA_MAX_OUTPUT_LINES")]
    max_output_lines: Option<usize>,

    /// Stops the program after this many milliseconds.
    #[arg(long, env = "KAKA_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    /// Maximum depth of nested function calls.
    #[arg(long, env = "KAKA_MAX_CALL_DEPTH", default_value_t = DEFAULT_MAX_CALL_DEPTH)]
    max_call_depth: usize,

    /// Prints the token stream instead of running the program.
    #[arg(long, conflicts_with = "format")]
    tokens: bool,

    /// Prints the program in canonical form instead of running it.
    #[arg(long)]
    format: bool,
}

impl Args {
    fn limits(&self) -> Limits {
        let mut limits = Limits::default().with_max_call_depth(self.max_call_depth);
        if let Some(lines) = self.max_output_lines {
            limits = limits.with_max_output_lines(lines);
        }
        if let Some(millis) = self.timeout_ms {
            limits = limits.with_time_limit(Duration::from_millis(millis));
        }
        limits
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();

    match execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ভুল হয়েছে কাকা (Error): {e:#}");
            ExitCode::FAILURE
        },
    }
}

fn execute(args: &Args) -> anyhow::Result<()> {
    let source = fs::read_to_string(&args.file).with_context(|| {
                                                    format!("Reading {}", args.file.display())
                                                })?;

    if args.tokens {
        for token in tokenize(&source)? {
            println!("{:>4}  {}", token.line, token.kind);
        }
        return Ok(());
    }

    if args.format {
        let program = parse_program(&tokenize(&source)?)?;
        print!("{}", to_source(&program));
        return Ok(());
    }

    run(&source, &mut StdConsole, args.limits())?;
    Ok(())
}
