use std::{fs, process::ExitCode};

use clap::Parser;
use quotient::{evaluate, interpreter::lexer::Tokenizer};
use tracing_subscriber::EnvFilter;

/// quotient evaluates arithmetic expressions over non-negative integers with
/// `+ - * /` and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells quotient to read the expression from a file instead.
    #[arg(short, long)]
    file: bool,

    /// Prints every token of the input instead of evaluating it.
    #[arg(short, long)]
    tokens: bool,

    /// The expression, or a file path when `--file` is given.
    #[arg(default_value = "7 + 3")]
    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let source = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Failed to read the input file '{}': {e}", &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.tokens {
        for token in Tokenizer::new(&source) {
            match token {
                Ok(token) => println!("{token}"),
                Err(e) => {
                    eprintln!("{e}");
                    return ExitCode::FAILURE;
                },
            }
        }
        return ExitCode::SUCCESS;
    }

    match evaluate(&source) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
