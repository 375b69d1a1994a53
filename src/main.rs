use std::{fs, process::ExitCode};

use clap::Parser;
use pindscript::{
    error::{Error, FixedPhrasebook},
    interpreter::{
        evaluator::core::{Config, Interpreter, MAX_STEPS},
        lexer::tokenize,
        parser::parse,
    },
    run_source_with,
};
use tracing_subscriber::EnvFilter;

/// pindscript runs PindScript, a small scripting language with Punjabi
/// keywords.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells pindscript to look at a file instead of a script.
    #[arg(short, long)]
    file: bool,

    /// Number of steps a program may take before it is stopped.
    #[arg(long, default_value_t = MAX_STEPS)]
    max_steps: usize,

    /// Prints the token stream and stops.
    #[arg(long)]
    tokens: bool,

    /// Prints the parsed program and stops.
    #[arg(long)]
    ast: bool,

    /// Always uses the first phrasing of an error instead of a random one.
    #[arg(long)]
    plain_errors: bool,

    contents: String,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_env("PINDSCRIPT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter)
                             .with_writer(std::io::stderr)
                             .init();

    let args = Args::parse();

    let script = if args.file {
        match fs::read_to_string(&args.contents) {
            Ok(script) => script,
            Err(_) => {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          &args.contents);
                return ExitCode::FAILURE;
            },
        }
    } else {
        args.contents
    };

    if args.tokens || args.ast {
        return inspect(&script, args.tokens);
    }

    let mut interpreter = Interpreter::with_config(Config { max_steps: args.max_steps });
    if args.plain_errors {
        interpreter = interpreter.with_phrasebook(Box::new(FixedPhrasebook));
    }

    match run_source_with(&script, interpreter) {
        Ok(lines) => {
            println!("{}", lines.join("\n"));
            ExitCode::SUCCESS
        },
        Err(e) => {
            report(&e);
            ExitCode::FAILURE
        },
    }
}

/// Prints the tokens or the syntax tree of `script`.
fn inspect(script: &str, tokens_only: bool) -> ExitCode {
    let tokens = match tokenize(script) {
        Ok(tokens) => tokens,
        Err(e) => {
            report(&Error::from(e));
            return ExitCode::FAILURE;
        },
    };

    if tokens_only {
        for lexeme in &tokens {
            println!("{:>4}:{:<3} {:?}", lexeme.line, lexeme.column, lexeme.token);
        }
        return ExitCode::SUCCESS;
    }

    match parse(&tokens) {
        Ok(program) => {
            println!("{program:#?}");
            ExitCode::SUCCESS
        },
        Err(e) => {
            report(&Error::from(e));
            ExitCode::FAILURE
        },
    }
}

/// Prints whatever the program printed before failing, then the error.
fn report(error: &Error) {
    let output = error.output();
    if !output.is_empty() {
        println!("{}", output.join("\n"));
    }
    eprintln!("{error}");
}
