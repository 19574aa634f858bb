use std::{fs, process, time::Instant};

use clap::Parser;
use dflat::{
    ast::ast::{Expression, Statement},
    errors::errors::Error,
    format_error,
    lexer::lexer::tokenize,
    parser::parser::{parse, parse_expression_str},
};

/// dflat parses a program and prints its syntax tree, or the first error
/// found in it.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat `contents` as a path and read the program from that file.
    #[arg(short, long)]
    file: bool,

    /// Print the token stream before parsing.
    #[arg(short, long)]
    tokens: bool,

    /// Parse a single expression instead of a list of statements.
    #[arg(short, long)]
    expression: bool,

    /// Report how long each phase took.
    #[arg(short, long)]
    verbose: bool,

    contents: String,
}

fn main() {
    let args = Args::parse();

    let source = if args.file {
        fs::read_to_string(&args.contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{}'. Perhaps this file does not exist?",
                &args.contents
            );
            process::exit(1);
        })
    } else {
        args.contents.clone()
    };

    let start = Instant::now();
    let tokens = tokenize(&source);

    if args.verbose {
        eprintln!("Tokenized in {:?}", start.elapsed());
    }

    if args.tokens {
        let tokens = tokens
            .iter()
            .map(|token| token.to_string())
            .collect::<Vec<_>>();
        println!("{}", tokens.join(" "));
    }

    let parse_start = Instant::now();

    if args.expression {
        let expression = parse_expression_str(&source, true);
        report_timing(&args, parse_start);

        match expression {
            Expression::Error(error) => fail(&error, &source),
            expression => println!("{}", expression),
        }
        return;
    }

    let statements = parse(&source);
    report_timing(&args, parse_start);

    if let Some(error) = statements.first().and_then(Statement::as_error) {
        fail(error, &source);
    }

    for statement in &statements {
        println!("{}", statement);
    }
}

fn report_timing(args: &Args, parse_start: Instant) {
    if args.verbose {
        eprintln!("Parsed in {:?}", parse_start.elapsed());
    }
}

fn fail(error: &Error, source: &str) -> ! {
    /*
        error: expected value at 2:12
          |
        2 | let b = a +;
          | -----------^
    */
    eprintln!("{}", format_error(error, source));
    process::exit(1);
}
