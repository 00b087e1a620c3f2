use std::{
    io::{self, Read},
    path::PathBuf,
    process,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use luafront::{format_error, lexer::lexer::tokenize, parser::parser::parse_partial, render};

/// Lex and parse a script, printing its syntax tree.
#[derive(Parser, Debug)]
#[command(author, version, long_about = None)]
struct Args {
    /// Source file to read; stdin when omitted
    path: Option<PathBuf>,

    /// Print the lexeme stream before the tree
    #[arg(long)]
    tokens: bool,

    /// Include whitespace and comments in the printed tree
    #[arg(long)]
    trivia: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let (source, file_name) = read_source(args.path.as_ref())?;

    let start = Instant::now();
    let lexemes = tokenize(source.clone(), Some(file_name));
    tracing::info!("Tokenized in {:?}", start.elapsed());

    if args.tokens {
        print!("{}", render::lexemes(&lexemes));
        println!();
    }

    let parse_start = Instant::now();
    let (tree, error) = parse_partial(&lexemes);
    tracing::info!("Parsed in {:?}", parse_start.elapsed());

    print!("{}", render::tree(&tree, args.trivia));

    if let Some(error) = error {
        eprint!("{}", format_error(&error, &source));
        process::exit(1);
    }

    tracing::info!("Total time: {:?}", start.elapsed());
    Ok(())
}

fn read_source(path: Option<&PathBuf>) -> Result<(String, String)> {
    match path {
        Some(path) => {
            let source = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            let file_name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            Ok((source, file_name))
        }
        None => {
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .context("failed to read stdin")?;
            Ok((source, String::from("stdin")))
        }
    }
}
