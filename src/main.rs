use std::{path::PathBuf, process, time::Instant};

use clap::Parser;
use clexer::{
    errors::errors::Error,
    init_tracing,
    lexer::lexer::scan,
    render_error,
    report::table::{render_symbol_table, render_token_table},
    source::loader::load_source,
};
use tracing::debug;

/// Lexical analyzer for a small C-like language.
#[derive(Parser)]
#[command(name = "clexer")]
#[command(version)]
#[command(about = "Tokenizes a source file and prints its tokens and symbol table")]
struct Cli {
    /// Source file to analyze
    #[arg(default_value = "input.txt")]
    file: PathBuf,

    /// Do not echo the source text before the tables
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err((error, source)) = run(&cli) {
        eprint!("{}", render_error(&error, source.as_deref()));
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), (Error, Option<String>)> {
    let source = load_source(&cli.file).map_err(|error| (error, None))?;

    if !cli.quiet {
        println!("Source read successfully:");
        println!("{}", source);
    }

    let start = Instant::now();
    let file_name = cli.file.to_string_lossy().to_string();
    let (tokens, symbols) = match scan(&source, Some(file_name)) {
        Ok(result) => result,
        Err(error) => return Err((error, Some(source))),
    };
    debug!(elapsed = ?start.elapsed(), "tokenized");

    println!("\nTOKENS:");
    print!("{}", render_token_table(&tokens));

    println!("\nSYMBOL TABLE:");
    print!("{}", render_symbol_table(&symbols));

    Ok(())
}
