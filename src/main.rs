use std::{fmt::Debug, path::PathBuf, process::ExitCode, time::Instant};

use clap::Parser;
use lexis::{
    display_error, LexerOptions, LiteralTable, LiteralTables, StringSource, Token, TokenKind,
    Tokenizer, DEFAULT_MAX_LEXEME_LENGTH,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LEXICAL_ERROR: u8 = 65;
const INPUT_ERROR: u8 = 66;

#[derive(Debug, Parser)]
#[command(name = "lexis", version)]
#[command(about = "Tokenize a source file and print its tokens")]
struct Cli {
    /// Source file to tokenize
    path: PathBuf,

    /// Also print the interned literal tables
    #[arg(long)]
    tables: bool,

    /// Longest lexeme accepted, in bytes
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_MAX_LEXEME_LENGTH)]
    max_lexeme_length: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(fmt::layer().without_time())
        .with(EnvFilter::from_default_env())
        .init();

    let source = match StringSource::from_file(&cli.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Can't open {}: {}", cli.path.display(), error);
            return ExitCode::from(INPUT_ERROR);
        }
    };
    let text = source.text().to_string();

    let file_name = cli
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| cli.path.display().to_string());

    let options = LexerOptions::new()
        .file(file_name)
        .max_lexeme_length(cli.max_lexeme_length);

    let start = Instant::now();
    let mut lexer = Tokenizer::new(source, options);

    loop {
        match lexer.next_token() {
            Ok(token) => {
                let position = lexer.token_start();
                println!(
                    "{:>4}:{:<4} {}",
                    position.line,
                    position.column,
                    describe(&token, lexer.tables())
                );
                if token.is_end() {
                    break;
                }
            }
            Err(error) => {
                display_error(&error, &text);
                return ExitCode::from(LEXICAL_ERROR);
            }
        }
    }

    tracing::info!(elapsed = ?start.elapsed(), "tokenized {}", cli.path.display());

    if cli.tables {
        print_tables(lexer.tables());
    }

    ExitCode::SUCCESS
}

fn describe(token: &Token, tables: &LiteralTables) -> String {
    match token.kind {
        TokenKind::Keyword | TokenKind::Symbol => match token.lexeme() {
            Some(lexeme) => format!("{} {}", token, lexeme),
            None => format!("{} <unknown>", token),
        },
        TokenKind::Identifier => format!("{} {}", token, tables.get_identifier(token.id)),
        TokenKind::Integer => format!("{} {}", token, tables.get_integer(token.id)),
        TokenKind::Float => format!("{} {:?}", token, tables.get_float(token.id)),
        TokenKind::String => format!("{} {:?}", token, tables.get_string(token.id)),
        TokenKind::End => token.to_string(),
    }
}

fn print_tables(tables: &LiteralTables) {
    print_table(&tables.integers);
    print_table(&tables.floats);
    print_table(&tables.identifiers);
    print_table(&tables.strings);
}

fn print_table<T: Debug>(table: &LiteralTable<T>) {
    println!("{} table:", table.name());
    for (index, value) in table.iter() {
        println!("{:>5}  {:?}", index, value);
    }
}
