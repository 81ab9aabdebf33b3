//! Command line handling shared by the two programs.

use crate::epd::check_book_path;
use clap::error::ErrorKind;
use clap::{CommandFactory, FromArgMatches, Parser};
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct BookArgs {
    /// PGN book to read
    #[arg(value_name = "book.pgn")]
    books: Vec<PathBuf>,
}

/// Name and one-line description of a program, used for `--help` and the usage message.
#[derive(Clone, Copy, Debug)]
pub struct Tool {
    pub name: &'static str,
    pub description: &'static str,
}

pub const PGN_TO_EPD: Tool = Tool {
    name: "pgn_to_epd",
    description: "Converts a .pgn into an .epd book, keeping the order intact.",
};

pub const SPLIT_BY_MOVES: Tool = Tool {
    name: "split_by_moves",
    description: "Generates separate files for 0.5, 1.0, 1.5, ... move games",
};

#[derive(Debug)]
pub enum Invocation {
    /// Exactly one `.pgn` path was given.
    Book(PathBuf),
    /// Anything else: print `Tool::usage` and stop.
    Usage,
    /// `--help` or `--version`; clap prints and exits.
    Exit(clap::Error),
}

impl Tool {
    pub fn usage(&self) -> String {
        format!("Usage: {} <book.pgn>\n\n{}", self.name, self.description)
    }

    pub fn parse<I, T>(&self, args: I) -> Invocation
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let command = BookArgs::command()
            .name(self.name)
            .about(self.description)
            .version(env!("CARGO_PKG_VERSION"));

        let matches = match command.try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
                return Invocation::Exit(e);
            }
            Err(_) => return Invocation::Usage,
        };
        let Ok(BookArgs { mut books }) = BookArgs::from_arg_matches(&matches) else {
            return Invocation::Usage;
        };

        match books.pop() {
            Some(book) if books.is_empty() && check_book_path(&book).is_ok() => {
                Invocation::Book(book)
            }
            _ => Invocation::Usage,
        }
    }
}

/// Logs go to stderr at `warn` unless `RUST_LOG` says otherwise.
pub fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
