//! split_by_moves - one PGN file per game length
//!
//! ```bash
//! cargo run --release --bin split_by_moves -- books/UHO_2022.pgn
//! # Wrote the parsed books to books/UHO_2022_<i>_moves.pgn
//! ```

use anyhow::{Context, Result};
use pgnbook::cli::{self, Invocation, SPLIT_BY_MOVES};
use pgnbook::split::{split_by_moves, split_pattern};

fn main() -> Result<()> {
    cli::init_logger();

    let book = match SPLIT_BY_MOVES.parse(std::env::args_os()) {
        Invocation::Book(book) => book,
        Invocation::Usage => {
            println!("{}", SPLIT_BY_MOVES.usage());
            return Ok(());
        }
        Invocation::Exit(e) => e.exit(),
    };

    let written = split_by_moves(&book).with_context(|| format!("splitting {}", book.display()))?;
    log::info!("{} files written", written.len());
    println!("Wrote the parsed books to {}", split_pattern(&book)?.display());
    Ok(())
}
