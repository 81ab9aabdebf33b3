//! pgn_to_epd - PGN book to deduplicated EPD list
//!
//! ```bash
//! cargo run --release --bin pgn_to_epd -- books/UHO_2022.pgn
//! # Wrote the converted book to books/UHO_2022.epd.
//! ```

use anyhow::{Context, Result};
use pgnbook::cli::{self, Invocation, PGN_TO_EPD};
use pgnbook::epd::pgn_to_epd;

fn main() -> Result<()> {
    cli::init_logger();

    let book = match PGN_TO_EPD.parse(std::env::args_os()) {
        Invocation::Book(book) => book,
        Invocation::Usage => {
            println!("{}", PGN_TO_EPD.usage());
            return Ok(());
        }
        Invocation::Exit(e) => e.exit(),
    };

    let epd = pgn_to_epd(&book).with_context(|| format!("converting {}", book.display()))?;
    println!("Wrote the converted book to {}.", epd.display());
    Ok(())
}
