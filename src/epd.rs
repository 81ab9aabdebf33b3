//! PGN to EPD conversion: every position reached in any game, once.

use crate::chess::{GameRecord, GameStream, PositionBoard};
use crate::error::{Error, Result};
use crate::pgn::PgnReader;
use log::{debug, info, warn};
use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const BOOK_EXTENSION: &str = "pgn";
pub const EPD_EXTENSION: &str = "epd";

/// Deduplicated positions in order of first occurrence.
#[derive(Debug, Default)]
pub struct EpdSet {
    seen: HashSet<String>,
    order: Vec<String>,
    offered: usize,
}

impl EpdSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `epd` unless it is already present. Returns whether it was new.
    pub fn insert(&mut self, epd: String) -> bool {
        self.offered += 1;
        if self.seen.contains(&epd) {
            return false;
        }
        self.seen.insert(epd.clone());
        self.order.push(epd);
        true
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of positions offered to `insert`, duplicates included.
    pub fn offered(&self) -> usize {
        self.offered
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Rejects anything but a `.pgn` path.
pub fn check_book_path(path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some(BOOK_EXTENSION) => Ok(()),
        _ => Err(Error::Usage(path.to_path_buf())),
    }
}

/// `book.pgn` becomes `book.epd` in the same directory.
pub fn epd_path(book: &Path) -> Result<PathBuf> {
    check_book_path(book)?;
    Ok(book.with_extension(EPD_EXTENSION))
}

/// Replays every game of `stream` and collects the position after each move.
pub fn collect_epds<S: GameStream>(stream: &mut S) -> Result<EpdSet> {
    let mut epds = EpdSet::new();
    let mut games = 0usize;

    while let Some(game) = stream.read_next_game()? {
        games += 1;
        let mut board = game.board()?;
        let before = epds.len();
        for san in game.moves() {
            board.apply(san)?;
            epds.insert(board.canonical_position_string());
        }
        debug!(
            "game {games}: {} plies, {} new positions",
            game.moves().len(),
            epds.len() - before
        );
    }

    info!(
        "{games} games, {} positions, {} unique",
        epds.offered(),
        epds.len()
    );
    Ok(epds)
}

/// Writes one EPD per line, each terminated by `\n`.
pub fn write_epds(path: &Path, epds: &EpdSet) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for epd in epds.iter() {
        writeln!(out, "{epd}")?;
    }
    out.flush()?;
    Ok(())
}

/// Converts `book` into an EPD file next to it and returns the path written.
pub fn pgn_to_epd(book: &Path) -> Result<PathBuf> {
    let output = epd_path(book)?;
    let mut reader = PgnReader::open(book)?;
    let epds = collect_epds(&mut reader)?;
    if epds.is_empty() {
        warn!("{} holds no moves", book.display());
    }
    write_epds(&output, &epds)?;
    info!("wrote {} positions to {}", epds.len(), output.display());
    Ok(output)
}
