//! Splits a PGN collection into one file per game length.

use crate::chess::{GameRecord, GameStream};
use crate::epd::check_book_path;
use crate::error::{Error, Result};
use crate::pgn::PgnReader;
use log::{debug, info};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Games keyed by their number of half-moves, each list in input order.
pub type Groups<G> = BTreeMap<usize, Vec<G>>;

fn tagged_path(book: &Path, tag: &str) -> Result<PathBuf> {
    check_book_path(book)?;
    let stem = book
        .file_stem()
        .ok_or_else(|| Error::Usage(book.to_path_buf()))?
        .to_string_lossy();
    Ok(book.with_file_name(format!("{stem}_{tag}_moves.pgn")))
}

/// `book.pgn` with `count` plies becomes `book_<count>_moves.pgn` in the same directory.
pub fn split_path(book: &Path, count: usize) -> Result<PathBuf> {
    tagged_path(book, &count.to_string())
}

/// The naming pattern of the split files, `book_<i>_moves.pgn`.
pub fn split_pattern(book: &Path) -> Result<PathBuf> {
    tagged_path(book, "<i>")
}

pub fn group_by_length<S: GameStream>(stream: &mut S) -> Result<Groups<S::Game>> {
    let mut groups: Groups<S::Game> = BTreeMap::new();
    let mut games = 0usize;

    while let Some(game) = stream.read_next_game()? {
        games += 1;
        let count = game.moves().len();
        debug!("game {games}: {count} plies");
        groups.entry(count).or_default().push(game);
    }

    info!("{games} games in {} length groups", groups.len());
    Ok(groups)
}

/// Writes each group next to `book`, every game followed by a blank line. Returns the files
/// written, in ascending length.
pub fn write_groups<G: GameRecord>(book: &Path, groups: &Groups<G>) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(groups.len());
    for (&count, games) in groups {
        let path = split_path(book, count)?;
        let mut out = BufWriter::new(File::create(&path)?);
        for game in games {
            write!(out, "{}\n\n", game.to_pgn_text())?;
        }
        out.flush()?;
        debug!("wrote {} games to {}", games.len(), path.display());
        written.push(path);
    }
    Ok(written)
}

/// Splits `book` by game length and returns the files written.
pub fn split_by_moves(book: &Path) -> Result<Vec<PathBuf>> {
    check_book_path(book)?;
    let mut reader = PgnReader::open(book)?;
    let groups = group_by_length(&mut reader)?;
    write_groups(book, &groups)
}
