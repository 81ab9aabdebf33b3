//! Error type shared by the reader, the board model and both pipelines.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Reading the book or writing an output file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// The PGN text of a game could not be decoded.
    #[error("PGN parse error in game {game}: {message}")]
    Parse { game: usize, message: String },

    /// No figure on the board can play the given SAN.
    #[error("illegal move {san} in position {fen}")]
    IllegalMove { san: String, fen: String },

    /// A FEN string (from a `FEN` header or elsewhere) is malformed.
    #[error("invalid FEN: {0}")]
    Fen(String),

    /// The book path does not name a `.pgn` file.
    #[error("expected a .pgn file, got {}", .0.display())]
    Usage(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
