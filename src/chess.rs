//! The seam between the conversion pipelines and the chess model.
//!
//! `epd` and `split` only talk to these traits, so they never depend on how games are parsed
//! or how positions are stored.

use crate::error::Result;
use crate::pgn::{PgnGame, PgnReader};
use crate::utils::board::Board;
use std::io::Read;

/// A source of parsed games.
pub trait GameStream {
    type Game: GameRecord;

    /// The next game, or `None` at end of stream.
    fn read_next_game(&mut self) -> Result<Option<Self::Game>>;
}

/// A parsed game.
pub trait GameRecord {
    type Board: PositionBoard;

    /// Mainline moves in SAN, in playing order.
    fn moves(&self) -> &[String];

    /// A fresh board in the game's starting position.
    fn board(&self) -> Result<Self::Board>;

    fn to_pgn_text(&self) -> String;
}

/// Replay state that can render its position canonically.
pub trait PositionBoard {
    fn apply(&mut self, san: &str) -> Result<()>;

    fn canonical_position_string(&self) -> String;
}

impl<R: Read> GameStream for PgnReader<R> {
    type Game = PgnGame;

    fn read_next_game(&mut self) -> Result<Option<PgnGame>> {
        self.read_game()
    }
}

impl GameRecord for PgnGame {
    type Board = Board;

    fn moves(&self) -> &[String] {
        &self.moves
    }

    fn board(&self) -> Result<Board> {
        self.start_board()
    }

    fn to_pgn_text(&self) -> String {
        self.to_pgn()
    }
}

impl PositionBoard for Board {
    fn apply(&mut self, san: &str) -> Result<()> {
        self.play_move(san)
    }

    fn canonical_position_string(&self) -> String {
        self.to_epd()
    }
}
