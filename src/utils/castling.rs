use crate::utils::color::Color;
use crate::utils::coord::Coord;
use crate::utils::figure::Figure;
use crate::utils::piece::Piece;
use std::fmt::{Display, Formatter};

// Home squares of kings and rooks, as board indexes.
const A8: i8 = 0;
const E8: i8 = 4;
const H8: i8 = 7;
const A1: i8 = 56;
const E1: i8 = 60;
const H1: i8 = 63;

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Castling {
    pub white_kingside: bool,
    pub white_queenside: bool,
    pub black_kingside: bool,
    pub black_queenside: bool,
}

impl Castling {
    pub fn new() -> Self {
        Castling {
            white_kingside: true,
            white_queenside: true,
            black_kingside: true,
            black_queenside: true,
        }
    }

    pub fn none() -> Self {
        Castling {
            white_kingside: false,
            white_queenside: false,
            black_kingside: false,
            black_queenside: false,
        }
    }

    /// Drops both rights of `color` after it castled.
    pub fn castle(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_kingside = false;
                self.white_queenside = false;
            }
            Color::Black => {
                self.black_kingside = false;
                self.black_queenside = false;
            }
        }
    }

    /// Drops the rights lost by moving `figure` away from its square.
    pub fn update(&mut self, figure: Figure) {
        match figure.piece {
            Piece::King => self.castle(figure.color),
            Piece::Rook => self.clear_square(figure.coord),
            _ => {}
        }
    }

    /// Drops the right tied to a rook home square, e.g. when a rook is captured there.
    pub fn clear_square(&mut self, coord: Coord) {
        match coord.idx {
            A8 => self.black_queenside = false,
            H8 => self.black_kingside = false,
            A1 => self.white_queenside = false,
            H1 => self.white_kingside = false,
            _ => {}
        }
    }

    /// Drops every right whose king or rook is not on its home square in `position`.
    pub fn mask(&mut self, position: &[Option<Figure>]) {
        let at_home = |idx: i8, piece: Piece, color: Color| {
            position
                .get(idx as usize)
                .copied()
                .flatten()
                .is_some_and(|f| f.piece == piece && f.color == color)
        };
        let white_king = at_home(E1, Piece::King, Color::White);
        let black_king = at_home(E8, Piece::King, Color::Black);

        self.white_kingside &= white_king && at_home(H1, Piece::Rook, Color::White);
        self.white_queenside &= white_king && at_home(A1, Piece::Rook, Color::White);
        self.black_kingside &= black_king && at_home(H8, Piece::Rook, Color::Black);
        self.black_queenside &= black_king && at_home(A8, Piece::Rook, Color::Black);
    }

    pub fn any(&self) -> bool {
        self.white_kingside || self.white_queenside || self.black_kingside || self.black_queenside
    }
}

impl Default for Castling {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for Castling {
    fn from(fen: &str) -> Self {
        Castling {
            white_kingside: fen.contains('K'),
            white_queenside: fen.contains('Q'),
            black_kingside: fen.contains('k'),
            black_queenside: fen.contains('q'),
        }
    }
}

impl Display for Castling {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.any() {
            return write!(f, "-");
        }

        // order matters.
        let flags = [
            (self.white_kingside, 'K'),
            (self.white_queenside, 'Q'),
            (self.black_kingside, 'k'),
            (self.black_queenside, 'q'),
        ];
        for (_, c) in flags.iter().filter(|(set, _)| *set) {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
