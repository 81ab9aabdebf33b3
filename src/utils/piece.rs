use crate::utils::color::Color;
use std::fmt;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Piece {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl Piece {
    /// Reads a piece letter in either case. Returns `None` for anything else.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'P' => Some(Piece::Pawn),
            'R' => Some(Piece::Rook),
            'N' => Some(Piece::Knight),
            'B' => Some(Piece::Bishop),
            'Q' => Some(Piece::Queen),
            'K' => Some(Piece::King),
            _ => None,
        }
    }

    /// FEN letter: uppercase for white, lowercase for black.
    pub fn to_char(self, color: Color) -> char {
        let upper = match self {
            Piece::Pawn => 'P',
            Piece::Rook => 'R',
            Piece::Knight => 'N',
            Piece::Bishop => 'B',
            Piece::Queen => 'Q',
            Piece::King => 'K',
        };
        match color {
            Color::White => upper,
            Color::Black => upper.to_ascii_lowercase(),
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_char(Color::White))
    }
}

#[test]
fn letters_map_both_cases() {
    assert_eq!(Piece::from_letter('n'), Some(Piece::Knight));
    assert_eq!(Piece::from_letter('Q'), Some(Piece::Queen));
    assert_eq!(Piece::from_letter('x'), None);
    assert_eq!(Piece::Bishop.to_char(Color::Black), 'b');
}
