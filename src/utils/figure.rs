use crate::error::Error;
use crate::utils::color::Color;
use crate::utils::coord::Coord;
use crate::utils::piece::Piece;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A piece of a given color standing on a given square.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Figure {
    pub color: Color,
    pub coord: Coord,
    pub piece: Piece,
}

impl Figure {
    pub fn to_char(self) -> char {
        self.piece.to_char(self.color)
    }

    pub fn move_to(self, coord: Coord) -> Self {
        Figure { coord, ..self }
    }
}

impl FromStr for Figure {
    type Err = Error;

    /// Reads a letter plus a square, with color given by the letter case, e.g. `Nc1` or `ng8`.
    fn from_str(figstr: &str) -> Result<Self, Self::Err> {
        let mut chars = figstr.chars();
        let letter = chars.next().ok_or_else(|| Error::Fen("empty figure".to_string()))?;
        let piece = Piece::from_letter(letter)
            .ok_or_else(|| Error::Fen(format!("unknown piece '{letter}'")))?;

        Ok(Figure {
            color: if letter.is_ascii_uppercase() { Color::White } else { Color::Black },
            coord: chars.as_str().parse()?,
            piece,
        })
    }
}

impl Display for Figure {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.to_char(), self.coord)
    }
}

#[test]
fn check_figure_from_str() {
    assert_eq!(
        "Ba3".parse::<Figure>().unwrap(),
        Figure {
            color: Color::White,
            coord: "a3".parse().unwrap(),
            piece: Piece::Bishop,
        }
    );

    let black_knight: Figure = "na3".parse().unwrap();
    assert_eq!(black_knight.color, Color::Black);
    assert_eq!(black_knight.piece, Piece::Knight);
    assert_eq!(black_knight.to_string(), "na3");

    assert!("Xa3".parse::<Figure>().is_err());
}
