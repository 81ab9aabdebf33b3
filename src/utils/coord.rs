use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A square of the board. Indexes follow FEN order: a8 is 0, h1 is 63.
#[derive(Copy, Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Coord {
    pub file: char,
    pub rank: char,

    // signed, so that distances between coords can be taken by subtraction.
    pub x: i8,
    pub y: i8,
    pub idx: i8,

    pub anti_diagonal: i8,
    pub main_diagonal: i8,
}

impl Coord {
    fn from_xy(x: i8, y: i8) -> Self {
        Coord {
            file: (b'a' + x as u8) as char,
            rank: (b'1' + y as u8) as char,
            x,
            y,
            idx: x + 8 * (7 - y),
            anti_diagonal: x + y,
            main_diagonal: 7 + y - x,
        }
    }

    pub fn from_idx(idx: i8) -> Self {
        debug_assert!((0..64).contains(&idx));
        Coord::from_xy(idx % 8, 7 - idx / 8)
    }

    /// The square `dx` files and `dy` ranks away, if it is still on the board.
    pub fn offset(self, dx: i8, dy: i8) -> Option<Self> {
        let (x, y) = (self.x + dx, self.y + dy);
        ((0..8).contains(&x) && (0..8).contains(&y)).then(|| Coord::from_xy(x, y))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Coord {
    type Err = Error;

    fn from_str(field: &str) -> Result<Self, Self::Err> {
        let mut chars = field.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(file @ 'a'..='h'), Some(rank @ '1'..='8'), None) => {
                Ok(Coord::from_xy(file as i8 - 'a' as i8, rank as i8 - '1' as i8))
            }
            _ => Err(Error::Fen(format!("invalid square '{field}'"))),
        }
    }
}

#[cfg(test)]
fn sq(s: &str) -> Coord {
    s.parse().unwrap()
}

#[test]
fn check_x_and_y() {
    assert_eq!(0, sq("a1").x);
    assert_eq!(4, sq("e4").x);
    assert_eq!(3, sq("e4").y);
    assert_eq!(6, sq("h7").y);
}

#[test]
fn check_idx() {
    assert_eq!(0, sq("a8").idx);
    assert_eq!(4, sq("e8").idx);
    assert_eq!(28, sq("e5").idx);
    assert_eq!(63, sq("h1").idx);
}

#[test]
fn check_diagonals() {
    assert_eq!(7, sq("e4").anti_diagonal);
    assert_eq!(13, sq("h7").anti_diagonal);
    assert_eq!(7, sq("a1").main_diagonal);
    assert_eq!(6, sq("h7").main_diagonal);
}

#[test]
fn check_illegal_coords() {
    assert!("a9".parse::<Coord>().is_err());
    assert!("i1".parse::<Coord>().is_err());
    assert!("1a".parse::<Coord>().is_err());
    assert!("e44".parse::<Coord>().is_err());
}

#[test]
fn check_idx_conversion() {
    for name in ["a1", "h8", "e3"] {
        assert_eq!(sq(name), Coord::from_idx(sq(name).idx));
    }
}

#[test]
fn check_offset_stays_on_board() {
    assert_eq!(sq("b3").offset(1, 2), Some(sq("c5")));
    assert_eq!(sq("h1").offset(1, 0), None);
    assert_eq!(sq("a8").offset(0, 1), None);
}
