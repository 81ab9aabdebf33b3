use crate::utils::coord::Coord;
use crate::utils::piece::Piece;
use regex::Regex;
use std::str::FromStr;
use std::sync::OnceLock;

// A regular expression to decompose a SAN. Castling is handled by `Castle` instead.
const SAN_REGEX: &str = r"^(?P<Piece>[NBRQK])?(?P<RemainderFile>[a-h])?(?P<RemainderRank>[1-8])?(?P<Hit>x)?(?P<Target>[a-h][1-8])(?:=?(?P<PromotesTo>[NBRQ]))?(?:\+|#)?$";

fn san_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(SAN_REGEX).expect("SAN_REGEX is a valid pattern"))
}

/// A non-castling move decomposed from its SAN.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Draw {
    pub san: String,
    pub target: Coord,
    pub piece: Piece,
    pub is_hit: bool,
    pub promoted_piece: Option<Piece>,
    pub remainder_file: Option<char>,
    pub remainder_rank: Option<char>,
}

impl Draw {
    pub fn is_promo(&self) -> bool {
        self.promoted_piece.is_some()
    }
}

impl FromStr for Draw {
    type Err = String;

    fn from_str(san: &str) -> Result<Self, Self::Err> {
        let captures = san_regex()
            .captures(san)
            .ok_or_else(|| format!("'{san}' is not a SAN move"))?;
        let letter = |name: &str| captures.name(name).and_then(|m| m.as_str().chars().next());

        let target: Coord = captures
            .name("Target")
            .ok_or_else(|| format!("'{san}' has no target square"))?
            .as_str()
            .parse()
            .map_err(|e| format!("{e}"))?;

        Ok(Draw {
            san: san.to_string(),
            target,
            piece: letter("Piece").and_then(Piece::from_letter).unwrap_or(Piece::Pawn),
            is_hit: captures.name("Hit").is_some(),
            promoted_piece: letter("PromotesTo").and_then(Piece::from_letter),
            remainder_file: letter("RemainderFile"),
            remainder_rank: letter("RemainderRank"),
        })
    }
}

/// Castling moves. Both the letter `O` and the digit `0` spellings are accepted.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Castle {
    Short,
    Long,
}

impl Castle {
    pub fn from_san(san: &str) -> Option<Self> {
        let bare = san.trim_end_matches(['+', '#']);
        match bare {
            "O-O" | "0-0" => Some(Castle::Short),
            "O-O-O" | "0-0-0" => Some(Castle::Long),
            _ => None,
        }
    }
}
