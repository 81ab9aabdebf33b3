use crate::error::{Error, Result};
use crate::utils::castling::Castling;
use crate::utils::color::Color;
use crate::utils::coord::Coord;
use crate::utils::draw::{Castle, Draw};
use crate::utils::figure::Figure;
use crate::utils::piece::Piece;
use std::str::FromStr;

// Define types for improved readability.
type Fen = String;
type Coords = Vec<Coord>;
type Figures = Vec<Figure>;
type OptFigures = Vec<Option<Figure>>;

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];
const KING_STEPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];
const ROOK_RAYS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];
const BISHOP_RAYS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

/// Replay state of one game. The fields are one-to-one derivations of the parts of a FEN.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    /// Figures indexed by `Coord::idx`, i.e. in FEN reading order.
    pub position: OptFigures,

    /// Currently active color (w/b).
    pub color: Color,

    /// Castling rights (KQkq).
    pub castling: Castling,

    /// Square behind a pawn that just advanced two ranks, if it can be captured en passant.
    pub en_passant: Option<Coord>,

    pub half_move_clock: u16,
    pub full_move_clock: u16,
}

impl Board {
    /// The board at the beginning of a standard match.
    pub fn new() -> Self {
        Board::from_str(START_FEN).expect("START_FEN is a valid FEN")
    }

    pub fn to_fen_list(&self) -> [String; 6] {
        [
            position_to_fen(&self.position),
            self.color.to_string(),
            self.castling.to_string(),
            match self.en_passant {
                None => "-".to_string(),
                Some(c) => c.to_string(),
            },
            self.half_move_clock.to_string(),
            self.full_move_clock.to_string(),
        ]
    }

    pub fn to_fen(&self) -> Fen {
        self.to_fen_list().join(" ")
    }

    /// FEN without the two move clocks. Two boards with the same EPD are the same position.
    pub fn to_epd(&self) -> String {
        self.to_fen_list()[..4].join(" ")
    }

    /// Plays a move given in SAN for the side to move.
    pub fn play_move(&mut self, san: &str) -> Result<()> {
        // Separate between castling and a "normal draw" where only one piece is moved.
        match Castle::from_san(san) {
            Some(side) => self.castle(side, san),
            None => {
                let draw = Draw::from_str(san).map_err(|_| self.illegal(san))?;
                self.play_draw(&draw)
            }
        }
    }

    fn play_draw(&mut self, draw: &Draw) -> Result<()> {
        let mover = filter_mover(draw, self).ok_or_else(|| self.illegal(&draw.san))?;
        let last_rank = match self.color {
            Color::White => 7,
            Color::Black => 0,
        };
        let promotes = match mover.piece {
            Piece::Pawn => draw.target.y == last_rank,
            _ => false,
        };
        if promotes != draw.is_promo() {
            return Err(self.illegal(&draw.san));
        }

        let captured = self.make_move(mover, draw.target, draw.promoted_piece);

        let double_step = mover.piece == Piece::Pawn && (mover.coord.y - draw.target.y).abs() == 2;
        self.en_passant = if double_step {
            mover
                .coord
                .offset(0, mover.color.forward())
                .filter(|&ep| self.en_passant_is_playable(ep))
        } else {
            None
        };

        self.half_move_clock = if captured || mover.piece == Piece::Pawn {
            0
        } else {
            self.half_move_clock.saturating_add(1)
        };
        self.finish_turn();
        Ok(())
    }

    fn castle(&mut self, side: Castle, san: &str) -> Result<()> {
        // back rank index offset: 0 for black (rank 8), 56 for white (rank 1).
        let base: usize = match self.color {
            Color::White => 56,
            Color::Black => 0,
        };
        let (rook_src, king_tgt, rook_tgt) = match side {
            Castle::Short => (base + 7, base + 6, base + 5),
            Castle::Long => (base, base + 2, base + 3),
        };
        let king_src = base + 4;

        let owned = |idx: usize, piece: Piece| {
            self.position[idx].filter(|f| f.piece == piece && f.color == self.color)
        };
        let (Some(king), Some(rook)) = (owned(king_src, Piece::King), owned(rook_src, Piece::Rook))
        else {
            return Err(self.illegal(san));
        };
        let lo = rook_src.min(king_tgt).min(rook_tgt).min(king_src);
        let hi = rook_src.max(king_tgt).max(rook_tgt).max(king_src);
        let blocked = (lo..=hi)
            .filter(|&i| i != king_src && i != rook_src)
            .any(|i| self.position[i].is_some());
        if blocked {
            return Err(self.illegal(san));
        }

        self.position[king_src] = None;
        self.position[rook_src] = None;
        self.position[king_tgt] = Some(king.move_to(Coord::from_idx(king_tgt as i8)));
        self.position[rook_tgt] = Some(rook.move_to(Coord::from_idx(rook_tgt as i8)));

        self.castling.castle(self.color);
        self.en_passant = None;
        self.half_move_clock = self.half_move_clock.saturating_add(1);
        self.finish_turn();
        Ok(())
    }

    fn finish_turn(&mut self) {
        if self.color == Color::Black {
            self.full_move_clock = self.full_move_clock.saturating_add(1);
        }
        self.color = self.color.opponent();
    }

    /// Moves `mover` to `target` without any legality checks. Returns whether something was
    /// captured, including en passant.
    fn make_move(&mut self, mover: Figure, target: Coord, promotion: Option<Piece>) -> bool {
        self.position[mover.coord.idx as usize] = None;

        let mut captured = false;
        if let Some(victim) = self.position[target.idx as usize] {
            captured = true;
            if victim.piece == Piece::Rook {
                self.castling.clear_square(target);
            }
        } else if mover.piece == Piece::Pawn && Some(target) == self.en_passant {
            if let Some(behind) = target.offset(0, -mover.color.forward()) {
                self.position[behind.idx as usize] = None;
                captured = true;
            }
        }

        let landed = match promotion {
            Some(piece) => Figure { piece, ..mover.move_to(target) },
            None => mover.move_to(target),
        };
        self.position[target.idx as usize] = Some(landed);
        self.castling.update(mover);
        captured
    }

    /// Whether the side to move after a double step could really capture on `ep`.
    fn en_passant_is_playable(&self, ep: Coord) -> bool {
        let capturer = self.color.opponent();
        let mut trial = self.clone();
        trial.color = capturer;
        trial.en_passant = Some(ep);

        [-1, 1]
            .into_iter()
            .filter_map(|dx| ep.offset(dx, -capturer.forward()))
            .filter_map(|from| self.position[from.idx as usize])
            .filter(|f| f.piece == Piece::Pawn && f.color == capturer)
            .any(|pawn| !trial.leaves_king_in_check(pawn, ep))
    }

    fn leaves_king_in_check(&self, mover: Figure, target: Coord) -> bool {
        let mut alt = self.clone();
        alt.make_move(mover, target, None);
        match alt.find_king(mover.color) {
            Some(king) => alt.is_attacked(king.coord, mover.color.opponent()),
            None => false,
        }
    }

    fn find_king(&self, color: Color) -> Option<Figure> {
        self.figures()
            .find(|f| f.piece == Piece::King && f.color == color)
    }

    fn is_attacked(&self, coord: Coord, by: Color) -> bool {
        self.figures().filter(|f| f.color == by).any(|f| match f.piece {
            Piece::Pawn => [-1, 1]
                .into_iter()
                .any(|dx| f.coord.offset(dx, f.color.forward()) == Some(coord)),
            _ => get_moves(&f, self).contains(&coord),
        })
    }

    fn figures(&self) -> impl Iterator<Item = Figure> + '_ {
        self.position.iter().filter_map(|f| *f)
    }

    fn at(&self, coord: Coord) -> Option<Figure> {
        self.position[coord.idx as usize]
    }

    fn illegal(&self, san: &str) -> Error {
        Error::IllegalMove {
            san: san.to_string(),
            fen: self.to_fen(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(fen: &str) -> Result<Self> {
        // Split FEN and assign according variables. The two clocks are optional.
        let mut parts = fen.split_whitespace();
        let mut field = |name: &str| {
            parts
                .next()
                .ok_or_else(|| Error::Fen(format!("'{fen}' has no {name} field")))
        };
        let position = fen_to_position(field("placement")?)?;

        let color_str = field("side to move")?;
        let mut letters = color_str.chars();
        let color = match (letters.next(), letters.next()) {
            (Some(c), None) => Color::try_from(c)?,
            _ => return Err(Error::Fen(format!("invalid side to move '{color_str}'"))),
        };
        let mut castling = Castling::from(field("castling")?);
        castling.mask(&position);
        let en_passant = match field("en passant")? {
            "-" => None,
            square => Some(square.parse::<Coord>()?),
        };

        let mut clock = |name: &str, default: u16| match parts.next() {
            None => Ok(default),
            Some(s) => s
                .parse::<u16>()
                .map_err(|_| Error::Fen(format!("invalid {name} '{s}'"))),
        };
        let half_move_clock = clock("half-move clock", 0)?;
        let full_move_clock = clock("full-move number", 1)?;

        Ok(Board {
            position,
            color,
            castling,
            en_passant,
            half_move_clock,
            full_move_clock,
        })
    }
}

//- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
fn fen_to_position(placement: &str) -> Result<OptFigures> {
    let invalid = || Error::Fen(format!("invalid piece placement '{placement}'"));
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid());
    }

    let mut figures: OptFigures = vec![None; 64];
    for (row, rank) in ranks.into_iter().enumerate() {
        let mut col: usize = 0;
        for l in rank.chars() {
            if let Some(skip) = l.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece = Piece::from_letter(l).ok_or_else(invalid)?;
            if col >= 8 {
                return Err(invalid());
            }
            let idx = row * 8 + col;
            figures[idx] = Some(Figure {
                color: if l.is_ascii_lowercase() { Color::Black } else { Color::White },
                piece,
                coord: Coord::from_idx(idx as i8),
            });
            col += 1;
        }
        if col != 8 {
            return Err(invalid());
        }
    }

    Ok(figures)
}

fn position_to_fen(position: &[Option<Figure>]) -> Fen {
    let mut fen = String::new();
    for (r, rank) in position.chunks(8).enumerate() {
        if r > 0 {
            fen.push('/');
        }
        let mut spacer: u32 = 0;
        for square in rank {
            match square {
                Some(figure) => {
                    if spacer > 0 {
                        fen.extend(char::from_digit(spacer, 10));
                        spacer = 0;
                    }
                    fen.push(figure.to_char());
                }
                None => spacer += 1,
            }
        }
        if spacer > 0 {
            fen.extend(char::from_digit(spacer, 10));
        }
    }

    fen
}

/// Narrows the figures of the side to move down to the one that plays `draw`: piece type
/// first, then the SAN disambiguation, then reachability of the target, and finally pins.
fn filter_mover(draw: &Draw, board: &Board) -> Option<Figure> {
    let figs: Figures = board
        .figures()
        .filter(|f| f.color == board.color && f.piece == draw.piece)
        .filter(|f| draw.remainder_file.map_or(true, |file| f.coord.file == file))
        .filter(|f| draw.remainder_rank.map_or(true, |rank| f.coord.rank == rank))
        .collect();

    let figs: Figures = figs
        .into_iter()
        .filter(|f| {
            if draw.is_hit {
                get_hits(f, board).contains(&draw.target)
            } else {
                get_moves(f, board).contains(&draw.target)
            }
        })
        .collect();

    match figs.len() {
        0 => None,
        1 => figs.first().copied(),
        _ => filter_on_pins(figs, draw, board),
    }
}

fn filter_on_pins(figures: Figures, draw: &Draw, board: &Board) -> Option<Figure> {
    figures
        .into_iter()
        .find(|fig| !board.leaves_king_in_check(*fig, draw.target))
}

/// Squares a figure can move to. For pawns these are the pushes, for all other pieces the
/// moves include captures.
fn get_moves(fig: &Figure, board: &Board) -> Coords {
    match fig.piece {
        Piece::Pawn => get_pawn_moves(fig, board),
        Piece::Knight => get_steps(fig, board, &KNIGHT_JUMPS),
        Piece::King => get_steps(fig, board, &KING_STEPS),
        Piece::Rook => get_rays(fig, board, &ROOK_RAYS),
        Piece::Bishop => get_rays(fig, board, &BISHOP_RAYS),
        Piece::Queen => {
            // the queen unions the moves from bishop and rook.
            let mut coords = get_rays(fig, board, &BISHOP_RAYS);
            coords.extend(get_rays(fig, board, &ROOK_RAYS));
            coords
        }
    }
}

fn get_hits(fig: &Figure, board: &Board) -> Coords {
    match fig.piece {
        Piece::Pawn => get_pawn_hits(fig, board),
        _ => get_moves(fig, board),
    }
}

fn get_pawn_hits(fig: &Figure, board: &Board) -> Coords {
    [-1, 1]
        .into_iter()
        .filter_map(|dx| fig.coord.offset(dx, fig.color.forward()))
        .filter(|&target| match board.at(target) {
            Some(other) => other.color != fig.color,
            None => board.en_passant == Some(target),
        })
        .collect()
}

fn get_pawn_moves(fig: &Figure, board: &Board) -> Coords {
    let mut coords: Coords = vec![];
    let forward = fig.color.forward();

    // the square in front must be free for the double step as well.
    if let Some(one) = fig.coord.offset(0, forward).filter(|&c| board.at(c).is_none()) {
        coords.push(one);
        if fig.coord.y == fig.color.pawn_rank() {
            if let Some(two) = fig.coord.offset(0, 2 * forward).filter(|&c| board.at(c).is_none()) {
                coords.push(two);
            }
        }
    }

    coords
}

fn get_steps(fig: &Figure, board: &Board, steps: &[(i8, i8)]) -> Coords {
    steps
        .iter()
        .filter_map(|&(dx, dy)| fig.coord.offset(dx, dy))
        .filter(|&c| board.at(c).map_or(true, |other| other.color != fig.color))
        .collect()
}

fn get_rays(fig: &Figure, board: &Board, rays: &[(i8, i8)]) -> Coords {
    let mut coords: Coords = vec![];
    for &(dx, dy) in rays {
        let mut next = fig.coord.offset(dx, dy);
        while let Some(c) = next {
            match board.at(c) {
                None => coords.push(c),
                Some(other) => {
                    if other.color != fig.color {
                        coords.push(c);
                    }
                    break;
                }
            }
            next = c.offset(dx, dy);
        }
    }

    coords
}

//- - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - - -
#[cfg(test)]
mod tests {
    use super::*;

    fn coords(names: &[&str]) -> Coords {
        names.iter().map(|n| n.parse::<Coord>().unwrap()).collect()
    }

    fn fig(s: &str) -> Figure {
        s.parse().unwrap()
    }

    fn play(board: &mut Board, moves: &[&str]) {
        for mv in moves {
            board.play_move(mv).unwrap();
        }
    }

    #[test]
    fn check_moves_in_new_game() {
        let board = Board::new();
        assert_eq!(get_moves(&fig("Pa2"), &board), coords(&["a3", "a4"]));
        assert_eq!(get_moves(&fig("pg7"), &board), coords(&["g6", "g5"]));
        assert_eq!(get_moves(&fig("Nb1"), &board), coords(&["c3", "a3"]));
        assert!(get_moves(&fig("Bc1"), &board).is_empty());
        assert!(get_moves(&fig("rh8"), &board).is_empty());
        assert!(get_moves(&fig("Ke1"), &board).is_empty());
    }

    #[test]
    fn check_rays_stop_at_blockers() {
        let board = Board::new();
        assert_eq!(
            get_moves(&fig("Ba3"), &board),
            coords(&["b4", "c5", "d6", "e7"])
        );
        assert_eq!(
            get_moves(&fig("re4"), &board),
            coords(&["e5", "e6", "f4", "g4", "h4", "e3", "e2", "d4", "c4", "b4", "a4"])
        );
    }

    #[test]
    fn king_steps_do_not_wrap_around_the_board() {
        let board: Board = "8/8/8/8/8/8/8/K6k w - - 0 1".parse().unwrap();
        assert_eq!(
            get_moves(&fig("Ka1"), &board),
            coords(&["a2", "b2", "b1"])
        );
    }

    #[test]
    fn check_board_from_fen_base() {
        let board: Board = START_FEN.parse().unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(board.to_fen(), START_FEN);
    }

    #[test]
    /// Final position from https://lichess.org/U1N9Qa74/black
    fn check_fen_conversion() {
        let fen = "5rk1/1b2n1pp/4R3/1p3pN1/2pP4/r5PP/P4P2/2RQ2Kq w - - 1 24";
        let board: Board = fen.parse().unwrap();

        assert_eq!(board.color, Color::White);
        assert_eq!(board.castling, Castling::none());
        assert_eq!(board.en_passant, None);
        assert_eq!(board.half_move_clock, 1);
        assert_eq!(board.full_move_clock, 24);
        assert_eq!(board.position[coords(&["h1"])[0].idx as usize], Some(fig("qh1")));
        assert_eq!(board.to_fen(), fen);
    }

    #[test]
    fn missing_clocks_default() {
        let board: Board = "8/8/8/8/8/8/8/K6k b - -".parse().unwrap();
        assert_eq!(board.to_fen(), "8/8/8/8/8/8/8/K6k b - - 0 1");
    }

    #[test]
    fn rejects_broken_fens() {
        for fen in [
            "8/8/8/8/8/8/8 w - - 0 1",
            "9/8/8/8/8/8/8/8 w - - 0 1",
            "8/8/8/8/8/8/8/7X w - - 0 1",
            "8/8/8/8/8/8/8/8 x - - 0 1",
            "8/8/8/8/8/8/8/8 w - e9 0 1",
            "8/8/8/8/8/8/8/8 w -",
        ] {
            assert!(fen.parse::<Board>().is_err(), "{fen}");
        }
    }

    #[test]
    fn check_filter_mover_detection() {
        let board = Board::new();
        let draw: Draw = "Nc3".parse().unwrap();
        assert_eq!(filter_mover(&draw, &board), Some(fig("Nb1")));

        let board: Board = "k7/8/2q3q1/1PP5/8/8/NR6/KN1N3B w - - 0 1".parse().unwrap();
        let draw: Draw = "bxc6".parse().unwrap();
        assert_eq!(filter_mover(&draw, &board), Some(fig("Pb5")));
        let draw: Draw = "b6".parse().unwrap();
        assert_eq!(filter_mover(&draw, &board), Some(fig("Pb5")));
    }

    #[test]
    fn check_mover_detection_with_remainder_and_pins() {
        let board: Board = "k7/8/q1q3q1/1PP5/8/8/RR6/KN5B b - - 0 1".parse().unwrap();

        let draw: Draw = "Qgg2".parse().unwrap();
        assert_eq!(filter_mover(&draw, &board), Some(fig("qg6")));

        // the queen on c6 is pinned by the bishop on h1.
        let draw: Draw = "Qd6".parse().unwrap();
        assert_eq!(filter_mover(&draw, &board), Some(fig("qg6")));

        // ... but may still move along the pin.
        let draw: Draw = "Qd5".parse().unwrap();
        assert_eq!(filter_mover(&draw, &board), Some(fig("qc6")));

        // the a6 queen shields the king from the a2 rook and c6 is pinned, so neither takes on b5.
        let draw: Draw = "Qxb5".parse().unwrap();
        assert_eq!(filter_mover(&draw, &board), None);
    }

    #[test]
    fn castling_rights_need_king_and_rook_at_home() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w KQkq - 0 1".parse().unwrap();
        assert_eq!(board.castling, Castling::none());

        let board: Board = "r3k3/8/8/8/8/8/8/4K2R w KQkq - 0 1".parse().unwrap();
        assert_eq!(board.to_epd(), "r3k3/8/8/8/8/8/8/4K2R w Kq -");
    }

    #[test]
    fn check_castling() {
        let mut board: Board = "4k2r/8/8/8/8/8/8/R3K3 w Qk - 0 1".parse().unwrap();
        play(&mut board, &["O-O-O", "O-O"]);
        assert_eq!(board.to_fen(), "5rk1/8/8/8/8/8/8/2KR4 w - - 2 2");
    }

    #[test]
    fn castling_through_pieces_is_illegal() {
        let mut board = Board::new();
        assert!(matches!(
            board.play_move("O-O"),
            Err(Error::IllegalMove { .. })
        ));
    }

    #[test]
    fn capturing_a_rook_drops_the_castling_right() {
        let mut board: Board = "r3k2r/8/8/8/8/8/6B1/R3K2R w KQkq - 0 1".parse().unwrap();
        board.play_move("Bxa8+").unwrap();
        assert_eq!(board.castling.to_string(), "KQk");
    }

    #[test]
    fn en_passant_square_only_when_capturable() {
        let mut board = Board::new();
        board.play_move("e4").unwrap();
        assert_eq!(board.to_epd(), "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq -");

        play(&mut board, &["d5", "e5", "f5"]);
        assert_eq!(board.en_passant, Some("f6".parse::<Coord>().unwrap()));
        board.play_move("exf6").unwrap();
        assert_eq!(
            board.to_fen(),
            "rnbqkbnr/ppp1p1pp/5P2/3p4/8/8/PPPP1PPP/RNBQKBNR b KQkq - 0 3"
        );
    }

    #[test]
    fn pinned_en_passant_capturer_does_not_set_the_square() {
        // the e5 pawn is pinned along the fifth rank.
        let mut board: Board = "8/5p2/8/K3P2r/8/8/8/7k b - - 0 1".parse().unwrap();
        board.play_move("f5").unwrap();
        assert_eq!(board.en_passant, None);
    }

    #[test]
    fn promotion() {
        let mut board: Board = "8/4P3/8/8/8/8/8/K6k w - - 0 1".parse().unwrap();
        assert!(board.clone().play_move("e8").is_err());
        board.play_move("e8=N").unwrap();
        assert_eq!(board.to_epd(), "4N3/8/8/8/8/8/8/K6k b - -");
    }

    #[test]
    fn only_pawns_promote() {
        let mut board = Board::new();
        assert!(matches!(
            board.play_move("Nf3=Q"),
            Err(Error::IllegalMove { .. })
        ));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn clocks_saturate() {
        let mut board: Board = "4k3/8/8/8/8/8/8/4K3 b - - 65535 65535".parse().unwrap();
        board.play_move("Kd7").unwrap();
        assert_eq!(board.half_move_clock, u16::MAX);
        assert_eq!(board.full_move_clock, u16::MAX);
    }

    #[test]
    fn unknown_moves_are_illegal() {
        let mut board = Board::new();
        for san in ["e5", "Nd4", "Bb5", "xyz"] {
            assert!(board.play_move(san).is_err(), "{san}");
        }
        assert_eq!(board, Board::new());
    }

    #[test]
    /// https://lichess.org/hWMPaRcI
    fn check_playing_games_pt1() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                "c4", "c5", "Nc3", "e5", "e3", "Nf6", "Nf3", "Nc6", "b3", "e4", "Ng1", "d6", "d4",
                "Bg4", "Qd2", "Bd7", "dxc5", "dxc5", "Nd5", "Nxd5", "cxd5", "Nb4", "Qc3", "b6",
                "Qc4", "Bc8", "a3", "Na6", "Qxe4+", "Be7", "Bb2", "Bb7", "Rd1", "O-O", "Bc4",
                "Nc7", "Bd3", "g6", "Bc4", "Bf6", "Bxf6", "Qxf6", "Ne2", "Rae8", "Qg4", "Rd8",
                "e4", "Bc8", "Qf4", "Qxf4", "Nxf4", "b5", "d6", "Na6", "Bxb5", "Nb8", "e5", "a6",
                "Bc4", "Nc6", "O-O", "Nxe5", "Rfe1", "Nxc4", "bxc4", "Bb7", "Re7", "Bc6", "Ra7",
                "Rfe8", "h3", "Ba4", "Rd2", "Re1+", "Kh2", "Re4", "Rxa6", "Rxc4", "g3", "Rc2",
                "Rxc2", "Bxc2", "a4", "c4", "Rc6", "Bb3", "a5", "Bd1", "a6", "g5", "Ne2", "Bxe2",
                "a7", "Bf3", "Rb6", "Ra8", "Rb8+", "Rxb8", "axb8=Q+", "Kg7", "d7", "g4", "d8=Q",
                "gxh3", "Qd4+", "f6", "Qb7+", "Kg6", "Qxf3", "Kf7", "Qdxf6+", "Ke8", "Qe4+", "Kd7",
                "Qfe6+", "Kc7", "Qd4", "Kb7", "Qed5+", "Kc7", "Q4xc4+", "Kb6",
            ],
        );

        assert_eq!(board.to_fen(), "8/7p/1k6/3Q4/2Q5/6Pp/5P1K/8 w - - 1 62");
    }

    /// https://lichess.org/9opx3qh7
    #[test]
    fn check_playing_games_pt4() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                "d4", "e5", "dxe5", "d6", "exd6", "Bxd6", "Nf3", "Nf6", "Nc3", "O-O", "a3", "Nc6",
                "e3", "a6", "Be2", "h6", "O-O", "Ne5", "Bd2", "Nxf3+", "Bxf3", "Be5", "Rc1", "c6",
                "Qe2", "Qd6", "Rfd1", "Bxh2+", "Kh1", "Be5", "e4", "Bxc3", "Bxc3", "Qe6", "Rd3",
                "Bd7", "Rcd1", "Rad8", "Bxf6", "gxf6", "Rd6", "Qe7", "Rd1d2", "Be6", "Rxd8",
                "Rxd8", "Rxd8+", "Qxd8", "c4", "Qd4", "c5", "Qxc5", "Qd2", "f5", "exf5", "Bxf5",
                "Qxh6", "Bg6", "Be4", "Bxe4", "Qh4", "Bg6", "Qd8+", "Kg7", "Qc7", "b5", "b4",
                "Qc1+", "Kh2", "Qxa3", "Qe5+", "Kg8", "Qe8+", "Kg7", "Qxc6", "Qxb4", "Qxa6",
                "Qh4+", "Kg1", "b4", "Qa1+", "Qf6", "Qa4", "Qc3", "f3", "b3", "Qa3", "Qc2", "Kh2",
                "b2",
            ],
        );

        assert_eq!(board.to_fen(), "8/5pk1/6b1/8/8/Q4P2/1pq3PK/8 w - - 0 46");
    }

    ///https://lichess.org/qdwt3dtw
    #[test]
    fn check_playing_games_pt6() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                "e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "Nc3", "d5", "exd5", "Bf5", "dxc6", "Rb8",
                "Ng5", "Qd4", "Bxf7+", "Kd8", "Ne6+", "Bxe6", "Bxe6", "bxc6", "d3", "Qc5", "Bg5",
                "Qe7", "Bc4", "Rb4", "b3", "h6", "Bd2", "Rxc4", "bxc4", "Qe6", "Rb1", "Qc8", "f3",
                "Bc5", "Na4", "Bd4", "Bb4", "c5", "Bxc5", "Kd7", "Bxd4", "Ke8", "Bxe5", "Ng4",
                "Bxg7", "Kf7", "Bxh8", "Qxh8", "fxg4", "Qf6", "Qf3", "Ke7", "Qxf6+", "Kxf6",
                "O-O+",
            ],
        );

        assert_eq!(board.to_fen(), "8/p1p5/5k1p/8/N1P3P1/3P4/P1P3PP/1R3RK1 b - - 1 29");
    }

    #[test]
    /// https://lichess.org/tGpzk7yJ
    fn check_playing_games_pt8() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                "e4", "e5", "f4", "exf4", "Nf3", "Nf6", "e5", "Nh5", "Bc4", "g5", "h4", "Ng3",
                "Nxg5", "Nxh1", "Bxf7+", "Ke7", "Nc3", "c6", "d4", "h6", "Qh5", "Bg7", "Nge4",
                "Qf8", "Nd6", "Na6", "Bxf4", "Nb4", "Kd2", "Nf2", "Rf1", "Rh7", "Rxf2", "Bh8",
                "Bg5+", "hxg5", "Qxg5+",
            ],
        );

        assert_eq!(
            board.to_fen(),
            "r1b2q1b/pp1pkB1r/2pN4/4P1Q1/1n1P3P/2N5/PPPK1RP1/8 b - - 0 19"
        );
    }

    #[test]
    /// https://lichess.org/kz3z6c79
    fn check_playing_games_pt10() {
        let mut board = Board::new();
        play(
            &mut board,
            &[
                "d4", "Nf6", "c4", "e6", "Nc3", "b6", "e4", "Bb4", "e5", "Ng8", "Nf3", "Ne7",
                "Bg5", "h6", "Bh4", "Bb7", "a3", "Bxc3+", "bxc3", "g5", "Bg3", "Nf5", "Bd3",
                "Nxg3", "hxg3", "Na6", "Bc2", "Qe7", "Qd2", "O-O-O", "a4", "c5", "O-O", "Nc7", "a5",
                "b5", "cxb5", "Nxb5", "c4", "Nc7", "a6", "Bc6", "Ba4", "Be4", "Qa5", "Na8", "dxc5",
                "h5", "Nd4", "h4", "Nb5", "d5", "cxd6", "Qd7", "Nd4", "Qc7", "dxc7", "Rxd4", "gxh4",
                "Rxh4", "Rac1", "Nxc7", "Qc5", "Ba8", "Qxa7", "Rh8", "Qxd4",
            ],
        );

        assert_eq!(
            board.to_fen(),
            "b1k4r/2n2p2/P3p3/4P1p1/B1PQ4/8/5PP1/2R2RK1 b - - 0 34"
        );
    }
}
