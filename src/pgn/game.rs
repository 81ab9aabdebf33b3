use crate::error::Result;
use crate::utils::board::Board;
use crate::utils::color::Color;

/// Tags every exported game carries, in this order, with their placeholder values.
const SEVEN_TAG_ROSTER: [(&str, &str); 7] = [
    ("Event", "?"),
    ("Site", "?"),
    ("Date", "????.??.??"),
    ("Round", "?"),
    ("White", "?"),
    ("Black", "?"),
    ("Result", "*"),
];

/// Movetext lines are wrapped at this column on export.
const LINE_WIDTH: usize = 80;

/// Annotation attached to a point of a line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Note {
    /// Numeric annotation glyph, `$n`. Suffixes like `!?` are read as one of these.
    Nag(u8),
    Comment(String),
    /// Alternative to the move the note follows.
    Variation(Line),
}

/// A sequence of SAN moves with the notes in between.
///
/// `notes[0]` precedes the first move and `notes[i + 1]` follows `moves[i]`. Missing slots
/// hold no notes.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Line {
    pub moves: Vec<String>,
    pub notes: Vec<Vec<Note>>,
}

impl Line {
    /// Attaches `note` after the last move so far.
    pub fn note(&mut self, note: Note) {
        let slot = self.moves.len();
        if self.notes.len() <= slot {
            self.notes.resize_with(slot + 1, Vec::new);
        }
        self.notes[slot].push(note);
    }
}

/// One game of a PGN collection: its tag pairs, the SAN moves of its mainline with their
/// notes, and the termination marker that closed the movetext, if any.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PgnGame {
    pub headers: Vec<(String, String)>,
    pub moves: Vec<String>,
    /// Notes of the mainline, laid out as in [`Line::notes`].
    pub notes: Vec<Vec<Note>>,
    pub termination: Option<String>,
}

impl PgnGame {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Number of half-moves in the mainline.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }

    /// The game result: the `Result` tag if present, else the termination marker, else `*`.
    pub fn result(&self) -> &str {
        self.header("Result")
            .or(self.termination.as_deref())
            .unwrap_or("*")
    }

    /// Board in the game's starting position, honoring a `FEN` tag.
    pub fn start_board(&self) -> Result<Board> {
        match self.header("FEN") {
            Some(fen) => fen.parse(),
            None => Ok(Board::new()),
        }
    }

    /// Continues a game whose movetext never started with the tags and movetext of `next`.
    /// Notes read so far move in front of the first move of `next`.
    pub(crate) fn continued_by(mut self, next: PgnGame) -> PgnGame {
        self.headers.extend(next.headers);

        let mut notes = next.notes;
        if notes.is_empty() {
            notes.push(Vec::new());
        }
        let mut leading: Vec<Note> = self.notes.into_iter().flatten().collect();
        leading.append(&mut notes[0]);
        notes[0] = leading;

        PgnGame {
            headers: self.headers,
            moves: next.moves,
            notes,
            termination: next.termination,
        }
    }

    /// Renders the game as PGN text: the seven tag roster, remaining tags, a blank line, then
    /// numbered movetext with comments, NAGs and variations, wrapped at 80 columns and closed
    /// by the result. No trailing newline.
    pub fn to_pgn(&self) -> String {
        let mut out = String::new();

        for (name, placeholder) in SEVEN_TAG_ROSTER {
            let value = match name {
                "Result" => self.result(),
                _ => self.header(name).unwrap_or(placeholder),
            };
            push_tag(&mut out, name, value);
        }
        let roster = |name: &str| SEVEN_TAG_ROSTER.iter().any(|(tag, _)| *tag == name);
        for (name, value) in self.headers.iter().filter(|(name, _)| !roster(name)) {
            push_tag(&mut out, name, value);
        }
        out.push('\n');

        let mut line = String::new();
        for token in self.movetext_tokens() {
            if !line.is_empty() && line.len() + 1 + token.len() > LINE_WIDTH {
                out.push_str(&line);
                out.push('\n');
                line.clear();
            }
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&token);
        }
        out.push_str(&line);

        out
    }

    fn movetext_tokens(&self) -> Vec<String> {
        // an unreadable FEN tag only affects numbering here; replaying reports it.
        let numbering = match self.start_board() {
            Ok(board) => Numbering {
                white_first: board.color == Color::White,
                start: usize::from(board.full_move_clock),
            },
            Err(_) => Numbering {
                white_first: true,
                start: 1,
            },
        };

        let mut tokens = Vec::with_capacity(self.moves.len() * 3 / 2 + 1);
        push_line(&mut tokens, &self.moves, &self.notes, 0, numbering);
        tokens.push(self.result().to_string());
        tokens
    }
}

/// Maps plies counted from the starting position to move numbers.
#[derive(Clone, Copy)]
struct Numbering {
    white_first: bool,
    start: usize,
}

impl Numbering {
    /// Move number of `ply` and whether white plays it.
    fn at(self, ply: usize) -> (usize, bool) {
        let abs = ply + usize::from(!self.white_first);
        (self.start + abs / 2, abs % 2 == 0)
    }
}

fn push_line(
    tokens: &mut Vec<String>,
    moves: &[String],
    notes: &[Vec<Note>],
    first_ply: usize,
    numbering: Numbering,
) {
    // a black move carries its number after the start, a comment or a variation.
    let mut fresh = true;

    for slot in 0..=moves.len() {
        if slot > 0 {
            let (number, white) = numbering.at(first_ply + slot - 1);
            if white {
                tokens.push(format!("{number}."));
            } else if fresh {
                tokens.push(format!("{number}..."));
            }
            tokens.push(moves[slot - 1].clone());
            fresh = false;
        }

        for note in notes.get(slot).into_iter().flatten() {
            match note {
                Note::Nag(nag) => tokens.push(format!("${nag}")),
                Note::Comment(text) => {
                    let words = text.split_whitespace().map(str::to_string).collect();
                    tokens.extend(enclose(words, '{', '}'));
                    fresh = true;
                }
                Note::Variation(variation) => {
                    let mut inner = Vec::new();
                    let replaced = first_ply + slot.saturating_sub(1);
                    push_line(&mut inner, &variation.moves, &variation.notes, replaced, numbering);
                    tokens.extend(enclose(inner, '(', ')'));
                    fresh = true;
                }
            }
        }
    }
}

/// Glues `open` to the first and `close` to the last token.
fn enclose(mut tokens: Vec<String>, open: char, close: char) -> Vec<String> {
    if tokens.is_empty() {
        tokens.push(String::new());
    }
    if let Some(first) = tokens.first_mut() {
        first.insert(0, open);
    }
    if let Some(last) = tokens.last_mut() {
        last.push(close);
    }
    tokens
}

fn push_tag(out: &mut String, name: &str, value: &str) {
    let escaped = value.replace('\\', "\\\\").replace('"', "\\\"");
    out.push_str(&format!("[{name} \"{escaped}\"]\n"));
}
