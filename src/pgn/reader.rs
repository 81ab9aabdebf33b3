use crate::error::{Error, Result};
use crate::pgn::game::{Line, Note, PgnGame};
use log::debug;
use pgn_reader::{BufferedReader, Nag, Outcome, RawComment, RawHeader, SanPlus, Skip, Visitor};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Streams games out of PGN text, one `read_game` call per game.
///
/// Variations, comments and NAGs are kept as notes next to the mainline.
pub struct PgnReader<R> {
    inner: BufferedReader<R>,
    builder: GameBuilder,
    games: usize,
}

impl PgnReader<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(PgnReader::new(File::open(path)?))
    }
}

impl<R: Read> PgnReader<R> {
    pub fn new(inner: R) -> Self {
        PgnReader {
            inner: BufferedReader::new(inner),
            builder: GameBuilder::default(),
            games: 0,
        }
    }

    /// Reads the next game. Returns `Ok(None)` once the input holds no further game.
    ///
    /// A fragment without moves and without a result, such as a tag section cut by a blank
    /// line or a comment in front of the first game, is joined with the fragment after it.
    /// A trailing fragment is only returned if it has tags.
    pub fn read_game(&mut self) -> Result<Option<PgnGame>> {
        let mut open: Option<PgnGame> = None;

        loop {
            self.builder.game = self.games + 1;
            let fragment = match self.inner.read_game(&mut self.builder)? {
                Some(fragment) => fragment?,
                None => {
                    let Some(game) = open.filter(|g| !g.headers.is_empty()) else {
                        return Ok(None);
                    };
                    self.games += 1;
                    return Ok(Some(game));
                }
            };

            let game = match open.take() {
                Some(head) => {
                    debug!("game {}: joining a fragment without movetext", self.games + 1);
                    head.continued_by(fragment)
                }
                None => fragment,
            };
            if game.moves.is_empty() && game.termination.is_none() {
                open = Some(game);
                continue;
            }

            self.games += 1;
            return Ok(Some(game));
        }
    }
}

/// Collects the callbacks of one game. `lines` is the stack of open variations on top of
/// the mainline.
#[derive(Default)]
struct GameBuilder {
    game: usize,
    headers: Vec<(String, String)>,
    lines: Vec<Line>,
    termination: Option<String>,
    error: Option<String>,
}

impl GameBuilder {
    fn line(&mut self) -> &mut Line {
        if self.lines.is_empty() {
            self.lines.push(Line::default());
        }
        let top = self.lines.len() - 1;
        &mut self.lines[top]
    }

    fn close_variation(&mut self) {
        if self.lines.len() > 1 {
            if let Some(variation) = self.lines.pop() {
                self.line().note(Note::Variation(variation));
            }
        }
    }

    /// Decodes `bytes`, remembering the first failure for `end_game`.
    fn text(&mut self, what: &str, bytes: &[u8]) -> Option<String> {
        match std::str::from_utf8(bytes) {
            Ok(text) => Some(text.to_string()),
            Err(_) => {
                self.fail(format!("{what} is not valid UTF-8"));
                None
            }
        }
    }

    fn fail(&mut self, message: String) {
        self.error.get_or_insert(message);
    }
}

impl Visitor for GameBuilder {
    type Result = Result<PgnGame>;

    fn begin_game(&mut self) {
        self.headers.clear();
        self.lines = vec![Line::default()];
        self.termination = None;
        self.error = None;
    }

    fn header(&mut self, key: &[u8], value: RawHeader<'_>) {
        let Some(name) = self.text("tag name", key) else {
            return;
        };
        match value.decode_utf8() {
            Ok(value) => self.headers.push((name, value.into_owned())),
            Err(_) => self.fail(format!("value of tag {name} is not valid UTF-8")),
        }
    }

    fn san(&mut self, san_plus: SanPlus) {
        self.line().moves.push(san_plus.to_string());
    }

    fn nag(&mut self, nag: Nag) {
        self.line().note(Note::Nag(nag.0));
    }

    fn comment(&mut self, comment: RawComment<'_>) {
        if let Some(text) = self.text("comment", comment.as_bytes()) {
            self.line().note(Note::Comment(text.trim().to_string()));
        }
    }

    fn begin_variation(&mut self) -> Skip {
        self.lines.push(Line::default());
        Skip(false)
    }

    fn end_variation(&mut self) {
        self.close_variation();
    }

    fn outcome(&mut self, outcome: Option<Outcome>) {
        self.termination = Some(outcome.map_or_else(|| "*".to_string(), |o| o.to_string()));
    }

    fn end_game(&mut self) -> Self::Result {
        // variations left open at the end of the game still belong to it.
        while self.lines.len() > 1 {
            self.close_variation();
        }
        if let Some(message) = self.error.take() {
            return Err(Error::Parse {
                game: self.game,
                message,
            });
        }

        let mainline = self.lines.pop().unwrap_or_default();
        Ok(PgnGame {
            headers: std::mem::take(&mut self.headers),
            moves: mainline.moves,
            notes: mainline.notes,
            termination: self.termination.take(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_all(pgn: &str) -> Result<Vec<PgnGame>> {
        read_bytes(pgn.as_bytes())
    }

    fn read_bytes(pgn: &[u8]) -> Result<Vec<PgnGame>> {
        let mut reader = PgnReader::new(pgn);
        let mut games = Vec::new();
        while let Some(game) = reader.read_game()? {
            games.push(game);
        }
        Ok(games)
    }

    #[test]
    fn reads_tags_and_mainline() {
        let games = read_all(
            "[Event \"Test\"]\n[White \"A \\\"B\\\" C\"]\n\n1. e4 e5 2. Nf3 Nc6 1-0\n",
        )
        .unwrap();

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].header("Event"), Some("Test"));
        assert_eq!(games[0].header("White"), Some("A \"B\" C"));
        assert_eq!(games[0].moves, ["e4", "e5", "Nf3", "Nc6"]);
        assert_eq!(games[0].termination.as_deref(), Some("1-0"));
    }

    #[test]
    fn mainline_skips_comments_variations_and_annotations() {
        let games = read_all(
            "[Event \"x\"]\n\n\
             1.e4 {best by test\n spanning lines} e5!? (1...c5 2.Nf3 (2.c3) d6) 2.Nf3 $1 ; rest\n\
             2...Nc6?! 3.Bb5 a6 *\n",
        )
        .unwrap();

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].moves, ["e4", "e5", "Nf3", "Nc6", "Bb5", "a6"]);
        assert_eq!(games[0].termination.as_deref(), Some("*"));
    }

    #[test]
    fn notes_survive_export() {
        let games =
            read_all("[Event \"x\"]\n\n1. e4 {best by test} e5 $1 (1... c5 2. Nf3) 2. Nf3 *\n")
                .unwrap();
        let pgn = games[0].to_pgn();

        assert!(
            pgn.ends_with("\n\n1. e4 {best by test} 1... e5 $1 (1... c5 2. Nf3) 2. Nf3 *"),
            "{pgn}"
        );
        let again = read_all(&pgn).unwrap();
        assert_eq!(again[0].moves, games[0].moves);
        assert_eq!(again[0].notes, games[0].notes);
    }

    #[test]
    fn reads_consecutive_games() {
        let games = read_all(
            "[Event \"one\"]\n\n1. e4 e5 2. Nf3 1-0\n\n[Event \"two\"]\n\n1. d4 d5 0-1\n",
        )
        .unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].ply_count(), 3);
        assert_eq!(games[1].ply_count(), 2);
        assert_eq!(games[1].header("Event"), Some("two"));
    }

    #[test]
    fn games_need_no_blank_line_between_them() {
        let games = read_all("[Event \"a\"]\n1. e4 *\n[Event \"b\"]\n1. d4 *\n[Event \"c\"]\n*\n")
            .unwrap();

        let events: Vec<_> = games.iter().map(|g| g.header("Event").unwrap()).collect();
        assert_eq!(events, ["a", "b", "c"]);
    }

    #[test]
    fn game_without_termination_ends_at_next_tags_or_eof() {
        let games = read_all("[Event \"a\"]\n1. e4\n[Event \"b\"]\n1. d4 d5\n").unwrap();

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].moves, ["e4"]);
        assert_eq!(games[0].termination, None);
        assert_eq!(games[1].moves, ["d4", "d5"]);
    }

    #[test]
    fn comment_after_the_result_stays_with_the_game() {
        let games = read_all("[Event \"a\"]\n\n1. e4 e5 1-0 {White resigns}\n").unwrap();

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].moves, ["e4", "e5"]);
        assert_eq!(games[0].result(), "1-0");
        assert!(games[0].to_pgn().contains("{White resigns}"));
    }

    #[test]
    fn blank_line_inside_the_tag_section() {
        let games = read_all("[Event \"a\"]\n\n[Site \"b\"]\n\n1. e4 e5 *").unwrap();

        assert_eq!(games.len(), 1);
        assert_eq!(games[0].header("Event"), Some("a"));
        assert_eq!(games[0].header("Site"), Some("b"));
        assert_eq!(games[0].moves, ["e4", "e5"]);
    }

    #[test]
    fn comment_in_front_of_the_first_game() {
        for pgn in [
            "; exported by tool\n[Event \"a\"]\n\n1. e4 *\n",
            "{exported by tool}\n[Event \"a\"]\n\n1. e4 *\n",
        ] {
            let games = read_all(pgn).unwrap();
            assert_eq!(games.len(), 1, "{pgn}");
            assert_eq!(games[0].header("Event"), Some("a"));
            assert_eq!(games[0].moves, ["e4"]);
        }
    }

    #[test]
    fn headers_only_game_has_no_moves() {
        let games = read_all("[Event \"empty\"]\n[Result \"*\"]\n\n*\n").unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].ply_count(), 0);
    }

    #[test]
    fn empty_input_has_no_games() {
        assert!(read_all("").unwrap().is_empty());
        assert!(read_all("\n\n% escaped\n\n").unwrap().is_empty());
        assert!(read_all("{just a comment}\n").unwrap().is_empty());
    }

    #[test]
    fn castling_and_promotion_tokens() {
        let games = read_all("1. O-O O-O-O 2. e8=Q+ bxa1=N# 3. Rd1d2 *").unwrap();
        assert_eq!(games[0].moves, ["O-O", "O-O-O", "e8=Q+", "bxa1=N#", "Rd1d2"]);
    }

    #[test]
    fn undecodable_text_names_the_game() {
        let pgn = b"[Event \"a\"]\n\n1. e4 *\n\n[Event \"\xff\"]\n\n1. d4 *\n";
        match read_bytes(pgn) {
            Err(Error::Parse { game, .. }) => assert_eq!(game, 2),
            other => panic!("unexpected {other:?}"),
        }
    }
}
