//! Reading and writing PGN game collections.

pub mod game;
pub mod reader;

pub use game::PgnGame;
pub use reader::PgnReader;
