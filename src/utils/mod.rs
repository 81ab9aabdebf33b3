//! Board model used to replay PGN mainlines and render positions as FEN or EPD.

pub mod board;
pub mod castling;
pub mod color;
pub mod coord;
pub mod draw;
pub mod figure;
pub mod piece;
