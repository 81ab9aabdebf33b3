//! Opening book conversions for PGN game collections.
//!
//! * [`epd::pgn_to_epd`] turns a `.pgn` book into a deduplicated `.epd` position list.
//! * [`split::split_by_moves`] splits a `.pgn` book into one file per game length.

pub mod chess;
pub mod cli;
pub mod epd;
pub mod error;
pub mod pgn;
pub mod split;
pub mod utils;

#[cfg(feature = "python")]
mod python;

pub use error::{Error, Result};
