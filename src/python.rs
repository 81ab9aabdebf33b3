use crate::error::Error;
use crate::utils::board::Board;
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;
use std::path::Path;

impl From<Error> for PyErr {
    fn from(e: Error) -> Self {
        match e {
            Error::Io(io) => PyIOError::new_err(io.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

#[pymodule]
fn pgnbook(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(pgn_to_epd, m)?)?;
    m.add_function(wrap_pyfunction!(split_by_moves, m)?)?;
    m.add_function(wrap_pyfunction!(epds, m)?)?;
    Ok(())
}

/// Converts a .pgn book into an .epd book next to it and returns the written path.
#[pyfunction]
fn pgn_to_epd(path: &str) -> PyResult<String> {
    let written = crate::epd::pgn_to_epd(Path::new(path))?;
    Ok(written.to_string_lossy().into_owned())
}

/// Splits a .pgn book by game length and returns the written paths.
#[pyfunction]
fn split_by_moves(path: &str) -> PyResult<Vec<String>> {
    let written = crate::split::split_by_moves(Path::new(path))?;
    Ok(written
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect())
}

/// EPD after each of the given SAN moves, played from the standard starting position.
#[pyfunction]
fn epds(moves: Vec<&str>) -> PyResult<Vec<String>> {
    let mut board = Board::new();
    let mut out = Vec::with_capacity(moves.len());
    for mv in moves {
        board.play_move(mv)?;
        out.push(board.to_epd());
    }

    Ok(out)
}
