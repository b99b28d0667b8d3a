//! Coordinate pair ingestion.
//!
//! Point files are plain text: coordinates separated by any ASCII
//! whitespace, read as alternating x and y values. Line breaks carry no
//! meaning, so `"0.1 0.2\n0.3 0.4"` and `"0.1 0.2 0.3 0.4"` parse the same.

use crate::primitives::Point2;
use num_traits::Float;
use std::io::Read;
use std::str::FromStr;
use thiserror::Error;

/// Errors from reading coordinate pairs.
#[derive(Debug, Error)]
pub enum CoordsError {
    /// The underlying reader failed.
    #[error("failed to read coordinate data")]
    Io(#[from] std::io::Error),

    /// A token could not be parsed as a floating-point number.
    #[error("invalid coordinate '{token}' at token {index}")]
    InvalidNumber {
        /// The offending token text.
        token: String,
        /// Zero-based position of the token in the input.
        index: usize,
    },

    /// The input ended with an x coordinate missing its y.
    #[error("odd number of coordinates: final x has no matching y")]
    MissingY,
}

/// Parses whitespace-separated coordinate pairs from a string.
///
/// Points come back in input order, duplicates preserved; an index built
/// from them collapses duplicates itself.
pub fn parse_coords<F>(input: &str) -> Result<Vec<Point2<F>>, CoordsError>
where
    F: Float + FromStr,
{
    let mut values = Vec::new();
    for (index, token) in input.split_ascii_whitespace().enumerate() {
        let value = token.parse::<F>().map_err(|_| CoordsError::InvalidNumber {
            token: token.to_string(),
            index,
        })?;
        values.push(value);
    }
    if values.len() % 2 != 0 {
        return Err(CoordsError::MissingY);
    }
    Ok(values
        .chunks_exact(2)
        .map(|pair| Point2::new(pair[0], pair[1]))
        .collect())
}

/// Reads coordinate pairs from any reader.
///
/// Consumes the reader to its end before parsing.
pub fn read_coords<F, R>(mut reader: R) -> Result<Vec<Point2<F>>, CoordsError>
where
    F: Float + FromStr,
    R: Read,
{
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_coords(&input)
}
