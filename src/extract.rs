//! Heightmap extraction from Godot `.tres` resource text.
//!
//! A Godot RFLOAT image resource is a loosely structured text document.
//! Only three fields matter here: `"width"`, `"height"`, and the
//! `PackedByteArray(...)` holding the raw little-endian float32 samples.
//! Everything else in the document is ignored, so this module scans for
//! those fields directly instead of parsing the full resource format.

use std::path::Path;

use regex::Regex;
use thiserror::Error;

use crate::grid::HeightGrid;

/// Errors that can occur while extracting a heightmap from resource text.
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("\"{0}\" not found in .tres")]
    MissingField(&'static str),
    #[error("PackedByteArray data not found")]
    MissingPayload,
    #[error("byte value '{0}' is outside 0-255")]
    ByteOutOfRange(String),
    #[error("payload is {0} bytes, not a whole number of float32 values")]
    RaggedPayload(usize),
    #[error("dimensions {width}x{height} overflow the sample count")]
    DimensionOverflow { width: usize, height: usize },
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Reads a `.tres` heightmap resource file and decodes its sample grid.
pub fn extract_height_grid(path: &Path) -> Result<HeightGrid, ExtractError> {
    let text = std::fs::read_to_string(path)?;
    parse_resource_text(&text)
}

/// Decodes a heightmap grid from resource text already in memory.
///
/// The payload bytes are reinterpreted as little-endian IEEE-754 float32,
/// the byte order Godot uses when serializing the image. Big-endian
/// payloads are not detected and would decode to garbage values.
pub fn parse_resource_text(text: &str) -> Result<HeightGrid, ExtractError> {
    let width = find_dimension(text, "width")?;
    let height = find_dimension(text, "height")?;

    let bytes = parse_byte_list(find_payload(text)?)?;
    if bytes.len() % 4 != 0 {
        return Err(ExtractError::RaggedPayload(bytes.len()));
    }

    let samples: Vec<f32> = bytes
        .chunks_exact(4)
        .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let expected = width
        .checked_mul(height)
        .ok_or(ExtractError::DimensionOverflow { width, height })?;
    if samples.len() != expected {
        return Err(ExtractError::SizeMismatch {
            expected,
            actual: samples.len(),
        });
    }

    Ok(HeightGrid::new(width, height, samples))
}

/// Finds a decimal integer field like `"width": 512` in the resource text.
fn find_dimension(text: &str, name: &'static str) -> Result<usize, ExtractError> {
    let re = Regex::new(&format!(r#""{}":\s*(\d+)"#, name)).unwrap();
    let captures = re.captures(text).ok_or(ExtractError::MissingField(name))?;
    captures[1]
        .parse()
        .map_err(|_| ExtractError::MissingField(name))
}

/// Captures everything inside the first `PackedByteArray(...)` construct.
///
/// Only the first occurrence is used; a well-formed single-image resource
/// contains exactly one.
fn find_payload(text: &str) -> Result<&str, ExtractError> {
    let re = Regex::new(r"(?s)PackedByteArray\((.*?)\)").unwrap();
    let captures = re.captures(text).ok_or(ExtractError::MissingPayload)?;
    Ok(captures.get(1).ok_or(ExtractError::MissingPayload)?.as_str())
}

/// Parses the comma-separated byte list of the payload.
///
/// Tokens that are not purely decimal digits (negatives, floats, the empty
/// token left by a trailing comma) are skipped without error. A pure-digit
/// token above 255 cannot be a byte and is rejected.
fn parse_byte_list(list: &str) -> Result<Vec<u8>, ExtractError> {
    let mut bytes = Vec::new();

    for token in list.split(',') {
        let token = token.trim();
        if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let value: u8 = token
            .parse()
            .map_err(|_| ExtractError::ByteOutOfRange(token.to_owned()))?;
        bytes.push(value);
    }

    Ok(bytes)
}
