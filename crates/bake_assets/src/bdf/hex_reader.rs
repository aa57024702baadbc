//! Hex bitmap rows and the bits inside them.

use bake_core::{BakeError, BakeResult};

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Decode a row of hex digit pairs (`"F0A1"`) into bytes.
pub fn decode_hex(row: &str) -> BakeResult<Vec<u8>> {
    let digits = row.as_bytes();
    if digits.len() % 2 != 0 {
        return Err(BakeError::Hex(row.to_string()));
    }
    digits
        .chunks_exact(2)
        .map(|pair| match (nibble(pair[0]), nibble(pair[1])) {
            (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
            _ => Err(BakeError::Hex(row.to_string())),
        })
        .collect()
}

/// Bit for pixel column `column`, most significant bit first.
#[inline]
pub fn bit_at(bytes: &[u8], column: usize) -> bool {
    bytes[column / 8] >> (7 - column % 8) & 1 == 1
}

/// The first `width` pixels of a hex row.  Padding bits past `width` in
/// the last byte are ignored; a row with fewer than `width` bits is an
/// error.
pub fn read_row(row: &str, width: usize) -> BakeResult<Vec<bool>> {
    let bytes = decode_hex(row)?;
    if bytes.len() * 8 < width {
        return Err(BakeError::BitmapRow {
            row: row.to_string(),
            bits: bytes.len() * 8,
            width,
        });
    }
    Ok((0..width).map(|j| bit_at(&bytes, j)).collect())
}
