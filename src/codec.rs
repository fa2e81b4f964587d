//! Six-letter share codes for coefficient vectors.
//!
//! Every group of three ternary coefficients is one base-3 digit triple,
//! which fits exactly in the 27 symbols `_A..Z`.

use crate::coefficients::{CoefficientVector, COEFFICIENT_COUNT};

pub const ALPHABET: &[u8; 27] = b"_ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CODE_LEN: usize = COEFFICIENT_COUNT / 3;

/// Serializes a coefficient vector into its six character code.
pub fn encode(coefficients: &CoefficientVector) -> String {
    coefficients
        .values()
        .chunks(3)
        .map(|group| {
            let digit = group[0] as i32 * 9 + group[1] as i32 * 3 + group[2] as i32 + 13;
            ALPHABET[digit as usize] as char
        })
        .collect()
}

/// Inverse of [`encode`]. Never fails: unknown symbols read as `_`, a short
/// input is padded with `_` and anything past the sixth symbol is ignored.
pub fn decode(code: &str) -> CoefficientVector {
    let mut values = [0i8; COEFFICIENT_COUNT];
    let mut symbols = code.chars();
    for group in values.chunks_mut(3) {
        let mut index = symbols.next().map(symbol_index).unwrap_or(0);
        for slot in group.iter_mut().rev() {
            *slot = (index % 3) as i8 - 1;
            index /= 3;
        }
    }
    CoefficientVector::new(values)
}

/// True for exactly six ASCII letters or underscores.
pub fn is_code_shaped(candidate: &str) -> bool {
    candidate.len() == CODE_LEN
        && candidate
            .bytes()
            .all(|b| b.is_ascii_alphabetic() || b == b'_')
}

/// Pulls a code out of `ABCDEF`, `#ABCDEF` or `https://host/page#ABCDEF`.
/// Returns `None` when the fragment does not have the shape of a code.
pub fn parse_fragment(raw: &str) -> Option<CoefficientVector> {
    let trimmed = raw.trim();
    let fragment = match trimmed.rfind('#') {
        Some(pos) => &trimmed[pos + 1..],
        None => trimmed,
    };
    if is_code_shaped(fragment) {
        Some(decode(fragment))
    } else {
        None
    }
}

fn symbol_index(symbol: char) -> u8 {
    let upper = symbol.to_ascii_uppercase();
    ALPHABET
        .iter()
        .position(|&a| a as char == upper)
        .map(|p| p as u8)
        .unwrap_or(0)
}
