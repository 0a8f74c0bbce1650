//! Packs ordered booleans into a short, URL-safe string.
//!
//! Each symbol of [`ALPHABET`] carries five bits, most significant first.
//! An incomplete final group is zero-filled on the low end, so decoding may
//! return up to four trailing `false` values that were never encoded.

use crate::config::{ALPHABET, GROUP_BITS, PAD};
use crate::error::CodecError;

/// Packs `bits` into symbols, five bits per symbol.
///
/// The result is never empty: an empty input yields a single [`PAD`].
pub fn encode(bits: &[bool]) -> String {
    let mut packed = String::with_capacity(bits.len().max(1).div_ceil(GROUP_BITS));

    let mut groups = bits.chunks_exact(GROUP_BITS);
    for group in &mut groups {
        packed.push(symbol(group_value(group)));
    }

    let rest = groups.remainder();
    if bits.is_empty() || !rest.is_empty() {
        packed.push(symbol(group_value(rest) << (GROUP_BITS - rest.len())));
    }

    packed
}

/// Unpacks a string produced by [`encode`].
///
/// The result always holds `5 * packed.len()` bits.
pub fn decode(packed: &str) -> Result<Vec<bool>, CodecError> {
    let mut bits = Vec::with_capacity(packed.len() * GROUP_BITS);

    for (position, symbol) in packed.chars().enumerate() {
        let value = symbol_value(symbol)
            .ok_or(CodecError::InvalidSymbol { symbol, position })?;
        let shifts = (0..GROUP_BITS).rev();
        bits.extend(shifts.map(|shift| (value >> shift) & 1 == 1));
    }

    Ok(bits)
}

/// Collapses a trailing run of two or more [`PAD`] symbols into one.
///
/// The dropped symbols only carried `false` bits, which [`decode`] consumers
/// already treat as the default.
pub fn trim_padding(mut packed: String) -> String {
    let trailing = packed.chars().rev().take_while(|&c| c == PAD).count();
    if trailing > 1 {
        packed.truncate(packed.len() - (trailing - 1) * PAD.len_utf8());
    }
    packed
}

fn group_value(group: &[bool]) -> u8 {
    group
        .iter()
        .fold(0, |value, &bit| (value << 1) | u8::from(bit))
}

fn symbol(value: u8) -> char {
    char::from(ALPHABET[usize::from(value)])
}

fn symbol_value(symbol: char) -> Option<u8> {
    match symbol {
        'a'..='z' => Some(symbol as u8 - b'a'),
        '2'..='7' => Some(symbol as u8 - b'2' + 26),
        _ => None,
    }
}
