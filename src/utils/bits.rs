//! LSB-first bit addressing over byte buffers.
//!
//! Bit `i` of a byte sequence is bit `i % 8` (counting from the least
//! significant bit) of byte `i / 8`. Key and IV expansion and keystream
//! packing both use this convention, so it fixes how wire bytes map to
//! register bits and how keystream bits map back to bytes.

/// Reads bit `bit_idx` of `buf` as 0 or 1.
///
/// # Panics
/// Panics if `bit_idx / 8 >= buf.len()`.
#[inline]
pub fn get_bit(buf: &[u8], bit_idx: usize) -> u8 {
    (buf[bit_idx >> 3] >> (bit_idx & 7)) & 1
}

/// Writes the low bit of `value` to bit `bit_idx` of `buf`.
///
/// # Panics
/// Panics if `bit_idx / 8 >= buf.len()`.
#[inline]
pub fn set_bit(buf: &mut [u8], bit_idx: usize, value: u8) {
    let mask = 1u8 << (bit_idx & 7);
    if value & 1 == 1 {
        buf[bit_idx >> 3] |= mask;
    } else {
        buf[bit_idx >> 3] &= !mask;
    }
}

/// Packs eight bits into a byte, first bit in the least significant position.
///
/// Only the low bit of each input is used.
#[inline]
pub fn pack_lsb_first(bits: [u8; 8]) -> u8 {
    bits.iter()
        .enumerate()
        .fold(0u8, |acc, (j, &b)| acc | ((b & 1) << j))
}

/// Expands `input` into one `0`/`1` value per bit, LSB-first within each byte.
///
/// The output holds `input.len() * 8` entries.
pub fn bytes_to_bits(input: &[u8]) -> Vec<u8> {
    (0..input.len() * 8).map(|i| get_bit(input, i)).collect()
}
