//! Key and IV conversion into packed register contents.
//!
//! Keys and IVs arrive as little-endian byte strings under the LSB-first
//! bit convention of [`bits`](super::bits), which makes them plain
//! little-endian integers once packed.

use crate::error::{Grain128Error, Result};

/// Key length in bytes.
pub const KEY_SIZE: usize = 16;

/// IV length in bytes.
pub const IV_SIZE: usize = 12;

/// Padding for the top 32 bits of the linear register.
const IV_PADDING: u32 = 0xFFFF_FFFF;

/// Validates a key slice and copies it into a fixed array.
///
/// # Errors
/// Returns [`Grain128Error::InvalidKeyLength`] if `key.len() != 16`.
pub fn key_from_slice(key: &[u8]) -> Result<[u8; KEY_SIZE]> {
    key.try_into()
        .map_err(|_| Grain128Error::InvalidKeyLength { len: key.len() })
}

/// Validates an IV slice and copies it into a fixed array.
///
/// # Errors
/// Returns [`Grain128Error::InvalidIvLength`] if `iv.len() != 12`.
pub fn iv_from_slice(iv: &[u8]) -> Result<[u8; IV_SIZE]> {
    iv.try_into()
        .map_err(|_| Grain128Error::InvalidIvLength { len: iv.len() })
}

/// Packs a key into nonlinear register contents.
///
/// Register bit `i` is bit `i % 8` of `key[i / 8]`.
pub fn key_to_register_bits(key: &[u8; KEY_SIZE]) -> u128 {
    u128::from_le_bytes(*key)
}

/// Packs an IV into linear register contents.
///
/// The 96 IV bits fill indices 0..96; indices 96..128 are set to one.
pub fn iv_to_register_bits(iv: &[u8; IV_SIZE]) -> u128 {
    let mut bytes = [0u8; KEY_SIZE];
    bytes[..IV_SIZE].copy_from_slice(iv);
    bytes[IV_SIZE..].copy_from_slice(&IV_PADDING.to_le_bytes());
    u128::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::bits;

    #[test]
    fn test_key_from_slice_ok() {
        let key: Vec<u8> = (0u8..16).collect();
        let arr = key_from_slice(&key).unwrap();
        assert_eq!(&arr[..], &key[..]);
    }

    #[test]
    fn test_key_from_slice_wrong_lengths() {
        assert_eq!(
            key_from_slice(&[0u8; 15]),
            Err(Grain128Error::InvalidKeyLength { len: 15 })
        );
        assert_eq!(
            key_from_slice(&[0u8; 17]),
            Err(Grain128Error::InvalidKeyLength { len: 17 })
        );
        assert_eq!(
            key_from_slice(&[]),
            Err(Grain128Error::InvalidKeyLength { len: 0 })
        );
    }

    #[test]
    fn test_iv_from_slice_wrong_lengths() {
        assert!(iv_from_slice(&[0u8; 12]).is_ok());
        assert_eq!(
            iv_from_slice(&[0u8; 16]),
            Err(Grain128Error::InvalidIvLength { len: 16 })
        );
        assert_eq!(
            iv_from_slice(&[0u8; 11]),
            Err(Grain128Error::InvalidIvLength { len: 11 })
        );
    }

    #[test]
    fn test_key_bits_match_lsb_first_expansion() {
        let key: [u8; 16] = [
            0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF, 0x12, 0x34, 0x56, 0x78, 0x9A, 0xBC,
            0xDE, 0xF0,
        ];
        let packed = key_to_register_bits(&key);
        for (i, b) in bits::bytes_to_bits(&key).into_iter().enumerate() {
            assert_eq!(((packed >> i) & 1) as u8, b, "key bit {} mismatch", i);
        }
    }

    #[test]
    fn test_iv_padding_all_ones() {
        let packed = iv_to_register_bits(&[0u8; 12]);
        assert_eq!(packed, 0xFFFF_FFFFu128 << 96);
    }

    #[test]
    fn test_iv_bits_match_lsb_first_expansion() {
        let iv: [u8; 12] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
        let packed = iv_to_register_bits(&iv);
        for (i, b) in bits::bytes_to_bits(&iv).into_iter().enumerate() {
            assert_eq!(((packed >> i) & 1) as u8, b, "iv bit {} mismatch", i);
        }
        for i in 96..128 {
            assert_eq!((packed >> i) & 1, 1, "padding bit {} not set", i);
        }
    }
}
