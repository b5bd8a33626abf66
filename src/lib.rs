//! Grain-128 stream cipher engine.
//!
//! Grain-128 is a bit-oriented stream cipher built from two coupled 128-bit
//! shift registers: a linear register (LFSR) and a nonlinear register
//! (NFSR). A nonlinear filter over both registers yields one keystream bit
//! per clock. Encryption and decryption are the same operation: XOR with
//! the keystream.
//!
//! Keys are 16 bytes and IVs 12 bytes. Bits are read LSB-first within each
//! byte, and keystream bits are packed LSB-first into output bytes, which
//! matches published Grain-128 test vectors.
//!
//! # Architecture
//!
//! ```text
//! Register  (packed 128-bit shift register, shift + tap)
//!     ×2: LFSR (linear feedback) and NFSR (nonlinear feedback + LFSR[0])
//! Grain128  (state machine: 256 warm-up clocks, then generation clocks)
//! process   (fresh state per call, chunked keystream XOR)
//! ```
//!
//! # Examples
//!
//! One-shot encryption and decryption:
//!
//! ```
//! let key = [0u8; 16];
//! let iv = [0u8; 12];
//!
//! let ct = grain128::process(&key, &iv, b"hello").unwrap();
//! let pt = grain128::process(&key, &iv, &ct).unwrap();
//! assert_eq!(pt, b"hello");
//! ```
//!
//! Streaming over a message in pieces:
//!
//! ```
//! use grain128::Grain128;
//!
//! let key = [0x11u8; 16];
//! let iv = [0x22u8; 12];
//!
//! let mut one_shot = *b"split me across calls";
//! Grain128::new(&key, &iv).apply_keystream(&mut one_shot);
//!
//! let mut pieces = *b"split me across calls";
//! let mut cipher = Grain128::new(&key, &iv);
//! let (head, tail) = pieces.split_at_mut(6);
//! cipher.apply_keystream(head);
//! cipher.apply_keystream(tail);
//!
//! assert_eq!(one_shot, pieces);
//! ```

#![deny(clippy::all)]

pub mod error;
pub mod utils;

mod grain128;
pub(crate) mod register;
#[cfg(feature = "cipher")]
mod stream;

#[cfg(feature = "cipher")]
pub use cipher;

pub use error::{Grain128Error, Result};
pub use grain128::{
    decrypt, encrypt, process, process_into, Grain128, INIT_CLOCKS, KEYSTREAM_CHUNK_SIZE,
};
pub use utils::converter::{IV_SIZE, KEY_SIZE};
