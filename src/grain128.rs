//! Grain128: keystream engine and XOR encryption.
//!
//! Couples a linear register (LFSR) and a nonlinear register (NFSR) through
//! their feedback functions and a nonlinear output filter. Every clock
//! computes the output bit from the pre-shift state, then shifts both
//! registers once.
//!
//! Initialization loads the key into the NFSR and the IV (padded with 32
//! one bits) into the LFSR, then runs 256 warm-up clocks that feed the
//! output bit back into both registers. After warm-up every clock is a
//! generation clock whose output bit is handed to the caller.

use std::fmt;

use log::{debug, trace};
use zeroize::Zeroize;

use crate::error::{Grain128Error, Result};
use crate::register::Register;
use crate::utils::bits;
use crate::utils::converter::{self, IV_SIZE, KEY_SIZE};

/// Number of warm-up clocks run by initialization.
pub const INIT_CLOCKS: usize = 256;

/// Keystream bytes generated per chunk by [`process`] and
/// [`Grain128::apply_keystream`].
pub const KEYSTREAM_CHUNK_SIZE: usize = 64;

/// Grain-128 cipher state.
///
/// Owns one linear and one nonlinear 128-bit register and nothing else.
/// The state is resumable: successive keystream calls continue the same
/// bit sequence. Register contents are wiped when the state is dropped.
///
/// One instance serves one stream. Use a separate instance per concurrent
/// stream.
///
/// # Examples
///
/// ```
/// use grain128::Grain128;
///
/// let mut cipher = Grain128::new(&[0u8; 16], &[0u8; 12]);
/// let ks = cipher.next_bytes(4);
/// assert_eq!(ks, [0xF0, 0x9B, 0x7B, 0xF7]);
/// ```
#[derive(Clone)]
pub struct Grain128 {
    lfsr: Register,
    nfsr: Register,
}

impl fmt::Debug for Grain128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grain128").finish_non_exhaustive()
    }
}

impl Grain128 {
    /// Creates a state from a 16-byte key and a 12-byte IV.
    ///
    /// Loads both registers and runs the 256 warm-up clocks. The returned
    /// state is ready to produce keystream.
    ///
    /// # Parameters
    /// - `key`: 128-bit key, bits taken LSB-first per byte.
    /// - `iv`: 96-bit IV, bits taken LSB-first per byte.
    pub fn new(key: &[u8; KEY_SIZE], iv: &[u8; IV_SIZE]) -> Self {
        let mut state = Grain128 {
            lfsr: Register::from_bits(converter::iv_to_register_bits(iv)),
            nfsr: Register::from_bits(converter::key_to_register_bits(key)),
        };

        for _ in 0..INIT_CLOCKS {
            let y = state.output_bit();
            state.clock_init(y);
        }

        debug!("grain128 state initialized after {} warm-up clocks", INIT_CLOCKS);
        state
    }

    /// Creates a state from key and IV slices.
    ///
    /// Lengths are checked before any register is loaded, so a failed call
    /// leaves nothing behind.
    ///
    /// # Errors
    /// - [`Grain128Error::InvalidKeyLength`] if `key.len() != 16`.
    /// - [`Grain128Error::InvalidIvLength`] if `iv.len() != 12`.
    ///
    /// # Examples
    ///
    /// ```
    /// use grain128::{Grain128, Grain128Error};
    ///
    /// let err = Grain128::initialize(&[0u8; 15], &[0u8; 12]).unwrap_err();
    /// assert_eq!(err, Grain128Error::InvalidKeyLength { len: 15 });
    /// ```
    pub fn initialize(key: &[u8], iv: &[u8]) -> Result<Self> {
        let key = converter::key_from_slice(key)?;
        let iv = converter::iv_from_slice(iv)?;
        Ok(Self::new(&key, &iv))
    }

    /// Linear feedback: taps of the polynomial
    /// `1 + x^32 + x^47 + x^58 + x^90 + x^121 + x^128`.
    #[inline(always)]
    fn linear_feedback(&self) -> u8 {
        let s = &self.lfsr;
        s.tap(0) ^ s.tap(7) ^ s.tap(38) ^ s.tap(70) ^ s.tap(81) ^ s.tap(96)
    }

    /// Nonlinear feedback, including the LFSR bit at index 0.
    #[inline(always)]
    fn nonlinear_feedback(&self) -> u8 {
        let b = &self.nfsr;
        let s = &self.lfsr;
        let linear = s.tap(0) ^ b.tap(0) ^ b.tap(26) ^ b.tap(56) ^ b.tap(91) ^ b.tap(96);
        let products = (b.tap(3) & b.tap(67))
            ^ (b.tap(11) & b.tap(13))
            ^ (b.tap(17) & b.tap(18))
            ^ (b.tap(27) & b.tap(59))
            ^ (b.tap(40) & b.tap(48))
            ^ (b.tap(61) & b.tap(65))
            ^ (b.tap(68) & b.tap(84));
        linear ^ products
    }

    /// Output filter over the current (pre-shift) state.
    #[inline(always)]
    fn output_bit(&self) -> u8 {
        let b = &self.nfsr;
        let s = &self.lfsr;
        let linear = b.tap(2)
            ^ b.tap(15)
            ^ b.tap(36)
            ^ b.tap(45)
            ^ b.tap(64)
            ^ b.tap(73)
            ^ b.tap(89)
            ^ s.tap(93);
        let products = (b.tap(12) & b.tap(95) & s.tap(95))
            ^ (b.tap(12) & s.tap(8))
            ^ (s.tap(13) & s.tap(20))
            ^ (b.tap(95) & s.tap(42))
            ^ (s.tap(60) & s.tap(79));
        linear ^ products
    }

    /// Warm-up clock: both feedback bits are mixed with `y` before shifting.
    #[inline(always)]
    fn clock_init(&mut self, y: u8) {
        let lfb = self.linear_feedback() ^ y;
        let nfb = self.nonlinear_feedback() ^ y;
        self.lfsr.shift(lfb);
        self.nfsr.shift(nfb);
    }

    /// Generation clock: feedback bits are shifted in unmixed.
    #[inline(always)]
    fn clock_gen(&mut self) {
        let lfb = self.linear_feedback();
        let nfb = self.nonlinear_feedback();
        self.lfsr.shift(lfb);
        self.nfsr.shift(nfb);
    }

    /// Returns the keystream bit the next clock would emit, without
    /// advancing the state.
    pub fn peek_bit(&self) -> u8 {
        self.output_bit()
    }

    /// Returns the next keystream bit (0 or 1) and advances the state.
    pub fn next_bit(&mut self) -> u8 {
        let z = self.output_bit();
        self.clock_gen();
        z
    }

    /// Returns the next keystream byte, first bit in the least significant
    /// position.
    pub fn next_byte(&mut self) -> u8 {
        let mut stream_bits = [0u8; 8];
        for bit in stream_bits.iter_mut() {
            *bit = self.next_bit();
        }
        bits::pack_lsb_first(stream_bits)
    }

    /// Returns the next `n` keystream bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use grain128::Grain128;
    ///
    /// let mut whole = Grain128::new(&[7u8; 16], &[9u8; 12]);
    /// let mut split = whole.clone();
    ///
    /// let all = whole.next_bytes(10);
    /// let mut parts = split.next_bytes(3);
    /// parts.extend(split.next_bytes(7));
    /// assert_eq!(all, parts);
    /// ```
    pub fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill_keystream(&mut out);
        out
    }

    /// Overwrites `out` with the next `out.len()` keystream bytes.
    pub fn fill_keystream(&mut self, out: &mut [u8]) {
        for byte in out.iter_mut() {
            *byte = self.next_byte();
        }
    }

    /// Writes exactly `n` keystream bytes into `out`.
    ///
    /// # Errors
    /// Returns [`Grain128Error::BufferLengthMismatch`] if `out.len() != n`;
    /// the state is not advanced in that case.
    pub fn keystream_into(&mut self, out: &mut [u8], n: usize) -> Result<()> {
        if out.len() != n {
            return Err(Grain128Error::BufferLengthMismatch {
                expected: n,
                actual: out.len(),
            });
        }
        self.fill_keystream(out);
        Ok(())
    }

    /// XORs the next `buf.len()` keystream bytes into `buf` in place.
    ///
    /// Splitting a message across several calls gives the same result as
    /// one call over the whole message.
    pub fn apply_keystream(&mut self, buf: &mut [u8]) {
        let mut ks = [0u8; KEYSTREAM_CHUNK_SIZE];
        for chunk in buf.chunks_mut(KEYSTREAM_CHUNK_SIZE) {
            let ks = &mut ks[..chunk.len()];
            self.fill_keystream(ks);
            for (byte, k) in chunk.iter_mut().zip(ks.iter()) {
                *byte ^= k;
            }
        }
        ks.zeroize();
    }
}

/// Encrypts or decrypts `input` under `(key, iv)` into `output`.
///
/// A fresh state is initialized for the call and the keystream is produced
/// in chunks of [`KEYSTREAM_CHUNK_SIZE`] bytes.
///
/// # Errors
/// - [`Grain128Error::InvalidKeyLength`] if `key.len() != 16`.
/// - [`Grain128Error::InvalidIvLength`] if `iv.len() != 12`.
/// - [`Grain128Error::BufferLengthMismatch`] if `output.len() != input.len()`.
pub fn process_into(key: &[u8], iv: &[u8], input: &[u8], output: &mut [u8]) -> Result<()> {
    let key = converter::key_from_slice(key)?;
    let iv = converter::iv_from_slice(iv)?;
    if output.len() != input.len() {
        return Err(Grain128Error::BufferLengthMismatch {
            expected: input.len(),
            actual: output.len(),
        });
    }

    trace!("grain128 processing {} bytes", input.len());
    let mut state = Grain128::new(&key, &iv);
    let mut ks = [0u8; KEYSTREAM_CHUNK_SIZE];
    for (src, dst) in input
        .chunks(KEYSTREAM_CHUNK_SIZE)
        .zip(output.chunks_mut(KEYSTREAM_CHUNK_SIZE))
    {
        let ks = &mut ks[..src.len()];
        state.fill_keystream(ks);
        for ((o, i), k) in dst.iter_mut().zip(src.iter()).zip(ks.iter()) {
            *o = i ^ k;
        }
    }
    ks.zeroize();
    Ok(())
}

/// Encrypts or decrypts `input` under `(key, iv)`.
///
/// XOR with the keystream is its own inverse, so the same call decrypts.
///
/// # Errors
/// - [`Grain128Error::InvalidKeyLength`] if `key.len() != 16`.
/// - [`Grain128Error::InvalidIvLength`] if `iv.len() != 12`.
///
/// # Examples
///
/// ```
/// let key = [0x42u8; 16];
/// let iv = [0x24u8; 12];
/// let ct = grain128::process(&key, &iv, b"attack at dawn").unwrap();
/// let pt = grain128::process(&key, &iv, &ct).unwrap();
/// assert_eq!(pt, b"attack at dawn");
/// ```
pub fn process(key: &[u8], iv: &[u8], input: &[u8]) -> Result<Vec<u8>> {
    let mut output = vec![0u8; input.len()];
    process_into(key, iv, input, &mut output)?;
    Ok(output)
}

/// Encrypts `plaintext`. Same operation as [`process`].
///
/// # Errors
/// See [`process`].
pub fn encrypt(key: &[u8], iv: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    process(key, iv, plaintext)
}

/// Decrypts `ciphertext`. Same operation as [`process`].
///
/// # Errors
/// See [`process`].
pub fn decrypt(key: &[u8], iv: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    process(key, iv, ciphertext)
}
