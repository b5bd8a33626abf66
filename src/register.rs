//! Register: 128-bit shift register backing both Grain-128 state halves.
//!
//! The register is packed into a single `u128`. Integer bit `i` holds
//! register index `i`: index 0 is the oldest bit (next to leave), index 127
//! the newest. The same type serves as the linear register (LFSR) and the
//! nonlinear register (NFSR); only the feedback computed by the engine
//! differs.

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of bits held by a register.
pub(crate) const REGISTER_BITS: usize = 128;

/// Packed 128-bit shift register.
///
/// Contents are wiped when the register is dropped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub(crate) struct Register {
    bits: u128,
}

impl Register {
    /// Creates a register from its packed form.
    ///
    /// # Parameters
    /// - `bits`: Packed contents, integer bit `i` is register index `i`.
    pub(crate) fn from_bits(bits: u128) -> Self {
        Register { bits }
    }

    /// Returns the packed contents.
    #[allow(dead_code)]
    pub(crate) fn bits(&self) -> u128 {
        self.bits
    }

    /// Returns the bit at register index `idx` as 0 or 1.
    ///
    /// `idx` must be below 128; every tap in the cipher is a constant in range.
    #[inline(always)]
    pub(crate) fn tap(&self, idx: usize) -> u8 {
        debug_assert!(idx < REGISTER_BITS);
        ((self.bits >> idx) & 1) as u8
    }

    /// Shifts every bit one position towards index 0 and writes
    /// `incoming` (low bit only) at index 127.
    ///
    /// The bit previously at index 0 is discarded.
    #[inline(always)]
    pub(crate) fn shift(&mut self, incoming: u8) {
        self.bits = (self.bits >> 1) | (((incoming & 1) as u128) << (REGISTER_BITS - 1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_reads_lsb_first() {
        let reg = Register::from_bits(0b1010);
        assert_eq!(reg.tap(0), 0);
        assert_eq!(reg.tap(1), 1);
        assert_eq!(reg.tap(2), 0);
        assert_eq!(reg.tap(3), 1);
        assert_eq!(reg.tap(127), 0);
    }

    #[test]
    fn test_tap_top_bit() {
        let reg = Register::from_bits(1u128 << 127);
        assert_eq!(reg.tap(127), 1);
        assert_eq!(reg.tap(126), 0);
    }

    #[test]
    fn test_shift_moves_towards_index_zero() {
        let mut reg = Register::from_bits(0b110);
        reg.shift(0);
        assert_eq!(reg.bits(), 0b11);
        reg.shift(0);
        assert_eq!(reg.bits(), 0b1);
        reg.shift(0);
        assert_eq!(reg.bits(), 0);
    }

    #[test]
    fn test_shift_inserts_at_top() {
        let mut reg = Register::from_bits(0);
        reg.shift(1);
        assert_eq!(reg.tap(127), 1);
        assert_eq!(reg.bits(), 1u128 << 127);
        reg.shift(1);
        assert_eq!(reg.tap(127), 1);
        assert_eq!(reg.tap(126), 1);
    }

    #[test]
    fn test_shift_masks_incoming_bit() {
        let mut reg = Register::from_bits(0);
        reg.shift(0xFE);
        assert_eq!(reg.bits(), 0);
        reg.shift(0xFF);
        assert_eq!(reg.bits(), 1u128 << 127);
    }

    #[test]
    fn test_bit_travels_full_register() {
        let mut reg = Register::from_bits(0);
        reg.shift(1);
        for _ in 0..127 {
            reg.shift(0);
        }
        assert_eq!(reg.bits(), 1);
        reg.shift(0);
        assert_eq!(reg.bits(), 0);
    }

    #[test]
    fn test_zeroize_clears_contents() {
        let mut reg = Register::from_bits(u128::MAX);
        reg.zeroize();
        assert_eq!(reg.bits(), 0);
    }
}
