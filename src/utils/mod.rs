//! Bit addressing and key/IV conversion helpers.

pub mod bits;
pub mod converter;
