//! 16-bit sample <-> 32-bit bus word mapping
//!
//! The simulated audio core uses a 32-bit data bus. A sample occupies the
//! upper half of the word and the lower half is zero padding.

/// Place a sample in the upper 16 bits of a bus word
#[inline]
pub fn widen(sample: i16) -> u32 {
    ((sample as i32) << 16) as u32
}

/// Recover the sample from the upper 16 bits, discarding the padding half
#[inline]
pub fn narrow(word: u32) -> i16 {
    ((word as i32) >> 16) as i16
}
