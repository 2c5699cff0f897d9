//! Bit/byte reordering codec for the stored private scalar.
//!
//! The legacy format stores the scalar bit-reversed within each byte and
//! byte-reversed across the buffer, relative to the canonical big-endian
//! convention of the arithmetic backend. The transform is an involution:
//! applying [`reorder`] to its own output restores the input, so the same
//! function converts in both directions.

use alloc::vec::Vec;
use zeroize::Zeroizing;

/// Reverse the bit order of a single byte (bit 0 becomes bit 7).
#[inline]
fn swap_bits(byte: u8) -> u8 {
    let b = (byte & 0xF0) >> 4 | (byte & 0x0F) << 4;
    let b = (b & 0xCC) >> 2 | (b & 0x33) << 2;
    (b & 0xAA) >> 1 | (b & 0x55) << 1
}

/// Reinterpret a raw octet string as canonical big-endian bytes.
///
/// Each byte has its bits reversed, then the whole buffer is reversed; the
/// result is key material, so it is returned in a zeroizing buffer.
pub fn reorder(raw: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(Vec::with_capacity(raw.len()));
    for &byte in raw.iter().rev() {
        out.push(swap_bits(byte));
    }
    out
}
