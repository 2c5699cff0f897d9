//! Block cipher adapter for the container payload.
//!
//! The payload is encrypted ECB-style with a 64-bit block cipher keyed from
//! the derived 32-byte key: no chaining, no integrity tag. The cipher is a
//! type parameter bounded by the [`cipher`] traits; [`crate::parse`] pins
//! [`magma::Magma`] (GOST 28147-89 / GOST R 34.12-2015).

use cipher::{Block, BlockDecrypt, Key, KeyInit, KeySizeUser};
use digest::consts::U32;

use crate::kdf::KEY_SIZE;

/// Decrypt every full block of `buf` in place.
///
/// The cipher is key-scheduled once and the whole buffer decrypted in one
/// pass. A valid container always carries a block-aligned ciphertext (data
/// plus pad); if it does not, the trailing partial block is left untouched
/// and the downstream parse fails softly instead of this adapter erroring
/// out.
pub fn decrypt_in_place<C>(key: &[u8; KEY_SIZE], buf: &mut [u8])
where
    C: BlockDecrypt + KeyInit + KeySizeUser<KeySize = U32>,
{
    let cipher = C::new(Key::<C>::from_slice(key));
    for block in buf.chunks_exact_mut(C::block_size()) {
        cipher.decrypt_block(Block::<C>::from_mut_slice(block));
    }
}
