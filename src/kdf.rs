//! Password-based key derivation for Key-6 stores.
//!
//! The format's PKDF is a fixed, unsalted iterated hash: 10000 applications
//! of a 32-byte-output compression hash, nothing configurable. The hash is a
//! type parameter so the exact GOST 34.311 variant (or an instrumented test
//! double) can be supplied; [`crate::parse`] pins [`gost94::Gost94UA`].

use digest::{consts::U32, Digest, Output, OutputSizeUser};
use zeroize::Zeroizing;

/// Size of the derived symmetric key in bytes.
pub const KEY_SIZE: usize = 32;

/// Total number of hash applications. A legacy-format constant; changing it
/// breaks compatibility with every existing store.
pub const ITERATIONS: u32 = 10_000;

/// Derive the 32-byte store key from a password.
///
/// `key = H(password)`, then `key = H(key)` for the remaining 9999 rounds.
/// Never fails; an empty password is valid input. The key is returned in a
/// zeroizing buffer and must still be treated as secret by the caller.
pub fn derive<D>(password: &[u8]) -> Zeroizing<[u8; KEY_SIZE]>
where
    D: Digest + OutputSizeUser<OutputSize = U32>,
{
    let mut out = Output::<D>::default();

    let mut hasher = D::new();
    hasher.update(password);
    hasher.finalize_into(&mut out);

    for _ in 1..ITERATIONS {
        let mut hasher = D::new();
        hasher.update(&out);
        hasher.finalize_into(&mut out);
    }

    let mut key = Zeroizing::new([0u8; KEY_SIZE]);
    key.copy_from_slice(&out);
    out.fill(0);
    key
}
