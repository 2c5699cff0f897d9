//! Top-level Key-6 container decoding.

use alloc::vec::Vec;

use cipher::{BlockDecrypt, KeyInit, KeySizeUser};
use digest::{consts::U32, Digest, OutputSizeUser};
use zeroize::Zeroizing;

use crate::{
    asn1::Container,
    backend::{CandidateKey, CurveBackend},
    extract::{decode_prefix, extract},
    gost, kdf, Error, Result, KEY6_STORE_OID,
};

/// Decode one Key-6 container with explicit hash and cipher primitives.
///
/// Pipeline: parse the container, gate on the type tag *before* the
/// expensive key derivation, assemble ciphertext plus pad, derive the key,
/// decrypt in place and run both extraction strategies. The derived key and
/// the plaintext live in zeroizing buffers, so they are scrubbed on every
/// exit path.
pub fn parse_with<D, C, B>(
    backend: &B,
    der: &[u8],
    password: &[u8],
) -> Result<Vec<CandidateKey<B>>>
where
    D: Digest + OutputSizeUser<OutputSize = U32>,
    C: BlockDecrypt + KeyInit + KeySizeUser<KeySize = U32>,
    B: CurveBackend,
{
    // Prefix parse: on-disk stores may carry trailing bytes after the
    // container object.
    let container: Container = decode_prefix(der).ok_or(Error::MalformedContainer)?;
    let store_type = container
        .header
        .store_type
        .ok_or(Error::MalformedContainer)?;
    let params = container.header.params.ok_or(Error::MalformedContainer)?;
    if store_type != KEY6_STORE_OID {
        return Err(Error::UnsupportedContainerType);
    }

    let ciphertext = container.data.as_bytes();
    let pad = params.pad.as_ref().map(|p| p.as_bytes()).unwrap_or(&[]);
    let mut plaintext = Zeroizing::new(Vec::with_capacity(ciphertext.len() + pad.len()));
    plaintext.extend_from_slice(ciphertext);
    plaintext.extend_from_slice(pad);

    let key = kdf::derive::<D>(password);
    gost::decrypt_in_place::<C>(&key, &mut plaintext);

    let candidates = extract(backend, &plaintext);
    if candidates.is_empty() {
        return Err(Error::NoCandidateKey);
    }
    Ok(candidates)
}

/// Decode one Key-6 container with the format's stock GOST primitives.
///
/// Returns 0–2 candidate keys; see the crate docs for why more than one
/// candidate (or a plausible-looking wrong-password key) is possible.
pub fn parse<B: CurveBackend>(
    backend: &B,
    der: &[u8],
    password: &[u8],
) -> Result<Vec<CandidateKey<B>>> {
    parse_with::<gost94::Gost94UA, magma::Magma, B>(backend, der, password)
}

/// Drain a reader to memory and decode the result as a Key-6 container.
#[cfg(feature = "std")]
pub fn read<B: CurveBackend>(
    backend: &B,
    mut reader: impl std::io::Read,
    password: &[u8],
) -> Result<Vec<CandidateKey<B>>> {
    let mut der = Vec::new();
    reader
        .read_to_end(&mut der)
        .map_err(|_| Error::MalformedContainer)?;
    parse(backend, &der, password)
}
