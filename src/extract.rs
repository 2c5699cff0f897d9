//! Candidate key extraction from the decrypted payload.
//!
//! Two independent interpretations of the plaintext are attempted: a
//! self-describing PKCS#8 structure, and the proprietary attribute bag with
//! an embedded custom curve. Each attempt is a pure function of the
//! plaintext; a failure in one never aborts the other, and a failure inside
//! an attempt never yields a partial candidate.
//!
//! The plaintext is block-padded by construction, so both attempts
//! prefix-decode and tolerate trailing bytes.

use alloc::{collections::BTreeMap, vec::Vec};

use der::{
    asn1::{Any, BitString, ObjectIdentifier, OctetString, SetOfVec},
    Decode, SliceReader,
};
use pkcs8::PrivateKeyInfo;
use zeroize::Zeroizing;

use crate::{
    asn1::{AttrCurveSpec, Attribute, CurveSpec, PrivateKeyBag},
    backend::{CandidateKey, CurveBackend, KeyEncoding},
    codec,
    curve::build_group,
    Error, Result, CURVE_SPEC_ATTR_OID, DSTU4145_LE_OID, PRIVATE_KEY_ATTR_OID,
};

/// Decode a value from the front of `bytes`, ignoring trailing bytes.
pub(crate) fn decode_prefix<'a, T: Decode<'a>>(bytes: &'a [u8]) -> Option<T> {
    let mut reader = SliceReader::new(bytes).ok()?;
    T::decode(&mut reader).ok()
}

/// Attempt all extraction strategies, collecting whichever succeed.
///
/// Standard-encoding candidate first, attribute-encoding candidate second
/// when both parse.
pub fn extract<B: CurveBackend>(backend: &B, plaintext: &[u8]) -> Vec<CandidateKey<B>> {
    let mut candidates = Vec::with_capacity(2);
    if let Ok(candidate) = standard_candidate(backend, plaintext) {
        candidates.push(candidate);
    }
    if let Ok(candidate) = attribute_candidate(backend, plaintext) {
        candidates.push(candidate);
    }
    candidates
}

/// Strategy 1: standard PKCS#8 private-key encoding.
///
/// The algorithm must be DSTU 4145 and its parameters must carry an explicit
/// curve definition; the private-key octets are read directly as a
/// big-endian scalar.
fn standard_candidate<B: CurveBackend>(backend: &B, plaintext: &[u8]) -> Result<CandidateKey<B>> {
    let info: PrivateKeyInfo<'_> = decode_prefix(plaintext).ok_or(Error::NoCandidateKey)?;
    if info.algorithm.oid != DSTU4145_LE_OID {
        return Err(Error::NoCandidateKey);
    }
    let params = info.algorithm.parameters.ok_or(Error::NoCandidateKey)?;
    let spec = params
        .decode_as::<CurveSpec>()
        .map_err(|_| Error::NoCandidateKey)?;

    let group = build_group(backend, &spec)?;
    let scalar = backend.int_from_be_bytes(info.private_key);
    let public_point = backend
        .mul_generator(&group, &scalar)
        .ok_or(Error::NoCandidateKey)?;
    Ok(CandidateKey::new(
        group,
        scalar,
        public_point,
        KeyEncoding::Standard,
    ))
}

/// Strategy 2: proprietary attribute encoding.
///
/// Requires both recognized attributes; the private-key value goes through
/// the bit/byte reordering codec before it becomes a scalar.
fn attribute_candidate<B: CurveBackend>(backend: &B, plaintext: &[u8]) -> Result<CandidateKey<B>> {
    let bag: PrivateKeyBag = decode_prefix(plaintext).ok_or(Error::NoCandidateKey)?;
    let attributes = bag.attributes.ok_or(Error::NoCandidateKey)?;
    let mut values = index_attributes(&attributes);

    let spec = values
        .remove(&CURVE_SPEC_ATTR_OID)
        .and_then(|slots| slots.curve)
        .ok_or(Error::NoCandidateKey)?;
    let key_bytes = values
        .remove(&PRIVATE_KEY_ATTR_OID)
        .and_then(|slots| slots.bytes)
        .ok_or(Error::NoCandidateKey)?;

    let group = build_group(backend, &spec)?;
    let scalar_bytes = codec::reorder(&key_bytes);
    let scalar = backend.int_from_be_bytes(&scalar_bytes);
    let public_point = backend
        .mul_generator(&group, &scalar)
        .ok_or(Error::NoCandidateKey)?;
    Ok(CandidateKey::new(
        group,
        scalar,
        public_point,
        KeyEncoding::Attributes,
    ))
}

/// A recognized attribute value.
enum AttrValue {
    /// Raw octets of an OCTET STRING or BIT STRING value.
    Bytes(Zeroizing<Vec<u8>>),
    /// A decodable curve definition.
    Curve(CurveSpec),
}

/// Per-attribute slots, one per recognized underlying type.
#[derive(Default)]
struct AttrSlots {
    bytes: Option<Zeroizing<Vec<u8>>>,
    curve: Option<CurveSpec>,
}

/// Index the attribute list once into a map keyed by identifier.
///
/// Attributes are multi-valued; per attribute, the first value of each
/// recognized underlying type wins, so a value of the wrong type never
/// blocks a later matching one. Later attributes never shadow earlier ones.
fn index_attributes(attributes: &SetOfVec<Attribute>) -> BTreeMap<ObjectIdentifier, AttrSlots> {
    let mut map = BTreeMap::new();
    for attribute in attributes.iter() {
        if map.contains_key(&attribute.id) {
            continue;
        }
        let mut slots = AttrSlots::default();
        for value in attribute.values.iter() {
            match classify(value) {
                Some(AttrValue::Bytes(bytes)) if slots.bytes.is_none() => {
                    slots.bytes = Some(bytes);
                }
                Some(AttrValue::Curve(spec)) if slots.curve.is_none() => {
                    slots.curve = Some(spec);
                }
                _ => {}
            }
        }
        map.insert(attribute.id, slots);
    }
    map
}

/// Probe one attribute value for the underlying types the format uses.
fn classify(value: &Any) -> Option<AttrValue> {
    if let Ok(octets) = value.decode_as::<OctetString>() {
        return Some(AttrValue::Bytes(Zeroizing::new(octets.into_bytes())));
    }
    if let Ok(bits) = value.decode_as::<BitString>() {
        return Some(AttrValue::Bytes(Zeroizing::new(bits.raw_bytes().to_vec())));
    }
    if let Ok(wrapper) = value.decode_as::<AttrCurveSpec>() {
        return Some(AttrValue::Curve(wrapper.spec));
    }
    None
}
