//! Shared test support: a deterministic mock arithmetic backend and
//! container-building helpers.

#![allow(dead_code)]

use core::sync::atomic::{AtomicUsize, Ordering};

use cipher::{Block, BlockEncrypt, Key, KeyInit};
use der::{
    asn1::{Any, ObjectIdentifier, OctetString, SetOfVec, Uint},
    Encode,
};
use dstu_key6::{
    asn1::{
        AlgorithmIdentifier, AttrCurveSpec, Attribute, BinaryField, Container, ContainerHeader,
        ContainerParams, CurveSpec, Pentanomial, PolynomialBasis, PrivateKeyBag,
    },
    kdf, CurveBackend,
};
use gost94::Gost94UA;
use hex_literal::hex;
use magma::Magma;
use zeroize::Zeroize;

/// Stand-in for the external binary-field arithmetic library.
///
/// Validates the shapes the decoder hands it and keeps deterministic opaque
/// values, but performs no actual field or point arithmetic: the decoder
/// treats the backend as an opaque capability, so the tests do too.
#[derive(Default)]
pub struct MockBackend;

/// Mock curve group: remembers what it was built from.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockGroup {
    pub poly: Vec<u32>,
    pub a: Vec<u8>,
    pub b: Vec<u8>,
    pub generator: Option<MockGenerator>,
}

/// Installed generator: point encoding plus order bytes.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MockGenerator {
    pub point: Vec<u8>,
    pub order: Vec<u8>,
}

fn strip_leading_zeros(bytes: &[u8]) -> Vec<u8> {
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}

impl CurveBackend for MockBackend {
    type Int = Vec<u8>;
    type Group = MockGroup;
    type Point = Vec<u8>;

    fn int_from_be_bytes(&self, bytes: &[u8]) -> Vec<u8> {
        strip_leading_zeros(bytes)
    }

    fn int_from_i32(&self, value: i32) -> Vec<u8> {
        strip_leading_zeros(&value.to_be_bytes())
    }

    fn reduction_polynomial(&self, exponents: &[u32]) -> Option<Vec<u8>> {
        // A real library rejects anything that is not strictly descending
        // and terminated by the constant term.
        if exponents.len() < 3 || *exponents.last()? != 0 {
            return None;
        }
        if !exponents.windows(2).all(|pair| pair[0] > pair[1]) {
            return None;
        }
        Some(
            exponents
                .iter()
                .flat_map(|e| e.to_be_bytes())
                .collect::<Vec<u8>>(),
        )
    }

    fn new_curve(&self, poly: &Vec<u8>, a: &Vec<u8>, b: &Vec<u8>) -> Option<MockGroup> {
        // Degenerate coefficient: a binary-field curve with b = 0 is
        // singular, which a real library rejects.
        if b.is_empty() {
            return None;
        }
        let poly = poly
            .chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();
        Some(MockGroup {
            poly,
            a: a.clone(),
            b: b.clone(),
            generator: None,
        })
    }

    fn decode_point(&self, _group: &MockGroup, encoded: &[u8]) -> Option<Vec<u8>> {
        if encoded.is_empty() {
            return None;
        }
        Some(encoded.to_vec())
    }

    fn is_on_curve(&self, _group: &MockGroup, point: &Vec<u8>) -> bool {
        // The mock's curve membership rule: well-formed encodings start with
        // the 0x04 marker byte the test vectors use.
        point.first() == Some(&0x04)
    }

    fn set_generator(&self, group: &mut MockGroup, generator: Vec<u8>, order: Vec<u8>) -> bool {
        if order.is_empty() {
            return false;
        }
        group.generator = Some(MockGenerator {
            point: generator,
            order,
        });
        true
    }

    fn mul_generator(&self, group: &MockGroup, scalar: &Vec<u8>) -> Option<Vec<u8>> {
        let generator = group.generator.as_ref()?;
        if scalar.is_empty() {
            return None;
        }
        // Deterministic pseudo-multiplication: fold the scalar into the
        // generator encoding.
        let mut point = vec![0x04];
        point.extend(
            generator
                .point
                .iter()
                .zip(scalar.iter().cycle())
                .map(|(g, s)| g ^ s),
        );
        Some(point)
    }
}

static SCRUB_CALLS: AtomicUsize = AtomicUsize::new(0);

/// Number of integer scrubs observed through [`TracedInt`] so far.
pub fn scrub_count() -> usize {
    SCRUB_CALLS.load(Ordering::SeqCst)
}

/// Backend integer that records every zeroization in a shared counter.
#[derive(Clone)]
pub struct TracedInt(pub Vec<u8>);

impl Zeroize for TracedInt {
    fn zeroize(&mut self) {
        self.0.zeroize();
        SCRUB_CALLS.fetch_add(1, Ordering::SeqCst);
    }
}

/// [`MockBackend`] with scrub-counting integers, for verifying that key
/// material is wiped when candidates are dropped.
#[derive(Default)]
pub struct TracingBackend;

impl CurveBackend for TracingBackend {
    type Int = TracedInt;
    type Group = MockGroup;
    type Point = Vec<u8>;

    fn int_from_be_bytes(&self, bytes: &[u8]) -> TracedInt {
        TracedInt(MockBackend.int_from_be_bytes(bytes))
    }

    fn int_from_i32(&self, value: i32) -> TracedInt {
        TracedInt(MockBackend.int_from_i32(value))
    }

    fn reduction_polynomial(&self, exponents: &[u32]) -> Option<TracedInt> {
        MockBackend.reduction_polynomial(exponents).map(TracedInt)
    }

    fn new_curve(&self, poly: &TracedInt, a: &TracedInt, b: &TracedInt) -> Option<MockGroup> {
        MockBackend.new_curve(&poly.0, &a.0, &b.0)
    }

    fn decode_point(&self, group: &MockGroup, encoded: &[u8]) -> Option<Vec<u8>> {
        MockBackend.decode_point(group, encoded)
    }

    fn is_on_curve(&self, group: &MockGroup, point: &Vec<u8>) -> bool {
        MockBackend.is_on_curve(group, point)
    }

    fn set_generator(&self, group: &mut MockGroup, generator: Vec<u8>, order: TracedInt) -> bool {
        MockBackend.set_generator(group, generator, order.0)
    }

    fn mul_generator(&self, group: &MockGroup, scalar: &TracedInt) -> Option<Vec<u8>> {
        MockBackend.mul_generator(group, &scalar.0)
    }
}

/// DSTU field parameters for m = 163 (pentanomial x^163+x^7+x^6+x^3+1).
pub fn curve_spec_163() -> CurveSpec {
    CurveSpec {
        field: BinaryField {
            m: 163,
            basis: PolynomialBasis::Pentanomial(Pentanomial { k: 7, j: 6, l: 3 }),
        },
        a: 1,
        b: OctetString::new(&hex!("05FF6108462A2DC8210AB403925E638A19C1455D21")[..]).unwrap(),
        order: Uint::new(&hex!("0400000000000000000002BEC12BE2262D39BCF14D")[..]).unwrap(),
        base_point: OctetString::new(
            &hex!("042A66A7400784A74A72CCA75B0C358B4CDD6C2AA6")[..],
        )
        .unwrap(),
    }
}

/// DSTU field parameters for m = 257 (trinomial x^257+x^12+1).
pub fn curve_spec_257() -> CurveSpec {
    CurveSpec {
        field: BinaryField {
            m: 257,
            basis: PolynomialBasis::Trinomial(12),
        },
        a: 0,
        b: OctetString::new(
            &hex!("01CEF494720115657E18F938D7A7942394FF9425C1458C57861F9EEA6ADBE3BE10")[..],
        )
        .unwrap(),
        order: Uint::new(
            &hex!("800000000000000000000000000000006759213AF182E987D3E17714907D470D")[..],
        )
        .unwrap(),
        base_point: OctetString::new(
            &hex!("04406F7737E865D250D70A29EADFE3C23D370C3FA7B5C943CDED1B72F3E1532D2C")[..],
        )
        .unwrap(),
    }
}

/// DSTU field parameters for m = 431 (pentanomial x^431+x^5+x^3+x^1+1).
pub fn curve_spec_431() -> CurveSpec {
    CurveSpec {
        field: BinaryField {
            m: 431,
            basis: PolynomialBasis::Pentanomial(Pentanomial { k: 5, j: 3, l: 1 }),
        },
        a: 1,
        b: OctetString::new(
            &hex!("03CE10490F6A708FC26DFE8C3D27C4F94E690134D5BFF988D8D28AAEAEDE975936C66BAC536B18AE2DC312CA493117DAA469C640CAF3")[..],
        )
        .unwrap(),
        order: Uint::new(
            &hex!("3CEC0C6C6A64DA15552556A18F8CD0C9762A47C8F9AB46B7D6B6EA9B4BE6A9F5FCBFCF9EDB0B2D3C179FBE6DDF04DA28")[..],
        )
        .unwrap(),
        base_point: OctetString::new(
            &hex!("046CC4E4F0B5EAB8E7AAF417A6B5D1D74FE534816450DF6DFFD9377DFCAC5F25676A119E5F700F92C27C8017B6B3E3C205F274D54CD3")[..],
        )
        .unwrap(),
    }
}

/// Standard-encoding plaintext: a PKCS#8 structure whose algorithm
/// parameters carry an explicit curve definition.
pub fn standard_plaintext(spec: &CurveSpec, scalar: &[u8]) -> Vec<u8> {
    let params = spec.to_der().unwrap();
    let info = pkcs8::PrivateKeyInfo {
        algorithm: pkcs8::spki::AlgorithmIdentifierRef {
            oid: dstu_key6::DSTU4145_LE_OID,
            parameters: Some(der::AnyRef::try_from(params.as_slice()).unwrap()),
        },
        private_key: scalar,
        public_key: None,
    };
    info.to_der().unwrap()
}

/// Attribute-encoding plaintext: a private-key bag whose attribute list
/// carries the curve specification and the bit/byte-reversed scalar.
pub fn attribute_plaintext(spec: &CurveSpec, stored_scalar: &[u8]) -> Vec<u8> {
    let curve_attr = Attribute {
        id: dstu_key6::CURVE_SPEC_ATTR_OID,
        values: SetOfVec::try_from(vec![Any::encode_from(&AttrCurveSpec { spec: spec.clone() })
            .unwrap()])
        .unwrap(),
    };
    let key_attr = Attribute {
        id: dstu_key6::PRIVATE_KEY_ATTR_OID,
        values: SetOfVec::try_from(vec![Any::encode_from(
            &OctetString::new(stored_scalar).unwrap(),
        )
        .unwrap()])
        .unwrap(),
    };
    let bag = PrivateKeyBag {
        version: 0,
        // No parameters: the standard strategy must fail on this payload,
        // like an unregistered algorithm would in the original.
        algorithm: AlgorithmIdentifier {
            oid: dstu_key6::DSTU4145_LE_OID,
            parameters: None,
        },
        private_key: OctetString::new(&[][..]).unwrap(),
        attributes: Some(SetOfVec::try_from(vec![curve_attr, key_attr]).unwrap()),
    };
    bag.to_der().unwrap()
}

/// Like [`attribute_plaintext`], but the curve attribute's first value is an
/// unrelated octet string; the curve specification is its second value.
pub fn attribute_plaintext_mixed_curve_values(spec: &CurveSpec, stored_scalar: &[u8]) -> Vec<u8> {
    let curve_attr = Attribute {
        id: dstu_key6::CURVE_SPEC_ATTR_OID,
        values: SetOfVec::try_from(vec![
            // OCTET STRING sorts before SEQUENCE in a DER SET OF, so this
            // value is encountered first.
            Any::encode_from(&OctetString::new(&hex!("00112233")[..]).unwrap()).unwrap(),
            Any::encode_from(&AttrCurveSpec { spec: spec.clone() }).unwrap(),
        ])
        .unwrap(),
    };
    let key_attr = Attribute {
        id: dstu_key6::PRIVATE_KEY_ATTR_OID,
        values: SetOfVec::try_from(vec![Any::encode_from(
            &OctetString::new(stored_scalar).unwrap(),
        )
        .unwrap()])
        .unwrap(),
    };
    let bag = PrivateKeyBag {
        version: 0,
        algorithm: AlgorithmIdentifier {
            oid: dstu_key6::DSTU4145_LE_OID,
            parameters: None,
        },
        private_key: OctetString::new(&[][..]).unwrap(),
        attributes: Some(SetOfVec::try_from(vec![curve_attr, key_attr]).unwrap()),
    };
    bag.to_der().unwrap()
}

/// Encrypt a plaintext under `password` and wrap it in a Key-6 container.
///
/// The plaintext is zero-padded to the 8-byte block size; `pad_split` final
/// ciphertext bytes are stored in the header's pad field instead of `data`.
pub fn build_container(plaintext: &[u8], password: &[u8], pad_split: usize) -> Vec<u8> {
    build_container_with_type(plaintext, password, pad_split, dstu_key6::KEY6_STORE_OID)
}

/// Same as [`build_container`] with an explicit store type OID.
pub fn build_container_with_type(
    plaintext: &[u8],
    password: &[u8],
    pad_split: usize,
    store_type: ObjectIdentifier,
) -> Vec<u8> {
    let mut buf = plaintext.to_vec();
    while buf.len() % 8 != 0 {
        buf.push(0);
    }

    let key = kdf::derive::<Gost94UA>(password);
    let cipher = Magma::new(Key::<Magma>::from_slice(&key[..]));
    for block in buf.chunks_exact_mut(8) {
        cipher.encrypt_block(Block::<Magma>::from_mut_slice(block));
    }

    let split = buf.len() - pad_split;
    let container = Container {
        header: ContainerHeader {
            store_type: Some(store_type),
            params: Some(ContainerParams {
                pad: (pad_split > 0).then(|| OctetString::new(&buf[split..]).unwrap()),
            }),
        },
        data: OctetString::new(&buf[..split]).unwrap(),
    };
    container.to_der().unwrap()
}
