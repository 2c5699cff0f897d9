//! ASN.1 schemas for the Key-6 container and its decrypted payload.
//!
//! Pure DER types, no decoding logic: the container wire format, the
//! PKCS#8-shaped private-key structure carrying the IIT attribute bag, and
//! the proprietary custom-curve specification. Tag/length framing is
//! delegated entirely to [`der`].

use der::{
    asn1::{Any, ObjectIdentifier, OctetString, SetOfVec, Uint},
    Choice, Sequence, ValueOrd,
};

/// Outer Key-6 store: `SEQUENCE { header, data }`.
///
/// `data` is the ciphertext; the optional pad bytes in the header are extra
/// ciphertext that must be appended to `data` before decryption so the total
/// is block aligned.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct Container {
    /// Store header: type identifier and parameters.
    pub header: ContainerHeader,
    /// Encrypted payload.
    pub data: OctetString,
}

/// Key-6 store header.
///
/// Both fields are OPTIONAL on the wire; their absence is a structural
/// completeness failure, checked before any cryptographic work.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct ContainerHeader {
    /// Store type identifier, compared against [`crate::KEY6_STORE_OID`].
    pub store_type: Option<ObjectIdentifier>,
    /// Store parameters.
    pub params: Option<ContainerParams>,
}

/// Key-6 store parameters.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct ContainerParams {
    /// Trailing ciphertext bytes stored out of line from `data`.
    pub pad: Option<OctetString>,
}

/// Algorithm identifier with uninterpreted parameters.
#[derive(Clone, Debug, Eq, PartialEq, Sequence, ValueOrd)]
pub struct AlgorithmIdentifier {
    /// Algorithm OID.
    pub oid: ObjectIdentifier,
    /// Algorithm parameters; for DSTU 4145 keys these carry the curve
    /// definition.
    pub parameters: Option<Any>,
}

/// PKCS#8-shaped private-key structure exposing the attribute bag.
///
/// The standard [`pkcs8::PrivateKeyInfo`] parser skips the `[0]` attribute
/// set; the proprietary encoding stores the actual key material there, so
/// this mirror type keeps it.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct PrivateKeyBag {
    /// Structure version (0 for this format).
    pub version: u8,
    /// Private-key algorithm.
    pub algorithm: AlgorithmIdentifier,
    /// Private-key octets; unused by the attribute encoding.
    pub private_key: OctetString,
    /// Named attributes; the curve-specification and private-key-value
    /// attributes live here.
    #[asn1(context_specific = "0", tag_mode = "IMPLICIT", optional = "true")]
    pub attributes: Option<SetOfVec<Attribute>>,
}

/// A single multi-valued attribute: `SEQUENCE { id, values SET OF ANY }`.
#[derive(Clone, Debug, Eq, PartialEq, Sequence, ValueOrd)]
pub struct Attribute {
    /// Attribute identifier.
    pub id: ObjectIdentifier,
    /// Attribute values, each probed for the expected underlying type.
    pub values: SetOfVec<Any>,
}

/// Wrapper around the curve specification as stored in the curve attribute.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct AttrCurveSpec {
    /// The embedded curve definition.
    pub spec: CurveSpec,
}

/// Custom binary-field curve definition.
///
/// Describes the full group: field, Weierstrass coefficients, compressed
/// base point and group order. The legacy format carries no cofactor field;
/// the cofactor is always 1.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct CurveSpec {
    /// Binary field GF(2^m).
    pub field: BinaryField,
    /// Coefficient `a` as a small signed integer; the signed-to-field
    /// mapping is the arithmetic backend's business.
    pub a: i32,
    /// Coefficient `b` encoded directly as a field element.
    pub b: OctetString,
    /// Order of the base point.
    pub order: Uint,
    /// Compressed base-point encoding.
    pub base_point: OctetString,
}

/// Binary field GF(2^m) described by its irreducible reduction polynomial.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct BinaryField {
    /// Field degree.
    pub m: u32,
    /// Middle terms of the reduction polynomial.
    pub basis: PolynomialBasis,
}

/// The two shapes of reduction polynomial the format supports.
#[derive(Clone, Debug, Eq, PartialEq, Choice)]
pub enum PolynomialBasis {
    /// `x^m + x^k + 1`
    Trinomial(u32),
    /// `x^m + x^k + x^j + x^l + 1`
    Pentanomial(Pentanomial),
}

/// Middle exponents of a pentanomial, in descending order.
#[derive(Clone, Debug, Eq, PartialEq, Sequence)]
pub struct Pentanomial {
    /// Largest middle exponent.
    pub k: u32,
    /// Second middle exponent.
    pub j: u32,
    /// Smallest middle exponent.
    pub l: u32,
}
