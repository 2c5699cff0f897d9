//! Narrow interface onto a binary-field elliptic-curve arithmetic library.
//!
//! Key-6 stores may embed a fully custom curve definition, so the decoder
//! cannot lean on a fixed set of named groups: it drives this trait to build
//! a group at runtime. The crate deliberately implements no field or point
//! arithmetic of its own; any compliant backend can sit behind this seam.
//! Backend failures are opaque; callers map them onto
//! [`Error::InvalidCurveSpec`], [`Error::PointDecodeFailed`] and
//! [`Error::PointNotOnCurve`].
//!
//! [`Error::InvalidCurveSpec`]: crate::Error::InvalidCurveSpec
//! [`Error::PointDecodeFailed`]: crate::Error::PointDecodeFailed
//! [`Error::PointNotOnCurve`]: crate::Error::PointNotOnCurve

use zeroize::Zeroize;

/// Arithmetic capability over binary fields GF(2^m).
///
/// All operations take `&self` so stateless backends are zero-sized; the
/// decoder is re-entrant as long as the backend is.
pub trait CurveBackend {
    /// Multiple-precision integer: scalars, orders, reduction polynomials.
    type Int: Clone + Zeroize;
    /// Curve group handle, opaque to the decoder.
    type Group;
    /// Point on a group.
    type Point;

    /// Build an integer from canonical big-endian bytes.
    fn int_from_be_bytes(&self, bytes: &[u8]) -> Self::Int;

    /// Build an integer from a small signed value (the curve coefficient
    /// `a`); the signed-to-field mapping is the backend's business.
    fn int_from_i32(&self, value: i32) -> Self::Int;

    /// Assemble the reduction polynomial from its exponents, given in
    /// strictly descending order and terminated by the constant term `0`.
    ///
    /// Returns `None` if the exponents do not form a valid reduction
    /// polynomial (e.g. non-monotonic).
    fn reduction_polynomial(&self, exponents: &[u32]) -> Option<Self::Int>;

    /// Construct the curve `y^2 + xy = x^3 + ax^2 + b` over GF(2^m).
    ///
    /// Returns `None` if the backend rejects the parameters (e.g. a
    /// non-invertible discriminant).
    fn new_curve(&self, poly: &Self::Int, a: &Self::Int, b: &Self::Int) -> Option<Self::Group>;

    /// Decode a compressed point encoding into a point of `group`.
    fn decode_point(&self, group: &Self::Group, encoded: &[u8]) -> Option<Self::Point>;

    /// Whether `point` satisfies the curve equation of `group`.
    fn is_on_curve(&self, group: &Self::Group, point: &Self::Point) -> bool;

    /// Install `generator` with the given order and an implicit cofactor of
    /// 1 (the legacy format carries no cofactor field).
    ///
    /// Returns `false` if the backend rejects the installation, as far as it
    /// can detect an inconsistent order cheaply.
    fn set_generator(&self, group: &mut Self::Group, generator: Self::Point, order: Self::Int)
        -> bool;

    /// Compute `scalar * G` for the group's installed generator.
    fn mul_generator(&self, group: &Self::Group, scalar: &Self::Int) -> Option<Self::Point>;
}

/// Which of the two extraction strategies produced a candidate.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyEncoding {
    /// Self-describing PKCS#8 private-key structure.
    Standard,
    /// Proprietary attribute bag with an embedded custom curve.
    Attributes,
}

/// One possible reconstruction of the protected private key.
///
/// A decode yields zero, one or two of these. The format has no integrity
/// check, so a structurally valid candidate is not proof the password was
/// correct; callers must disambiguate out of band (e.g. a signature
/// round-trip against a known-good vector).
pub struct CandidateKey<B: CurveBackend> {
    group: B::Group,
    scalar: B::Int,
    public_point: B::Point,
    encoding: KeyEncoding,
}

impl<B: CurveBackend> CandidateKey<B> {
    pub(crate) fn new(
        group: B::Group,
        scalar: B::Int,
        public_point: B::Point,
        encoding: KeyEncoding,
    ) -> Self {
        Self {
            group,
            scalar,
            public_point,
            encoding,
        }
    }

    /// The curve group this key lives on.
    pub fn group(&self) -> &B::Group {
        &self.group
    }

    /// The private scalar.
    ///
    /// # ⚠️ Warning
    ///
    /// This value is key material.
    ///
    /// Please treat it with the care it deserves!
    pub fn scalar(&self) -> &B::Int {
        &self.scalar
    }

    /// The derived public point (`scalar * G`).
    pub fn public_point(&self) -> &B::Point {
        &self.public_point
    }

    /// The encoding strategy this candidate was recovered from.
    pub fn encoding(&self) -> KeyEncoding {
        self.encoding
    }
}

impl<B: CurveBackend> Drop for CandidateKey<B> {
    fn drop(&mut self) {
        self.scalar.zeroize();
    }
}
