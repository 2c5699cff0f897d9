//! Custom curve builder.
//!
//! Reconstructs a binary-field curve group from an ASN.1 [`CurveSpec`]:
//! reduction polynomial, Weierstrass coefficients, compressed base point and
//! group order. Every backend rejection is mapped onto a decode error; the
//! on-curve check is mandatory, since skipping it would let a malformed
//! container drive all later public-key arithmetic through a meaningless
//! curve.

use crate::{
    asn1::{CurveSpec, PolynomialBasis},
    backend::CurveBackend,
    Error, Result,
};

/// Exponent list of the reduction polynomial, descending, ending with the
/// constant term.
fn reduction_exponents(spec: &CurveSpec) -> ([u32; 5], usize) {
    let m = spec.field.m;
    match spec.field.basis {
        PolynomialBasis::Trinomial(k) => ([m, k, 0, 0, 0], 3),
        PolynomialBasis::Pentanomial(ref p) => ([m, p.k, p.j, p.l, 0], 5),
    }
}

/// Build a curve group with an installed generator from a decoded spec.
pub fn build_group<B: CurveBackend>(backend: &B, spec: &CurveSpec) -> Result<B::Group> {
    let (exponents, count) = reduction_exponents(spec);
    let poly = backend
        .reduction_polynomial(&exponents[..count])
        .ok_or(Error::InvalidCurveSpec)?;

    let a = backend.int_from_i32(spec.a);
    let b = backend.int_from_be_bytes(spec.b.as_bytes());
    let mut group = backend
        .new_curve(&poly, &a, &b)
        .ok_or(Error::InvalidCurveSpec)?;

    let base_point = backend
        .decode_point(&group, spec.base_point.as_bytes())
        .ok_or(Error::PointDecodeFailed)?;
    if !backend.is_on_curve(&group, &base_point) {
        return Err(Error::PointNotOnCurve);
    }

    let order = backend.int_from_be_bytes(spec.order.as_bytes());
    if !backend.set_generator(&mut group, base_point, order) {
        return Err(Error::InvalidCurveSpec);
    }
    Ok(group)
}
