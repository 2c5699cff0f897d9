//! Error types.

use core::fmt;

/// Result type for Key-6 decoding.
pub type Result<T> = core::result::Result<T, Error>;

/// Terminal failures of a single decode call.
///
/// Nothing is retried internally: structural failures are reported before any
/// password-derived computation runs, and per-candidate failures are scoped to
/// one extraction strategy without aborting the other.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The outer container does not parse, is truncated, or is missing a
    /// mandatory field.
    MalformedContainer,
    /// The container's type identifier is not the recognized Key-6 store OID.
    UnsupportedContainerType,
    /// The arithmetic backend rejected the reduction polynomial, the curve
    /// coefficients, or the generator installation.
    InvalidCurveSpec,
    /// The compressed base-point encoding could not be decoded into a point.
    PointDecodeFailed,
    /// The decoded base point does not lie on the constructed curve.
    PointNotOnCurve,
    /// Neither extraction strategy produced a usable key. This is also what a
    /// wrong password looks like: the format carries no integrity check, so
    /// the plaintext is simply garbage that fails to parse.
    NoCandidateKey,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Error::MalformedContainer => "malformed Key-6 container",
            Error::UnsupportedContainerType => "unsupported container type",
            Error::InvalidCurveSpec => "invalid custom curve specification",
            Error::PointDecodeFailed => "base point decoding failed",
            Error::PointNotOnCurve => "base point is not on the curve",
            Error::NoCandidateKey => "no candidate key could be extracted",
        })
    }
}

impl core::error::Error for Error {}
