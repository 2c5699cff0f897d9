#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod asn1;
pub mod backend;
pub mod codec;
pub mod kdf;

mod curve;
mod error;
mod extract;
mod gost;
mod store;

pub use cipher;
pub use der;
pub use digest;
pub use gost94;
pub use magma;
pub use pkcs8;
pub use zeroize;

pub use backend::{CandidateKey, CurveBackend, KeyEncoding};
pub use curve::build_group;
pub use error::{Error, Result};
pub use extract::extract;
#[cfg(feature = "std")]
pub use store::read;
pub use store::{parse, parse_with};

use der::asn1::ObjectIdentifier;

/// Type identifier of the IIT Key-6 store; anything else is rejected before
/// any password-derived computation runs.
pub const KEY6_STORE_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.19398.1.1.1.2");

/// Attribute carrying the embedded custom curve specification.
pub const CURVE_SPEC_ATTR_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.19398.1.1.2.2");

/// Attribute carrying the bit/byte-reversed private-key value.
pub const PRIVATE_KEY_ATTR_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.3.6.1.4.1.19398.1.1.2.3");

/// DSTU 4145-2002 signature algorithm, little-endian parameter convention.
pub const DSTU4145_LE_OID: ObjectIdentifier =
    ObjectIdentifier::new_unwrap("1.2.804.2.1.1.1.1.3.1.1");
