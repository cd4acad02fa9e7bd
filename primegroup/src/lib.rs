#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![forbid(unsafe_code)]
#![warn(
    clippy::mod_module_files,
    clippy::unwrap_used,
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications
)]

//! ## `serde` support
//!
//! When the `serde` feature of this crate is enabled, `Serialize` and
//! `Deserialize` are impl'd for [`Point`] and [`Scalar`] using their
//! fixed-width byte encodings.

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod curve;

mod error;
mod group;
mod params;
mod point;
mod scalar;

pub use crate::{
    curve::{CurveArithmetic, NistP256, PrimeCurve},
    error::{Error, Result},
    group::Group,
    params::CurveParams,
    point::Point,
    scalar::Scalar,
};
pub use elliptic_curve::{self, rand_core};
pub use num_bigint::{self, BigUint};
