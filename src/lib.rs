//! `fetools` is a small toolkit for Zernike-Legendre functional expansions
//! used to couple neutronics and thermal-hydraulics solvers
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use fetools_utils as utils;

#[cfg(feature = "basis")]
#[cfg_attr(docsrs, doc(cfg(feature = "basis")))]
#[doc(inline)]
pub use fetools_basis as basis;

#[cfg(feature = "coupling")]
#[cfg_attr(docsrs, doc(cfg(feature = "coupling")))]
#[doc(inline)]
pub use fetools_coupling as coupling;

#[cfg(feature = "expansion")]
#[cfg_attr(docsrs, doc(cfg(feature = "expansion")))]
#[doc(inline)]
pub use fetools_expansion as expansion;
