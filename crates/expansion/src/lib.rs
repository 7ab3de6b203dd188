//! Forward and inverse Zernike-Legendre functional expansions
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod coefficients;
mod config;
mod deconstruction;
mod error;
mod kernel;
mod order;
mod quadrature;
mod reconstruction;

#[doc(inline)]
pub use coefficients::{CoefficientSet, CoefficientVector};

#[doc(inline)]
pub use config::ExpansionConfig;

#[doc(inline)]
pub use deconstruction::{Deconstruction, LocalReduction, Reduction};

#[doc(inline)]
pub use kernel::{Kernel, MIN_MEASURE};

#[doc(inline)]
pub use order::ExpansionOrder;

#[doc(inline)]
pub use quadrature::{cylinder_quadrature, FieldSample, GaussLegendre, QuadraturePoint};

#[doc(inline)]
pub use reconstruction::Reconstruction;

#[doc(inline)]
pub use error::{Error, Result};
