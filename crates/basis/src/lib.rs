//! Normalised polynomial bases for Zernike-Legendre expansions
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod axis;
mod basis;
mod combinatorics;
mod error;
mod legendre;
mod zernike;

#[doc(inline)]
pub use combinatorics::{
    factorial, is_valid_coeff_count, num_zernike_terms, zernike_indices,
    zernike_order_from_coeff_count, ZernikeIndex,
};

#[doc(inline)]
pub use axis::AxialDirection;

#[doc(inline)]
pub use basis::ZernikeLegendreBasis;

#[doc(inline)]
pub use legendre::LegendreBasis;

#[doc(inline)]
pub use zernike::ZernikeBasis;

#[doc(inline)]
pub use error::{Error, Result};
