//! Common utility for extended `std` types
//!
//! These are left public for convenience.
//!
//! Scientific formatting of coefficients, guarded division by geometry
//! normalisers, and elementwise accumulation of float slices are useful
//! everywhere in the toolkit.

// Alias for the format! macro
pub use std::format as f;

// Modules
mod error;
mod slice_ext;
mod value_ext;

// Flatten
pub use error::{Error, Result};
pub use slice_ext::SliceExt;
pub use value_ext::{FloatExt, ValueExt};
