//! Result and Error types for fetools-basis

/// Type alias for Result<T, basis::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `fetools-basis` crate
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("factorial of {0} does not fit in a u64")]
    FactorialOverflow(u32),

    #[error("invalid Zernike index (n={n}, m={m}), expected n >= 0, |m| <= n, and n - |m| even")]
    InvalidZernikeIndex { n: i32, m: i32 },

    #[error("invalid Legendre normalisation interval (min={z_min}, max={z_max})")]
    InvalidLegendreInterval { z_min: f64, z_max: f64 },

    #[error("invalid Zernike normalisation radius {0}")]
    InvalidZernikeRadius(f64),

    #[error("invalid Zernike disk centre ({0}, {1})")]
    InvalidZernikeCenter(f64, f64),

    #[error("no Zernike order has zero coefficients")]
    EmptyCoefficientCount,

    #[error("failed to infer axial direction from \"{0}\"")]
    FailedToInferDirection(String),
}
