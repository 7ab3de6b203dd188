//! Result and Error types for fetools-expansion

// crate modules
use crate::order::ExpansionOrder;

/// Type alias for Result<T, expansion::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `fetools-expansion` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    #[error("failed to deserialise expansion config")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid basis: {0}")]
    BasisError(#[from] fetools_basis::Error),

    #[error("invalid slice operation: {0}")]
    SliceError(#[from] fetools_utils::Error),

    #[error("expansion orders must be non-negative, found (L={l}, N={n})")]
    NegativeOrder { l: i64, n: i64 },

    #[error("inconsistent number of coefficients (expected {expected:?}, found {found:?})")]
    CoefficientCountMismatch { expected: usize, found: usize },

    #[error("{0} coefficients is not a complete set of Zernike orders")]
    IncompleteZernikeSet(usize),

    #[error("a coefficient set needs at least one Legendre order")]
    EmptyCoefficientSet,

    #[error("mismatched expansion orders (expected {expected}, found {found})")]
    OrderMismatch {
        expected: ExpansionOrder,
        found: ExpansionOrder,
    },

    #[error("mismatched Legendre orders (expected {expected:?}, found {found:?})")]
    LegendreOrdersMismatch {
        expected: std::ops::RangeInclusive<usize>,
        found: std::ops::RangeInclusive<usize>,
    },

    #[error("Legendre order {l} is not part of this expansion")]
    LegendreOrderOutOfRange { l: usize },

    #[error("Zernike index {0} is not part of this expansion")]
    ZernikeIndexOutOfRange(fetools_basis::ZernikeIndex),

    #[error("geometric measure and numerator must be finite, found {numerator}/{measure}")]
    InvalidMeasure { numerator: f64, measure: f64 },

    #[error("a quadrature rule needs at least one point")]
    EmptyQuadrature,

    #[error("accumulation has not been initialised")]
    NotInitialized,

    #[error("accumulation has already been finalised")]
    AlreadyFinalized,

    #[error("coefficients are not available until finalised")]
    NotFinalized,
}
