//! Result and Error types for fetools-coupling

// crate modules
use crate::status::{Operation, SolverStatus, Subject};

// external crates
use fetools_expansion::ExpansionOrder;

/// Type alias for Result<T, coupling::Error>
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `fetools-coupling` crate
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("expansion error: {0}")]
    ExpansionError(#[from] fetools_expansion::Error),

    #[error("{operation} failed for {subject}: {status}")]
    Solver {
        operation: Operation,
        subject: Subject,
        status: SolverStatus,
    },

    #[error("inconsistent number of coefficients for cell {cell} (expected {expected:?}, found {found:?})")]
    CoefficientCountMismatch {
        cell: i32,
        expected: usize,
        found: usize,
    },

    #[error("coefficients of order {found} cannot be sent to cell {cell} expecting {expected}")]
    OrderMismatch {
        cell: i32,
        expected: ExpansionOrder,
        found: ExpansionOrder,
    },

    #[error("every fluid layer needs one cell and one material, found {cells} cells and {materials} materials")]
    CellMaterialMismatch { cells: usize, materials: usize },

    #[error("number of fluid layers does not match (expected {expected:?}, found {found:?})")]
    LayerCountMismatch { expected: usize, found: usize },

    #[error("k-effective must be positive and finite, found {0}")]
    InvalidKeff(f64),

    #[error("number of Fourier orders does not match (expected {expected:?}, found {found:?})")]
    FourierCountMismatch { expected: usize, found: usize },

    #[error("Fourier order {fourier} has {found:?} Legendre coefficients, expected {expected:?}")]
    LegendreLengthMismatch {
        fourier: usize,
        expected: usize,
        found: usize,
    },

    #[error("stride {stride} cannot hold {n_legendre} Legendre coefficients per Fourier order")]
    StrideTooSmall { stride: usize, n_legendre: usize },
}
