//! Translation of raw solver status codes

// crate modules
use crate::error::{Error, Result};

// external crates
use log::warn;

/// How seriously a non-zero status should be taken
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Severity {
    /// The operation did not happen, nothing downstream can be trusted
    Fatal,
    /// The operation completed but the solver had something to say
    Warning,
}

/// Status codes returned by the transport solver C API
///
/// The general routines share one table of codes.
///
/// | Code | Status            |
/// | ---- | ----------------- |
/// | 0    | Ok                |
/// | -1   | Unassigned        |
/// | -2   | Allocate          |
/// | -3   | OutOfBounds       |
/// | -4   | InvalidSize       |
/// | -5   | InvalidArgument   |
/// | -6   | InvalidType       |
/// | -7   | InvalidId         |
/// | -8   | Geometry          |
/// | -9   | Data              |
/// | -10  | Physics           |
/// | 1    | Warning           |
///
/// The two expansion coefficient routines give the first three codes their
/// own meaning, see [from_code()](SolverStatus::from_code).
///
/// | Code | Status                  |
/// | ---- | ----------------------- |
/// | -1   | InvalidCell             |
/// | -2   | CoefficientSizeMismatch |
/// | -3   | NoExpansionTally        |
///
/// Anything else is kept as [SolverStatus::Unknown] and treated as fatal.
///
/// ```rust
/// # use fetools_coupling::{Severity, SolverStatus};
/// assert_eq!(SolverStatus::from(0), SolverStatus::Ok);
/// assert_eq!(SolverStatus::from(-7), SolverStatus::InvalidId);
/// assert_eq!(SolverStatus::from(-7).severity(), Some(Severity::Fatal));
/// assert_eq!(SolverStatus::from(1).severity(), Some(Severity::Warning));
/// assert_eq!(SolverStatus::from(42).code(), 42);
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum SolverStatus {
    Ok,
    Unassigned,
    Allocate,
    OutOfBounds,
    InvalidSize,
    InvalidArgument,
    InvalidType,
    InvalidId,
    Geometry,
    Data,
    Physics,
    Warning,
    /// No expansion tally is set up for the requested cell
    InvalidCell,
    /// Array length differs from the number of coefficients the solver holds
    CoefficientSizeMismatch,
    /// No kappa-fission-zn tally is defined at all
    NoExpansionTally,
    Unknown(i32),
}

impl SolverStatus {
    /// Translate a raw code as returned by a specific operation
    ///
    /// ```rust
    /// # use fetools_coupling::{Operation, SolverStatus};
    /// assert_eq!(
    ///     SolverStatus::from_code(-1, Operation::GetCoefficients),
    ///     SolverStatus::InvalidCell
    /// );
    /// assert_eq!(
    ///     SolverStatus::from_code(-1, Operation::SetTemperature),
    ///     SolverStatus::Unassigned
    /// );
    /// ```
    pub fn from_code(code: i32, operation: Operation) -> Self {
        if !operation.is_coefficient_routine() {
            return Self::from(code);
        }

        match code {
            -1 => Self::InvalidCell,
            -2 => Self::CoefficientSizeMismatch,
            -3 => Self::NoExpansionTally,
            _ => Self::from(code),
        }
    }

    /// Raw code as returned by the solver
    pub fn code(&self) -> i32 {
        match self {
            Self::Ok => 0,
            Self::Unassigned | Self::InvalidCell => -1,
            Self::Allocate | Self::CoefficientSizeMismatch => -2,
            Self::OutOfBounds | Self::NoExpansionTally => -3,
            Self::InvalidSize => -4,
            Self::InvalidArgument => -5,
            Self::InvalidType => -6,
            Self::InvalidId => -7,
            Self::Geometry => -8,
            Self::Data => -9,
            Self::Physics => -10,
            Self::Warning => 1,
            Self::Unknown(code) => *code,
        }
    }

    /// `None` for success, otherwise fatal or a warning
    pub fn severity(&self) -> Option<Severity> {
        match self {
            Self::Ok => None,
            Self::Warning => Some(Severity::Warning),
            _ => Some(Severity::Fatal),
        }
    }

    /// Short description of what went wrong
    pub fn description(&self) -> &str {
        match self {
            Self::Ok => "success",
            Self::Unassigned => "memory has not been allocated",
            Self::Allocate => "memory could not be allocated",
            Self::OutOfBounds => "index is out of bounds",
            Self::InvalidSize => "array size does not match",
            Self::InvalidArgument => "invalid argument",
            Self::InvalidType => "invalid type",
            Self::InvalidId => "invalid identifier",
            Self::Geometry => "geometry error",
            Self::Data => "data error",
            Self::Physics => "physics error",
            Self::Warning => "warning",
            Self::InvalidCell => "invalid cell for kappa-fission-zn expansion coefficients",
            Self::CoefficientSizeMismatch => {
                "number of expansion coefficients does not match the allocated size"
            }
            Self::NoExpansionTally => "no kappa-fission-zn tallies are defined",
            Self::Unknown(_) => "unrecognised status code",
        }
    }
}

/// Generic table only, use [SolverStatus::from_code()] for a known operation
impl From<i32> for SolverStatus {
    fn from(code: i32) -> Self {
        match code {
            0 => Self::Ok,
            -1 => Self::Unassigned,
            -2 => Self::Allocate,
            -3 => Self::OutOfBounds,
            -4 => Self::InvalidSize,
            -5 => Self::InvalidArgument,
            -6 => Self::InvalidType,
            -7 => Self::InvalidId,
            -8 => Self::Geometry,
            -9 => Self::Data,
            -10 => Self::Physics,
            1 => Self::Warning,
            _ => Self::Unknown(code),
        }
    }
}

impl std::fmt::Display for SolverStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} (code {})", self.description(), self.code())
    }
}

/// Solver operation a status code came back from
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operation {
    /// Hand expansion coefficients to the solver for a cell
    ReceiveCoefficients,
    /// Retrieve tallied expansion coefficients for a cell
    GetCoefficients,
    /// Set the temperature used for cross sections in a cell
    SetTemperature,
    /// Look up the internal index of a cell
    GetCellIndex,
    /// Look up the internal index of a material
    GetMaterialIndex,
    /// Set the atom density of a material
    SetMaterialDensity,
    /// Retrieve the combined k-effective estimate
    GetKeff,
}

impl Operation {
    /// Name of the C API routine
    pub fn name(&self) -> &str {
        match self {
            Self::ReceiveCoefficients => "receive_coeffs_for_cell",
            Self::GetCoefficients => "get_coeffs_from_cell",
            Self::SetTemperature => "cell_set_temperature",
            Self::GetCellIndex => "get_cell_index",
            Self::GetMaterialIndex => "get_material_index",
            Self::SetMaterialDensity => "material_set_density",
            Self::GetKeff => "get_keff",
        }
    }

    /// True for the two routines with their own status codes
    pub fn is_coefficient_routine(&self) -> bool {
        matches!(self, Self::ReceiveCoefficients | Self::GetCoefficients)
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// What a solver operation acted on, by user-facing identifier
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Subject {
    Cell(i32),
    Material(i32),
    /// Global quantities such as the eigenvalue
    Problem,
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Cell(id) => write!(f, "cell {id}"),
            Self::Material(id) => write!(f, "material {id}"),
            Self::Problem => write!(f, "the problem"),
        }
    }
}

/// Translate a raw status code for an operation on a subject
///
/// Fatal codes become an [Error::Solver] naming the operation and what it
/// acted on. Warnings are logged and handed back so callers can act on them,
/// and a clean return gives `None`.
///
/// ```rust
/// # use fetools_coupling::{check, Operation, SolverStatus, Subject};
/// assert_eq!(check(0, Operation::SetTemperature, Subject::Cell(12)).unwrap(), None);
/// assert_eq!(
///     check(1, Operation::SetTemperature, Subject::Cell(12)).unwrap(),
///     Some(SolverStatus::Warning)
/// );
///
/// let error = check(-7, Operation::SetTemperature, Subject::Cell(12)).unwrap_err();
/// assert_eq!(
///     error.to_string(),
///     "cell_set_temperature failed for cell 12: invalid identifier (code -7)"
/// );
/// ```
pub fn check(code: i32, operation: Operation, subject: Subject) -> Result<Option<SolverStatus>> {
    let status = SolverStatus::from_code(code, operation);
    match status.severity() {
        None => Ok(None),
        Some(Severity::Warning) => {
            warn!("{operation} for {subject} returned {status}");
            Ok(Some(status))
        }
        Some(Severity::Fatal) => Err(Error::Solver {
            operation,
            subject,
            status,
        }),
    }
}
