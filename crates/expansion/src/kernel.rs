//! Geometric normalisation of the projection integrals

// crate modules
use crate::error::{Error, Result};

// standard library
use std::f64::consts::PI;

// external crates
use fetools_basis::ZernikeLegendreBasis;
use fetools_utils::FloatExt;
use log::warn;

/// Measures below this magnitude are treated as degenerate geometry
pub const MIN_MEASURE: f64 = 1e-6;

/// Constant factor `G` applied to every projected contribution
///
/// The forward transform integrates `f P̃_l Z_n^m` and multiplies by
/// `G = numerator / measure`, where the measure is the volume or surface
/// area of the domain.
///
/// | Constructor                 | G       | Use                                  |
/// | --------------------------- | ------- | ------------------------------------ |
/// | [volume()](Kernel::volume)  | `2/V`   | Field projection over the cylinder   |
/// | [surface()](Kernel::surface)| `4π/A`  | Boundary flux over the cylinder wall |
///
/// With the volume factor a constant field `c` projects onto
/// `C_0^{0,0} = √2 c`, which reconstructs back to `c` exactly.
///
/// A measure smaller than [MIN_MEASURE] gives `G = 0` with a warning rather
/// than propagating infinities into the coefficients.
///
/// ```rust
/// # use fetools_expansion::Kernel;
/// let kernel = Kernel::volume(4.0).unwrap();
/// assert_eq!(kernel.factor(), 0.5);
///
/// // Degenerate geometry contributes nothing
/// let kernel = Kernel::volume(1e-9).unwrap();
/// assert_eq!(kernel.factor(), 0.0);
/// assert!(kernel.is_degenerate());
///
/// // Non-finite geometry is a mistake
/// assert!(Kernel::volume(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    numerator: f64,
    measure: f64,
    factor: f64,
}

impl Kernel {
    /// Volume projection, `G = 2/V`
    pub fn volume(volume: f64) -> Result<Self> {
        Self::with_numerator(2.0, volume)
    }

    /// Surface flux projection, `G = 4π/A`
    pub fn surface(area: f64) -> Result<Self> {
        Self::with_numerator(4.0 * PI, area)
    }

    /// Volume projection over the full cylinder a basis is normalised on
    ///
    /// ```rust
    /// # use fetools_expansion::Kernel;
    /// # use fetools_basis::{AxialDirection, LegendreBasis, ZernikeBasis, ZernikeLegendreBasis};
    /// let basis = ZernikeLegendreBasis::new(
    ///     LegendreBasis::new(0.0, 2.0).unwrap(),
    ///     ZernikeBasis::new(1.0, [0.0, 0.0]).unwrap(),
    ///     AxialDirection::Z,
    /// );
    /// let kernel = Kernel::cylinder_volume(&basis).unwrap();
    /// assert!((kernel.measure() - 2.0 * std::f64::consts::PI).abs() < 1e-14);
    /// ```
    pub fn cylinder_volume(basis: &ZernikeLegendreBasis) -> Result<Self> {
        let radius = basis.zernike().radius();
        Self::volume(PI * radius * radius * basis.legendre().length())
    }

    /// Surface flux projection over the curved wall a basis is normalised on
    pub fn cylinder_surface(basis: &ZernikeLegendreBasis) -> Result<Self> {
        let radius = basis.zernike().radius();
        Self::surface(2.0 * PI * radius * basis.legendre().length())
    }

    /// Any other convention, `G = numerator / measure`
    pub fn with_numerator(numerator: f64, measure: f64) -> Result<Self> {
        if !numerator.is_finite() || !measure.is_finite() {
            return Err(Error::InvalidMeasure { numerator, measure });
        }

        let factor = numerator
            .guarded_div(measure, MIN_MEASURE)
            .unwrap_or_else(|| {
                warn!("Geometric measure {measure} is below {MIN_MEASURE}, contributions set to zero");
                0.0
            });

        Ok(Self {
            numerator,
            measure,
            factor,
        })
    }

    /// The factor `G`
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Volume or area the factor normalises by
    pub fn measure(&self) -> f64 {
        self.measure
    }

    pub fn numerator(&self) -> f64 {
        self.numerator
    }

    /// True when the measure was too small to normalise by
    pub fn is_degenerate(&self) -> bool {
        self.measure.is_negligible(MIN_MEASURE)
    }
}
