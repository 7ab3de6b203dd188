//! Inverse transform, evaluating a field from its coefficients

// crate modules
use crate::coefficients::CoefficientSet;

// external crates
use fetools_basis::ZernikeLegendreBasis;
use itertools::izip;
use nalgebra::Point3;
use rayon::prelude::*;

/// Evaluates an expanded field anywhere in the domain
///
/// ```text
/// f(p) = Σ_l Σ_n Σ_m C_l^{n,m} P̃_l(axial(p)) Z_n^m(transverse(p))
/// ```
///
/// Reconstruction is pure and holds no mutable state, so a single instance
/// can be shared between any number of threads.
///
/// ```rust
/// # use fetools_basis::{AxialDirection, LegendreBasis, ZernikeBasis, ZernikeLegendreBasis};
/// # use fetools_expansion::{CoefficientSet, ExpansionOrder, Reconstruction};
/// # use nalgebra::Point3;
/// let basis = ZernikeLegendreBasis::new(
///     LegendreBasis::new(0.0, 1.0).unwrap(),
///     ZernikeBasis::new(1.0, [0.0, 0.0]).unwrap(),
///     AxialDirection::Z,
/// );
///
/// // A constant field of 2.0 is C_0^{0,0} = 2√2
/// let coefficients = CoefficientSet::from_flat(
///     ExpansionOrder::new(0, 0),
///     &[2.0 * 2.0_f64.sqrt()],
/// ).unwrap();
///
/// let field = Reconstruction::new(basis, coefficients);
/// let value = field.value(&Point3::new(0.2, 0.1, 0.7));
/// assert!((value - 2.0).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Reconstruction {
    basis: ZernikeLegendreBasis,
    coefficients: CoefficientSet,
}

impl Reconstruction {
    pub fn new(basis: ZernikeLegendreBasis, coefficients: CoefficientSet) -> Self {
        Self {
            basis,
            coefficients,
        }
    }

    pub fn basis(&self) -> &ZernikeLegendreBasis {
        &self.basis
    }

    pub fn coefficients(&self) -> &CoefficientSet {
        &self.coefficients
    }

    /// Field value at a physical point
    pub fn value(&self, point: &Point3<f64>) -> f64 {
        let order = self.coefficients.order();
        let legendre = self.basis.legendre_values(order.l_order, point);
        let zernike = self.basis.zernike_values(order.n_order, point);

        izip!(self.coefficients.vectors(), &legendre)
            .map(|(vector, p_l)| {
                let transverse: f64 = izip!(vector.as_slice(), &zernike)
                    .map(|(c, z)| c * z)
                    .sum();
                p_l * transverse
            })
            .sum()
    }

    /// Field values at many points, evaluated in parallel
    pub fn values_par(&self, points: &[Point3<f64>]) -> Vec<f64> {
        points.par_iter().map(|p| self.value(p)).collect()
    }

    /// Volume average of the field over the normalisation cylinder
    pub fn domain_average(&self) -> f64 {
        self.coefficients.domain_average()
    }
}
