//! Combined Legendre by Zernike basis for a physical domain

// crate modules
use crate::axis::AxialDirection;
use crate::combinatorics::ZernikeIndex;
use crate::error::Result;
use crate::legendre::LegendreBasis;
use crate::zernike::ZernikeBasis;

// external crates
use nalgebra::Point3;

/// Legendre along one axis, Zernike over the plane of the other two
///
/// This is constructed once with fixed normalisation geometry and handed by
/// reference to anything that projects or reconstructs fields. It is a plain
/// read-only evaluator and is safe to share between threads.
///
/// ```rust
/// # use fetools_basis::{AxialDirection, LegendreBasis, ZernikeBasis, ZernikeLegendreBasis};
/// # use nalgebra::Point3;
/// let basis = ZernikeLegendreBasis::new(
///     LegendreBasis::new(0.0, 10.0).unwrap(),
///     ZernikeBasis::new(0.5, [0.0, 0.0]).unwrap(),
///     AxialDirection::Z,
/// );
///
/// let point = Point3::new(0.1, -0.2, 5.0);
/// assert_eq!(basis.legendre_values(2, &point).len(), 3);
/// assert_eq!(basis.zernike_values(2, &point).len(), 6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZernikeLegendreBasis {
    legendre: LegendreBasis,
    zernike: ZernikeBasis,
    direction: AxialDirection,
}

impl ZernikeLegendreBasis {
    /// Combine the two bases for a given axial direction
    pub fn new(legendre: LegendreBasis, zernike: ZernikeBasis, direction: AxialDirection) -> Self {
        Self {
            legendre,
            zernike,
            direction,
        }
    }

    /// The axial Legendre basis
    pub fn legendre(&self) -> &LegendreBasis {
        &self.legendre
    }

    /// The transverse Zernike basis
    pub fn zernike(&self) -> &ZernikeBasis {
        &self.zernike
    }

    /// Axis along which the Legendre expansion applies
    pub fn direction(&self) -> AxialDirection {
        self.direction
    }

    /// Whether the point lies within the cylinder the basis is normalised over
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        let (axial, (x, y)) = self.direction.split(point);
        let within_axis = axial >= self.legendre.z_min() && axial <= self.legendre.z_max();
        within_axis && self.zernike.contains(x, y)
    }

    /// Every Legendre order from `0` to `l_order` at the point
    pub fn legendre_values(&self, l_order: usize, point: &Point3<f64>) -> Vec<f64> {
        let (axial, _) = self.direction.split(point);
        self.legendre.values(l_order, axial)
    }

    /// Every Zernike term up to `n_order` at the point, in canonical order
    pub fn zernike_values(&self, n_order: usize, point: &Point3<f64>) -> Vec<f64> {
        let (_, (x, y)) = self.direction.split(point);
        self.zernike.values(n_order, x, y)
    }

    /// Single product term `P̃_l(axial) Z_n^m(x', y')` at the point
    ///
    /// Fails only for an invalid Zernike index.
    pub fn value(&self, l: usize, index: ZernikeIndex, point: &Point3<f64>) -> Result<f64> {
        let (axial, (x, y)) = self.direction.split(point);
        let zernike = self.zernike.value(index.m, index.n as i32, x, y)?;
        Ok(self.legendre.value(l, axial) * zernike)
    }
}
