//! Orthonormal Legendre polynomials over a physical interval

// crate modules
use crate::error::{Error, Result};

// standard library
use std::f64::consts::FRAC_1_SQRT_2;

// external crates
use log::trace;

/// Orthonormal Legendre polynomials along one axis
///
/// Legendre polynomials are only orthogonal on `[-1, 1]`, so the physical
/// interval `[z_min, z_max]` over which the expansion applies is mapped onto
/// it first. Values are scaled by `sqrt((2l + 1)/2)` so that
///
/// ```text
/// ∫ P̃_i(z') P̃_j(z') dz' = δ_ij      for z' in [-1, 1]
/// ```
///
/// and the expansion coefficients do not need to carry these factors around.
///
/// The interval should match whatever the coupled solver uses for its own
/// expansion, or the coefficients will not mean the same thing on both sides.
///
/// ```rust
/// # use fetools_basis::LegendreBasis;
/// # use std::f64::consts::FRAC_1_SQRT_2;
/// let legendre = LegendreBasis::new(0.0, 100.0).unwrap();
///
/// // Endpoints map to -1 and +1
/// assert_eq!(legendre.normalize(0.0), -1.0);
/// assert_eq!(legendre.normalize(100.0), 1.0);
///
/// // Zeroth order is constant
/// assert_eq!(legendre.value(0, 42.0), FRAC_1_SQRT_2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendreBasis {
    z_min: f64,
    z_max: f64,
}

impl LegendreBasis {
    /// Basis normalised over `[z_min, z_max]`
    ///
    /// Fails for non-finite bounds or `z_max <= z_min`, which would otherwise
    /// divide by zero or flip the axis.
    pub fn new(z_min: f64, z_max: f64) -> Result<Self> {
        if !z_min.is_finite() || !z_max.is_finite() || z_max <= z_min {
            return Err(Error::InvalidLegendreInterval { z_min, z_max });
        }
        Ok(Self { z_min, z_max })
    }

    /// Lower bound of the normalisation interval
    pub fn z_min(&self) -> f64 {
        self.z_min
    }

    /// Upper bound of the normalisation interval
    pub fn z_max(&self) -> f64 {
        self.z_max
    }

    /// Length of the normalisation interval
    pub fn length(&self) -> f64 {
        self.z_max - self.z_min
    }

    /// Map a physical coordinate onto the canonical `[-1, 1]` interval
    #[inline]
    pub fn normalize(&self, z: f64) -> f64 {
        2.0 * (z - self.z_min) / self.length() - 1.0
    }

    /// Orthonormal Legendre polynomial of `order` at physical coordinate `z`
    ///
    /// Orders of two and above use the three-term recursion
    ///
    /// ```text
    /// P_l(z) = [(2l - 1) z P_{l-1}(z) - (l - 1) P_{l-2}(z)] / l
    /// ```
    ///
    /// starting from `P_0 = 1` and `P_1 = z`.
    pub fn value(&self, order: usize, z: f64) -> f64 {
        let x = self.normalize(z);
        trace!("Legendre l={order} at z={z} (normalised {x})");

        match order {
            0 => FRAC_1_SQRT_2,
            1 => orthonormal_scale(1) * x,
            _ => {
                let mut p_prev = 1.0; // P_{l-2}
                let mut p_curr = x; // P_{l-1}
                for l in 2..=order {
                    let p_next = next_legendre(l, x, p_curr, p_prev);
                    p_prev = p_curr;
                    p_curr = p_next;
                }
                orthonormal_scale(order) * p_curr
            }
        }
    }

    /// Every order from `0` to `max_order` at physical coordinate `z`
    ///
    /// Runs the recursion once rather than once per order, and gives the same
    /// values as calling [value()](LegendreBasis::value) for each.
    ///
    /// ```rust
    /// # use fetools_basis::LegendreBasis;
    /// let legendre = LegendreBasis::new(-5.0, 5.0).unwrap();
    /// let values = legendre.values(4, 1.3);
    ///
    /// assert_eq!(values.len(), 5);
    /// for (l, v) in values.iter().enumerate() {
    ///     assert!((v - legendre.value(l, 1.3)).abs() < 1e-14);
    /// }
    /// ```
    pub fn values(&self, max_order: usize, z: f64) -> Vec<f64> {
        let x = self.normalize(z);
        let mut values = Vec::with_capacity(max_order + 1);

        // unnormalised values first, scaled at the end
        values.push(1.0);
        if max_order >= 1 {
            values.push(x);
        }
        for l in 2..=max_order {
            let p = next_legendre(l, x, values[l - 1], values[l - 2]);
            values.push(p);
        }

        for (l, v) in values.iter_mut().enumerate() {
            *v *= orthonormal_scale(l);
        }
        values
    }
}

/// One step of the three-term recursion for order `l`
#[inline]
fn next_legendre(l: usize, x: f64, p_lm1: f64, p_lm2: f64) -> f64 {
    let l = l as f64;
    ((2.0 * l - 1.0) * x * p_lm1 - (l - 1.0) * p_lm2) / l
}

/// Orthonormality factor on `[-1, 1]`
#[inline]
fn orthonormal_scale(l: usize) -> f64 {
    ((2 * l + 1) as f64 / 2.0).sqrt()
}
