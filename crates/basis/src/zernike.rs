//! Normalised Zernike polynomials over a disk

// crate modules
use crate::combinatorics::{factorial_f64, zernike_indices, ZernikeIndex};
use crate::error::{Error, Result};

// external crates
use log::{trace, warn};

/// Normalised Zernike polynomials over a disk in the transverse plane
///
/// Zernike polynomials are orthogonal on the unit disk. The physical disk is
/// described by its `radius` and `center`, and every `(x, y)` coordinate is
/// shifted and scaled onto the unit disk before evaluation.
///
/// The normalisation is chosen such that
///
/// ```text
/// ∫∫ Z_i Z_j dA' = π δ_ij      over the unit disk
/// ```
///
/// with
///
/// | Azimuthal order | Factor                      |
/// | --------------- | --------------------------- |
/// | m = 0           | sqrt(n + 1)                 |
/// | m < 0           | -sqrt(2(n + 1)) sin(m θ)    |
/// | m > 0           | sqrt(2(n + 1)) cos(m θ)     |
///
/// multiplying the radial polynomial `R_n^|m|(r)`.
///
/// ```rust
/// # use fetools_basis::ZernikeBasis;
/// let zernike = ZernikeBasis::new(0.5, [1.0, 1.0]).unwrap();
///
/// // Piston term is unity everywhere on the disk
/// assert_eq!(zernike.value(0, 0, 1.2, 0.9).unwrap(), 1.0);
///
/// // Invalid (n, m) combinations are rejected
/// assert!(zernike.value(1, 2, 1.2, 0.9).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZernikeBasis {
    radius: f64,
    center: [f64; 2],
}

impl ZernikeBasis {
    /// Basis normalised over a disk of `radius` at `center`
    pub fn new(radius: f64, center: [f64; 2]) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(Error::InvalidZernikeRadius(radius));
        }
        if !center.iter().all(|c| c.is_finite()) {
            return Err(Error::InvalidZernikeCenter(center[0], center[1]));
        }
        Ok(Self { radius, center })
    }

    /// Radius of the normalisation disk
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Centre of the normalisation disk
    pub fn center(&self) -> [f64; 2] {
        self.center
    }

    /// Check whether `(x, y)` lies on or within the disk
    ///
    /// Squared distance is compared against the squared radius.
    ///
    /// ```rust
    /// # use fetools_basis::ZernikeBasis;
    /// let zernike = ZernikeBasis::new(2.0, [0.0, 0.0]).unwrap();
    /// assert!(zernike.contains(2.0, 0.0));
    /// assert!(zernike.contains(1.5, 1.0));
    /// assert!(!zernike.contains(1.5, 1.5));
    /// ```
    pub fn contains(&self, x: f64, y: f64) -> bool {
        let dx = x - self.center[0];
        let dy = y - self.center[1];
        dx * dx + dy * dy <= self.radius * self.radius
    }

    /// Polar coordinates `(r, θ)` of `(x, y)` on the unit disk
    #[inline]
    pub fn normalize(&self, x: f64, y: f64) -> (f64, f64) {
        let x_norm = (x - self.center[0]) / self.radius;
        let y_norm = (y - self.center[1]) / self.radius;
        (x_norm.hypot(y_norm), y_norm.atan2(x_norm))
    }

    /// Zernike polynomial `Z_n^m` at physical coordinates `(x, y)`
    ///
    /// Requires `n >= 0`, `|m| <= n` and `n - |m|` even, anything else is an
    /// error. A point outside of the disk is only a warning, and the
    /// extrapolated value is still returned.
    pub fn value(&self, m: i32, n: i32, x: f64, y: f64) -> Result<f64> {
        let index = ZernikeIndex::new(n, m)?;
        self.check_within_disk(x, y);
        let (r, theta) = self.normalize(x, y);
        Ok(evaluate(index, r, theta))
    }

    /// Every term up to order `n_order` at `(x, y)`, in canonical order
    ///
    /// ```rust
    /// # use fetools_basis::{num_zernike_terms, ZernikeBasis};
    /// let zernike = ZernikeBasis::new(1.0, [0.0, 0.0]).unwrap();
    /// let values = zernike.values(3, 0.3, -0.4);
    /// assert_eq!(values.len(), num_zernike_terms(3));
    ///
    /// // (n=2, m=0) sits at position 4
    /// let z20 = zernike.value(0, 2, 0.3, -0.4).unwrap();
    /// assert!((values[4] - z20).abs() < 1e-14);
    /// ```
    pub fn values(&self, n_order: usize, x: f64, y: f64) -> Vec<f64> {
        self.check_within_disk(x, y);
        let (r, theta) = self.normalize(x, y);
        zernike_indices(n_order)
            .map(|index| evaluate(index, r, theta))
            .collect()
    }

    fn check_within_disk(&self, x: f64, y: f64) {
        if !self.contains(x, y) {
            warn!(
                "Point ({x}, {y}) is outside of the Zernike disk (radius {} at [{}, {}])",
                self.radius, self.center[0], self.center[1]
            );
        }
    }
}

/// Evaluate a valid index at unit-disk polar coordinates
fn evaluate(index: ZernikeIndex, r: f64, theta: f64) -> f64 {
    let factor = angular_factor(index, theta);
    let radial = radial_polynomial(index.n, index.m_abs(), r);
    trace!("Zernike {index} at r={r}, theta={theta}: factor={factor}, radial={radial}");
    factor * radial
}

/// Normalisation factor combined with the azimuthal dependence
fn angular_factor(index: ZernikeIndex, theta: f64) -> f64 {
    let n1 = f64::from(index.n + 1);
    let m_theta = f64::from(index.m) * theta;
    match index.m {
        0 => n1.sqrt(),
        m if m < 0 => -(2.0 * n1).sqrt() * m_theta.sin(),
        _ => (2.0 * n1).sqrt() * m_theta.cos(),
    }
}

/// Radial polynomial `R_n^m(r)` for `m >= 0`
///
/// ```text
/// R_n^m(r) = Σ_{s=0}^{(n-m)/2} (-1)^s (n-s)! / [s! ((n+m)/2 - s)! ((n-m)/2 - s)!] r^(n-2s)
/// ```
fn radial_polynomial(n: u32, m: u32, r: f64) -> f64 {
    let half_sum = (n + m) / 2;
    let half_diff = (n - m) / 2;

    (0..=half_diff)
        .map(|s| {
            let sign = if s % 2 == 0 { 1.0 } else { -1.0 };
            let coefficient = factorial_f64(n - s)
                / (factorial_f64(s) * factorial_f64(half_sum - s) * factorial_f64(half_diff - s));
            sign * coefficient * r.powi((n - 2 * s) as i32)
        })
        .sum()
}
