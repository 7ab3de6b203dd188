//! Quadrature points and rules for the projection integrals
//!
//! A finite element host already owns a quadrature and can hand over its
//! points directly. Everything else can use [cylinder_quadrature()] to
//! integrate a field over the cylinder a basis is normalised on.

// crate modules
use crate::error::{Error, Result};

// standard library
use std::f64::consts::PI;

// external crates
use fetools_basis::ZernikeLegendreBasis;
use log::debug;
use nalgebra::{Point3, Vector3};

/// Field value carried by a quadrature point
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldSample {
    /// Scalar field value, e.g. temperature
    Value(f64),
    /// Diffusive boundary flux `-k |∇T|`
    Flux {
        conductivity: f64,
        gradient: Vector3<f64>,
    },
}

impl FieldSample {
    /// Scalar contribution of the sample
    ///
    /// ```rust
    /// # use fetools_expansion::FieldSample;
    /// # use nalgebra::Vector3;
    /// assert_eq!(FieldSample::Value(3.0).value(), 3.0);
    ///
    /// let flux = FieldSample::Flux {
    ///     conductivity: 2.0,
    ///     gradient: Vector3::new(3.0, 0.0, 4.0),
    /// };
    /// assert_eq!(flux.value(), -10.0);
    /// ```
    pub fn value(&self) -> f64 {
        match self {
            Self::Value(v) => *v,
            Self::Flux {
                conductivity,
                gradient,
            } => -conductivity * gradient.norm(),
        }
    }
}

/// A single weighted point of an element quadrature
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraturePoint {
    /// Physical position
    pub position: Point3<f64>,
    /// Quadrature weight including the Jacobian (JxW)
    pub weight: f64,
    /// Coordinate system scaling, 1 for Cartesian
    pub coord_scale: f64,
    /// Field sampled at the point
    pub sample: FieldSample,
}

impl QuadraturePoint {
    /// Cartesian point sampling a scalar field
    pub fn new(position: Point3<f64>, weight: f64, value: f64) -> Self {
        Self {
            position,
            weight,
            coord_scale: 1.0,
            sample: FieldSample::Value(value),
        }
    }

    /// Cartesian point sampling a diffusive boundary flux
    pub fn flux(position: Point3<f64>, weight: f64, conductivity: f64, gradient: Vector3<f64>) -> Self {
        Self {
            position,
            weight,
            coord_scale: 1.0,
            sample: FieldSample::Flux {
                conductivity,
                gradient,
            },
        }
    }

    /// Replace the coordinate system scaling, e.g. `2πr` for axisymmetric
    pub fn with_coord_scale(mut self, coord_scale: f64) -> Self {
        self.coord_scale = coord_scale;
        self
    }

    /// Product `w · coordScale · field` that multiplies the basis functions
    pub fn weighted_value(&self) -> f64 {
        self.weight * self.coord_scale * self.sample.value()
    }
}

/// Gauss-Legendre rule on `[-1, 1]`
///
/// An `n` point rule integrates polynomials up to degree `2n - 1` exactly.
///
/// ```rust
/// # use fetools_expansion::GaussLegendre;
/// let rule = GaussLegendre::new(3).unwrap();
///
/// // ∫ x^4 dx over [-1, 1] is 2/5
/// let integral: f64 = rule.iter().map(|(x, w)| w * x.powi(4)).sum();
/// assert!((integral - 0.4).abs() < 1e-14);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GaussLegendre {
    nodes: Vec<f64>,
    weights: Vec<f64>,
}

impl GaussLegendre {
    /// Rule with `n` points, nodes sorted ascending
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::EmptyQuadrature);
        }

        let mut nodes = vec![0.0; n];
        let mut weights = vec![0.0; n];

        // roots are symmetric, so only the positive half is refined
        for i in 0..(n + 1) / 2 {
            let mut x = (PI * (i as f64 + 0.75) / (n as f64 + 0.5)).cos();
            for _ in 0..100 {
                let (p, dp) = legendre_and_derivative(n, x);
                let dx = p / dp;
                x -= dx;
                if dx.abs() <= 1e-15 {
                    break;
                }
            }

            let (_, dp) = legendre_and_derivative(n, x);
            let w = 2.0 / ((1.0 - x * x) * dp * dp);

            nodes[i] = -x;
            nodes[n - 1 - i] = x;
            weights[i] = w;
            weights[n - 1 - i] = w;
        }

        Ok(Self { nodes, weights })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn nodes(&self) -> &[f64] {
        &self.nodes
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Iterate `(node, weight)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.nodes.iter().copied().zip(self.weights.iter().copied())
    }

    /// `(node, weight)` pairs mapped onto `[a, b]`
    pub fn reseat(&self, a: f64, b: f64) -> Vec<(f64, f64)> {
        let half = 0.5 * (b - a);
        let mid = 0.5 * (b + a);
        self.iter().map(|(x, w)| (mid + half * x, half * w)).collect()
    }
}

/// `P_n(x)` and its derivative from the three-term recursion
fn legendre_and_derivative(n: usize, x: f64) -> (f64, f64) {
    if n == 0 {
        return (1.0, 0.0);
    }

    let mut p_prev = 1.0;
    let mut p = x;
    for k in 2..=n {
        let k = k as f64;
        let p_next = ((2.0 * k - 1.0) * x * p - (k - 1.0) * p_prev) / k;
        p_prev = p;
        p = p_next;
    }
    let n = n as f64;
    (p, n * (x * p - p_prev) / (x * x - 1.0))
}

/// Quadrature over the full cylinder a basis is normalised on
///
/// Gauss-Legendre in the axial and radial directions, uniform in angle.
/// Products of an `(L, N)` expansion are integrated exactly with
/// `n_axial > L`, `n_radial > N` and `n_azimuthal > 2N`.
///
/// The field is sampled at each physical position. Points are returned as a
/// single element, radial rings innermost.
///
/// ```rust
/// # use fetools_expansion::cylinder_quadrature;
/// # use fetools_basis::{AxialDirection, LegendreBasis, ZernikeBasis, ZernikeLegendreBasis};
/// let basis = ZernikeLegendreBasis::new(
///     LegendreBasis::new(0.0, 3.0).unwrap(),
///     ZernikeBasis::new(1.0, [0.0, 0.0]).unwrap(),
///     AxialDirection::Z,
/// );
/// let points = cylinder_quadrature(&basis, 2, 2, 4, |_| 1.0).unwrap();
/// assert_eq!(points.len(), 16);
///
/// // Weights sum to the volume
/// let volume: f64 = points.iter().map(|p| p.weight).sum();
/// assert!((volume - 3.0 * std::f64::consts::PI).abs() < 1e-12);
/// ```
pub fn cylinder_quadrature<F>(
    basis: &ZernikeLegendreBasis,
    n_axial: usize,
    n_radial: usize,
    n_azimuthal: usize,
    field: F,
) -> Result<Vec<QuadraturePoint>>
where
    F: Fn(&Point3<f64>) -> f64,
{
    if n_azimuthal == 0 {
        return Err(Error::EmptyQuadrature);
    }

    let legendre = basis.legendre();
    let zernike = basis.zernike();
    let direction = basis.direction();
    let [cx, cy] = zernike.center();

    let axial = GaussLegendre::new(n_axial)?.reseat(legendre.z_min(), legendre.z_max());
    let radial = GaussLegendre::new(n_radial)?.reseat(0.0, zernike.radius());
    let d_theta = 2.0 * PI / n_azimuthal as f64;

    let mut points = Vec::with_capacity(axial.len() * radial.len() * n_azimuthal);
    for &(z, wz) in &axial {
        for &(r, wr) in &radial {
            for k in 0..n_azimuthal {
                let theta = k as f64 * d_theta;
                let transverse = (cx + r * theta.cos(), cy + r * theta.sin());
                let position = direction.compose(z, transverse);
                let weight = wz * wr * r * d_theta;
                points.push(QuadraturePoint::new(position, weight, field(&position)));
            }
        }
    }

    debug!(
        "Built {} point cylinder quadrature ({n_axial} axial, {n_radial} radial, {n_azimuthal} azimuthal)",
        points.len()
    );
    Ok(points)
}
