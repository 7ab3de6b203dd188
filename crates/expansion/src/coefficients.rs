//! Coefficient storage and the canonical flat layout

// crate modules
use crate::error::{Error, Result};
use crate::order::ExpansionOrder;

// standard library
use std::f64::consts::SQRT_2;

// external crates
use fetools_basis::{
    is_valid_coeff_count, num_zernike_terms, zernike_indices, zernike_order_from_coeff_count,
    ZernikeIndex,
};
use fetools_utils::ValueExt;
use itertools::Itertools;

/// Zernike coefficients for a single Legendre order
///
/// Always holds exactly `T(N)` values in canonical order, `n` ascending and
/// then `m` ascending in steps of 2.
///
/// ```rust
/// # use fetools_expansion::CoefficientVector;
/// # use fetools_basis::ZernikeIndex;
/// let v = CoefficientVector::try_from_vec(vec![1.0, 0.0, 0.0, 0.0, 0.5, 0.0]).unwrap();
/// assert_eq!(v.n_order(), 2);
///
/// let z20 = ZernikeIndex::new(2, 0).unwrap();
/// assert_eq!(v.get(z20), Some(0.5));
///
/// // Five coefficients cannot be a full set of Zernike orders
/// assert!(CoefficientVector::try_from_vec(vec![0.0; 5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientVector {
    n_order: usize,
    values: Vec<f64>,
}

impl CoefficientVector {
    /// All zero coefficients up to radial order `n_order`
    pub fn zeros(n_order: usize) -> Self {
        Self {
            n_order,
            values: vec![0.0; num_zernike_terms(n_order)],
        }
    }

    /// Wrap values for a known radial order, the length must be exactly `T(N)`
    pub fn from_vec(values: Vec<f64>, n_order: usize) -> Result<Self> {
        let expected = num_zernike_terms(n_order);
        if values.len() != expected {
            return Err(Error::CoefficientCountMismatch {
                expected,
                found: values.len(),
            });
        }
        Ok(Self { n_order, values })
    }

    /// Wrap values, inferring the radial order from the length
    pub fn try_from_vec(values: Vec<f64>) -> Result<Self> {
        if !is_valid_coeff_count(values.len()) {
            return Err(Error::IncompleteZernikeSet(values.len()));
        }
        let n_order = zernike_order_from_coeff_count(values.len())?;
        Ok(Self { n_order, values })
    }

    /// Highest radial order `N`
    pub fn n_order(&self) -> usize {
        self.n_order
    }

    /// Number of coefficients, `T(N)`
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Never true, order zero still holds the piston term
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Coefficient for a specific `(n, m)` term
    pub fn get(&self, index: ZernikeIndex) -> Option<f64> {
        self.values.get(index.position()).copied()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Iterate `(index, coefficient)` pairs in canonical order
    pub fn terms(&self) -> impl Iterator<Item = (ZernikeIndex, f64)> + '_ {
        zernike_indices(self.n_order).zip(self.values.iter().copied())
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

/// Complete set of coefficients, one [CoefficientVector] per Legendre order
///
/// The canonical flat layout used to hand coefficients across any boundary is
/// Legendre-major, i.e. coefficient `(l; n, m)` sits at
///
/// ```text
/// flat[l * T(N) + position(n, m)]
/// ```
///
/// with `position(n, m) = n(n+1)/2 + (m+n)/2`.
///
/// ```rust
/// # use fetools_expansion::{CoefficientSet, ExpansionOrder};
/// let order = ExpansionOrder::new(1, 1);
/// let flat = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
///
/// let set = CoefficientSet::from_flat(order, &flat).unwrap();
/// assert_eq!(set.legendre(1).unwrap().as_slice(), &[4.0, 5.0, 6.0]);
/// assert_eq!(set.to_flat(), flat);
///
/// // Anything other than (L+1) T(N) values is rejected
/// assert!(CoefficientSet::from_flat(order, &flat[..5]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientSet {
    order: ExpansionOrder,
    vectors: Vec<CoefficientVector>,
}

impl CoefficientSet {
    /// All zero coefficients for the given order
    pub fn zeros(order: ExpansionOrder) -> Self {
        Self {
            order,
            vectors: vec![CoefficientVector::zeros(order.n_order); order.num_legendre_terms()],
        }
    }

    /// Unpack a Legendre-major flat array
    pub fn from_flat(order: ExpansionOrder, flat: &[f64]) -> Result<Self> {
        let expected = order.num_coefficients();
        if flat.len() != expected {
            return Err(Error::CoefficientCountMismatch {
                expected,
                found: flat.len(),
            });
        }

        let vectors = flat
            .chunks_exact(order.num_zernike_terms())
            .map(|chunk| CoefficientVector {
                n_order: order.n_order,
                values: chunk.to_vec(),
            })
            .collect();

        Ok(Self { order, vectors })
    }

    /// Build from one vector per Legendre order
    ///
    /// The Zernike order is inferred from the first vector, and every other
    /// vector must have the same length.
    ///
    /// ```rust
    /// # use fetools_expansion::CoefficientSet;
    /// let set = CoefficientSet::from_vectors(vec![vec![1.0; 3], vec![2.0; 3]]).unwrap();
    /// assert_eq!(set.order().l_order, 1);
    /// assert_eq!(set.order().n_order, 1);
    ///
    /// assert!(CoefficientSet::from_vectors(vec![vec![1.0; 3], vec![2.0; 6]]).is_err());
    /// assert!(CoefficientSet::from_vectors(vec![]).is_err());
    /// ```
    pub fn from_vectors(vectors: Vec<Vec<f64>>) -> Result<Self> {
        let first = vectors.first().ok_or(Error::EmptyCoefficientSet)?;
        if !is_valid_coeff_count(first.len()) {
            return Err(Error::IncompleteZernikeSet(first.len()));
        }
        let n_order = zernike_order_from_coeff_count(first.len())?;
        let order = ExpansionOrder::new(vectors.len() - 1, n_order);

        let vectors = vectors
            .into_iter()
            .map(|values| CoefficientVector::from_vec(values, n_order))
            .collect::<Result<Vec<CoefficientVector>>>()?;

        Ok(Self { order, vectors })
    }

    /// Pack into the Legendre-major flat layout
    pub fn to_flat(&self) -> Vec<f64> {
        self.vectors
            .iter()
            .flat_map(|v| v.as_slice().iter().copied())
            .collect()
    }

    pub fn order(&self) -> ExpansionOrder {
        self.order
    }

    /// Coefficients for Legendre order `l`
    pub fn legendre(&self, l: usize) -> Option<&CoefficientVector> {
        self.vectors.get(l)
    }

    /// Mutable coefficients for Legendre order `l`
    pub fn legendre_mut(&mut self, l: usize) -> Option<&mut CoefficientVector> {
        self.vectors.get_mut(l)
    }

    /// Every Legendre order in turn
    pub fn vectors(&self) -> &[CoefficientVector] {
        &self.vectors
    }

    /// Single coefficient `C_l^{n,m}`
    pub fn get(&self, l: usize, index: ZernikeIndex) -> Option<f64> {
        self.legendre(l).and_then(|v| v.get(index))
    }

    /// Volume average of the expanded field over the cylinder
    ///
    /// Every term except `(0; 0, 0)` integrates to zero, leaving
    /// `C_0^{0,0} P̃_0 Z_0^0 = C_0^{0,0} / √2`.
    ///
    /// ```rust
    /// # use fetools_expansion::{CoefficientSet, ExpansionOrder};
    /// let mut flat = vec![0.0; 6];
    /// flat[0] = 2.0_f64.sqrt() * 550.0;
    /// flat[4] = 12.0;
    /// let set = CoefficientSet::from_flat(ExpansionOrder::new(1, 1), &flat).unwrap();
    /// assert!((set.domain_average() - 550.0).abs() < 1e-12);
    /// ```
    pub fn domain_average(&self) -> f64 {
        self.vectors
            .first()
            .and_then(|v| v.as_slice().first())
            .map_or(0.0, |c| c / SQRT_2)
    }
}

impl std::fmt::Display for CoefficientSet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "Zernike-Legendre coefficients {}", self.order)?;
        for (l, vector) in self.vectors.iter().enumerate() {
            let values = vector.as_slice().iter().map(|v| v.sci(5, 2)).join(" ");
            writeln!(f, "  l={l:<3} {values}")?;
        }
        Ok(())
    }
}
