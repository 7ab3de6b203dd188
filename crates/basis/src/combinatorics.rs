//! Factorials and Zernike term counting

// crate modules
use crate::error::{Error, Result};

/// Integer factorial `n!`
///
/// `0! = 1! = 1`. Anything above `20!` does not fit in a `u64` and is an
/// error rather than a silent wrap.
///
/// ```rust
/// # use fetools_basis::factorial;
/// assert_eq!(factorial(0).unwrap(), 1);
/// assert_eq!(factorial(5).unwrap(), 120);
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: u32) -> Result<u64> {
    (1..=u64::from(n))
        .try_fold(1_u64, |acc, k| acc.checked_mul(k))
        .ok_or(Error::FactorialOverflow(n))
}

/// Floating point factorial for the radial polynomial coefficients
///
/// The empty product covers `0!`.
#[inline]
pub(crate) fn factorial_f64(n: u32) -> f64 {
    (1..=n).map(f64::from).product()
}

/// Number of `(n, m)` Zernike terms up to and including order `n_order`
///
/// Each radial order `n` contributes `n + 1` azimuthal terms, so the total is
/// the triangular number `T(N) = (N+1)(N+2)/2`.
///
/// ```rust
/// # use fetools_basis::num_zernike_terms;
/// assert_eq!(num_zernike_terms(0), 1);
/// assert_eq!(num_zernike_terms(1), 3);
/// assert_eq!(num_zernike_terms(4), 15);
/// ```
#[inline]
pub const fn num_zernike_terms(n_order: usize) -> usize {
    (n_order + 1) * (n_order + 2) / 2
}

/// Zernike order for a given number of coefficients
///
/// Consumes triangular increments of `1, 2, 3, ...` until the count is
/// exhausted. For an exact triangular count this is the inverse of
/// [num_zernike_terms()]. Otherwise the order returned is the first whose
/// cumulative count reaches or exceeds `count`.
///
/// ```rust
/// # use fetools_basis::zernike_order_from_coeff_count;
/// assert_eq!(zernike_order_from_coeff_count(1).unwrap(), 0);
/// assert_eq!(zernike_order_from_coeff_count(10).unwrap(), 3);
///
/// // Not triangular, rounds up to the order that can hold it
/// assert_eq!(zernike_order_from_coeff_count(7).unwrap(), 3);
///
/// // No order has zero terms
/// assert!(zernike_order_from_coeff_count(0).is_err());
/// ```
pub fn zernike_order_from_coeff_count(count: usize) -> Result<usize> {
    if count == 0 {
        return Err(Error::EmptyCoefficientCount);
    }

    let mut remaining = count;
    let mut order = 0;
    loop {
        let increment = order + 1;
        if remaining <= increment {
            return Ok(order);
        }
        remaining -= increment;
        order += 1;
    }
}

/// Check that a coefficient count is exactly `T(N)` for some order `N`
///
/// ```rust
/// # use fetools_basis::is_valid_coeff_count;
/// assert!(is_valid_coeff_count(6));
/// assert!(!is_valid_coeff_count(7));
/// assert!(!is_valid_coeff_count(0));
/// ```
pub fn is_valid_coeff_count(count: usize) -> bool {
    zernike_order_from_coeff_count(count)
        .map(|order| num_zernike_terms(order) == count)
        .unwrap_or(false)
}

/// A valid `(n, m)` Zernike index
///
/// The radial order `n` is non-negative, and the azimuthal order `m` is one of
/// `-n, -n+2, ..., n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ZernikeIndex {
    /// Radial order
    pub n: u32,
    /// Azimuthal order, same parity as `n`
    pub m: i32,
}

impl ZernikeIndex {
    /// Validated index from signed orders
    ///
    /// ```rust
    /// # use fetools_basis::ZernikeIndex;
    /// assert!(ZernikeIndex::new(2, -2).is_ok());
    /// assert!(ZernikeIndex::new(2, 1).is_err());  // parity
    /// assert!(ZernikeIndex::new(1, 3).is_err());  // |m| > n
    /// assert!(ZernikeIndex::new(-1, 1).is_err()); // negative n
    /// assert!(ZernikeIndex::new(4, i32::MIN).is_err());
    /// ```
    pub fn new(n: i32, m: i32) -> Result<Self> {
        let Ok(n_abs) = u32::try_from(n) else {
            return Err(Error::InvalidZernikeIndex { n, m });
        };
        // compared unsigned, |i32::MIN| does not fit in an i32
        let m_abs = m.unsigned_abs();
        if m_abs > n_abs || (n_abs - m_abs) % 2 != 0 {
            return Err(Error::InvalidZernikeIndex { n, m });
        }

        Ok(Self { n: n_abs, m })
    }

    /// Position of this term in the canonical coefficient ordering
    ///
    /// All terms of lower radial order come first, then `m` ascends.
    ///
    /// ```rust
    /// # use fetools_basis::ZernikeIndex;
    /// assert_eq!(ZernikeIndex::new(0, 0).unwrap().position(), 0);
    /// assert_eq!(ZernikeIndex::new(1, 1).unwrap().position(), 2);
    /// assert_eq!(ZernikeIndex::new(2, 0).unwrap().position(), 4);
    /// ```
    pub fn position(&self) -> usize {
        let n = self.n as usize;
        let k = ((i64::from(self.m) + i64::from(self.n)) / 2) as usize;
        n * (n + 1) / 2 + k
    }

    /// Magnitude of the azimuthal order
    #[inline]
    pub fn m_abs(&self) -> u32 {
        self.m.unsigned_abs()
    }
}

impl std::fmt::Display for ZernikeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(n={}, m={})", self.n, self.m)
    }
}

/// Every `(n, m)` index up to order `n_order`, in canonical order
///
/// Yields exactly [num_zernike_terms()] items.
pub fn zernike_indices(n_order: usize) -> impl Iterator<Item = ZernikeIndex> {
    (0..=n_order as u32).flat_map(|n| {
        (0..=n).map(move |k| ZernikeIndex {
            n,
            m: 2 * k as i32 - n as i32,
        })
    })
}

#[cfg(test)]
mod combinatorics_tests {
    use super::*;

    #[test]
    fn test_factorial_f64_matches_integer() {
        // exact in f64 up to 18!
        for n in 0..=18 {
            assert_eq!(factorial_f64(n), factorial(n).unwrap() as f64);
        }
    }

    #[test]
    fn test_position_follows_iteration_order() {
        for (i, index) in zernike_indices(6).enumerate() {
            assert_eq!(index.position(), i);
        }
    }
}
