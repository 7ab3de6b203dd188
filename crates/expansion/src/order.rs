// crate modules
use crate::error::{Error, Result};

// external crates
use fetools_basis::num_zernike_terms;

/// Legendre order `L` and Zernike order `N` of an expansion
///
/// A full expansion holds `L + 1` Legendre orders, each with the
/// `T(N) = (N+1)(N+2)/2` Zernike terms up to radial order `N`.
///
/// ```rust
/// # use fetools_expansion::ExpansionOrder;
/// let order = ExpansionOrder::new(3, 2);
/// assert_eq!(order.num_legendre_terms(), 4);
/// assert_eq!(order.num_zernike_terms(), 6);
/// assert_eq!(order.num_coefficients(), 24);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExpansionOrder {
    /// Highest Legendre order `L`
    pub l_order: usize,
    /// Highest Zernike radial order `N`
    pub n_order: usize,
}

impl ExpansionOrder {
    pub fn new(l_order: usize, n_order: usize) -> Self {
        Self { l_order, n_order }
    }

    /// Orders from signed values, as handed over by most host codes
    ///
    /// ```rust
    /// # use fetools_expansion::ExpansionOrder;
    /// assert!(ExpansionOrder::try_from_signed(2, 4).is_ok());
    /// assert!(ExpansionOrder::try_from_signed(-1, 4).is_err());
    /// ```
    pub fn try_from_signed(l: i64, n: i64) -> Result<Self> {
        match (usize::try_from(l), usize::try_from(n)) {
            (Ok(l_order), Ok(n_order)) => Ok(Self::new(l_order, n_order)),
            _ => Err(Error::NegativeOrder { l, n }),
        }
    }

    /// Number of Legendre orders, `L + 1`
    pub fn num_legendre_terms(&self) -> usize {
        self.l_order + 1
    }

    /// Number of Zernike terms per Legendre order, `T(N)`
    pub fn num_zernike_terms(&self) -> usize {
        num_zernike_terms(self.n_order)
    }

    /// Total coefficient count `(L + 1) T(N)`
    pub fn num_coefficients(&self) -> usize {
        self.num_legendre_terms() * self.num_zernike_terms()
    }
}

impl std::fmt::Display for ExpansionOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "(L={}, N={})", self.l_order, self.n_order)
    }
}
