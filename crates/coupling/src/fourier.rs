//! Fourier by Legendre coefficients exchanged with the fluid solver

// crate modules
use crate::error::{Error, Result};

/// Row length of the fixed-size coefficient arrays on the fluid side
pub const DEFAULT_STRIDE: usize = 100;

/// Shape of a Fourier (azimuthal) by Legendre (axial) wall expansion
///
/// The host keeps one coefficient vector per Fourier order, each holding one
/// coefficient per Legendre order. The fluid solver stores them row-major in
/// a fixed array with `stride` entries per Fourier order.
///
/// ```rust
/// # use fetools_coupling::FourierLegendreShape;
/// let shape = FourierLegendreShape::new(2, 3);
/// let variables = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
///
/// let flat = shape.pack(&variables, 4).unwrap();
/// assert_eq!(flat, vec![1.0, 2.0, 3.0, 0.0, 4.0, 5.0, 6.0, 0.0]);
/// assert_eq!(shape.unpack(&flat, 4).unwrap(), variables);
///
/// // One Fourier order short
/// assert!(shape.check(&variables[..1]).is_err());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourierLegendreShape {
    /// Number of Fourier orders
    pub m_fourier: usize,
    /// Number of Legendre coefficients per Fourier order
    pub n_legendre: usize,
}

impl FourierLegendreShape {
    pub fn new(m_fourier: usize, n_legendre: usize) -> Self {
        Self {
            m_fourier,
            n_legendre,
        }
    }

    /// Check there is one vector per Fourier order, each of `n_legendre`
    pub fn check<V: AsRef<[f64]>>(&self, variables: &[V]) -> Result<()> {
        if variables.len() != self.m_fourier {
            return Err(Error::FourierCountMismatch {
                expected: self.m_fourier,
                found: variables.len(),
            });
        }

        for (fourier, v) in variables.iter().enumerate() {
            let found = v.as_ref().len();
            if found != self.n_legendre {
                return Err(Error::LegendreLengthMismatch {
                    fourier,
                    expected: self.n_legendre,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Pack into a zero-padded array of `m_fourier` rows of `stride`
    pub fn pack<V: AsRef<[f64]>>(&self, variables: &[V], stride: usize) -> Result<Vec<f64>> {
        self.check(variables)?;
        self.check_stride(stride)?;

        let mut flat = vec![0.0; self.m_fourier * stride];
        for (row, v) in flat.chunks_exact_mut(stride).zip(variables) {
            row[..self.n_legendre].copy_from_slice(v.as_ref());
        }
        Ok(flat)
    }

    /// Unpack the leading `n_legendre` entries of every row
    pub fn unpack(&self, flat: &[f64], stride: usize) -> Result<Vec<Vec<f64>>> {
        self.check_stride(stride)?;

        let rows = flat.len() / stride;
        if rows < self.m_fourier {
            return Err(Error::FourierCountMismatch {
                expected: self.m_fourier,
                found: rows,
            });
        }

        Ok(flat
            .chunks_exact(stride)
            .take(self.m_fourier)
            .map(|row| row[..self.n_legendre].to_vec())
            .collect())
    }

    fn check_stride(&self, stride: usize) -> Result<()> {
        if stride == 0 || stride < self.n_legendre {
            return Err(Error::StrideTooSmall {
                stride,
                n_legendre: self.n_legendre,
            });
        }
        Ok(())
    }
}
