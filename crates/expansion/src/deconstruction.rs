//! Forward transform, projecting a field onto expansion coefficients

// crate modules
use crate::coefficients::{CoefficientSet, CoefficientVector};
use crate::error::{Error, Result};
use crate::kernel::Kernel;
use crate::order::ExpansionOrder;
use crate::quadrature::QuadraturePoint;

// standard library
use std::ops::RangeInclusive;

// external crates
use fetools_basis::{ZernikeIndex, ZernikeLegendreBasis};
use fetools_utils::SliceExt;
use log::{debug, trace};
use rayon::prelude::*;

/// Combine partial sums held by separate partitions of the domain
///
/// Implementations sum `values` elementwise across every partition in place,
/// leaving the global totals on each. A distributed host would wrap its
/// collective here.
pub trait Reduction {
    fn sum(&self, values: &mut [f64]) -> Result<()>;
}

/// Reduction for a single partition, leaves values untouched
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalReduction;

impl Reduction for LocalReduction {
    fn sum(&self, _values: &mut [f64]) -> Result<()> {
        Ok(())
    }
}

/// Where an accumulation is in its pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Uninitialized,
    Accumulating,
    Finalized,
}

/// Accumulates the projection of a field onto the Zernike-Legendre basis
///
/// For every quadrature point the contribution
///
/// ```text
/// C_l^{n,m} += w · coordScale · f · P̃_l(axial) · Z_n^m(transverse)
/// ```
///
/// is added to a private accumulator, and the kernel factor `G` is applied
/// once at [finalize()](Deconstruction::finalize).
///
/// A pass follows a strict lifecycle.
///
/// 1. [initialize()](Deconstruction::initialize) zeroes the accumulator
/// 2. [execute()](Deconstruction::execute) once per element
/// 3. [thread_join()](Deconstruction::thread_join) merges worker copies
/// 4. [finalize()](Deconstruction::finalize) reduces across partitions, once
///
/// Coefficients are only readable after finalising and until the next
/// `initialize()`.
///
/// ```rust
/// # use fetools_basis::{AxialDirection, LegendreBasis, ZernikeBasis, ZernikeLegendreBasis};
/// # use fetools_expansion::{cylinder_quadrature, Deconstruction, ExpansionOrder, Kernel, LocalReduction};
/// let basis = ZernikeLegendreBasis::new(
///     LegendreBasis::new(0.0, 1.0).unwrap(),
///     ZernikeBasis::new(1.0, [0.0, 0.0]).unwrap(),
///     AxialDirection::Z,
/// );
/// let kernel = Kernel::cylinder_volume(&basis).unwrap();
/// let element = cylinder_quadrature(&basis, 2, 2, 4, |_| 300.0).unwrap();
///
/// let mut projection = Deconstruction::new(basis, ExpansionOrder::new(0, 0), kernel);
/// projection.initialize();
/// projection.execute(&element).unwrap();
/// projection.finalize(&LocalReduction).unwrap();
///
/// let coefficients = projection.coefficients().unwrap();
/// assert!((coefficients.domain_average() - 300.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct Deconstruction {
    basis: ZernikeLegendreBasis,
    order: ExpansionOrder,
    legendre_orders: RangeInclusive<usize>,
    kernel: Kernel,
    accumulator: Vec<f64>,
    points: usize,
    state: State,
}

impl Deconstruction {
    /// Projection onto every Legendre order `0..=L`
    pub fn new(basis: ZernikeLegendreBasis, order: ExpansionOrder, kernel: Kernel) -> Self {
        Self::with_legendre_orders(basis, order, 0..=order.l_order, kernel)
    }

    /// Projection onto the single Legendre order `l`
    ///
    /// The coefficient set produced is of order `(l, N)`, with every lower
    /// Legendre order left at zero.
    pub fn single_order(
        basis: ZernikeLegendreBasis,
        l: usize,
        n_order: usize,
        kernel: Kernel,
    ) -> Self {
        Self::with_legendre_orders(basis, ExpansionOrder::new(l, n_order), l..=l, kernel)
    }

    fn with_legendre_orders(
        basis: ZernikeLegendreBasis,
        order: ExpansionOrder,
        legendre_orders: RangeInclusive<usize>,
        kernel: Kernel,
    ) -> Self {
        let n_rows = legendre_orders.clone().count();
        Self {
            basis,
            order,
            legendre_orders,
            kernel,
            accumulator: vec![0.0; n_rows * order.num_zernike_terms()],
            points: 0,
            state: State::Uninitialized,
        }
    }

    pub fn basis(&self) -> &ZernikeLegendreBasis {
        &self.basis
    }

    pub fn order(&self) -> ExpansionOrder {
        self.order
    }

    pub fn kernel(&self) -> &Kernel {
        &self.kernel
    }

    /// Legendre orders this projection accumulates
    pub fn legendre_orders(&self) -> RangeInclusive<usize> {
        self.legendre_orders.clone()
    }

    /// Number of quadrature points accumulated during this pass
    pub fn num_points(&self) -> usize {
        self.points
    }

    pub fn is_finalized(&self) -> bool {
        self.state == State::Finalized
    }

    /// Zero the accumulator and start a new pass
    pub fn initialize(&mut self) {
        self.accumulator.zero();
        self.points = 0;
        self.state = State::Accumulating;
    }

    /// Accumulate every quadrature point of one element
    pub fn execute(&mut self, element: &[QuadraturePoint]) -> Result<()> {
        self.check_accumulating()?;
        let mut accumulator = std::mem::take(&mut self.accumulator);
        self.accumulate(&mut accumulator, element);
        self.accumulator = accumulator;
        self.points += element.len();
        Ok(())
    }

    /// Accumulate many elements in parallel
    ///
    /// Each rayon worker folds elements into its own accumulator and the
    /// partial sums are merged pairwise. The result matches serial calls to
    /// [execute()](Deconstruction::execute) up to summation order.
    pub fn project_par(&mut self, elements: &[Vec<QuadraturePoint>]) -> Result<()> {
        self.check_accumulating()?;

        let length = self.accumulator.len();
        let this = &*self;
        let partial = elements
            .par_iter()
            .fold(
                || vec![0.0; length],
                |mut acc, element| {
                    this.accumulate(&mut acc, element);
                    acc
                },
            )
            .reduce(
                || vec![0.0; length],
                |mut a, b| {
                    a.iter_mut().zip(&b).for_each(|(x, y)| *x += y);
                    a
                },
            );

        self.accumulator.add_assign_from(&partial)?;
        self.points += elements.iter().map(Vec::len).sum::<usize>();
        debug!("Projected {} elements in parallel", elements.len());
        Ok(())
    }

    /// Merge the partial sums of another worker into this one
    ///
    /// Both must cover the same expansion and be mid-pass. Any merge tree
    /// gives the same result up to rounding.
    pub fn thread_join(&mut self, other: &Self) -> Result<()> {
        self.check_accumulating()?;
        other.check_accumulating()?;

        if self.order != other.order {
            return Err(Error::OrderMismatch {
                expected: self.order,
                found: other.order,
            });
        }
        if self.legendre_orders != other.legendre_orders {
            return Err(Error::LegendreOrdersMismatch {
                expected: self.legendre_orders.clone(),
                found: other.legendre_orders.clone(),
            });
        }

        self.accumulator.add_assign_from(&other.accumulator)?;
        self.points += other.points;
        Ok(())
    }

    /// Reduce across partitions and apply the kernel factor
    ///
    /// Must be called exactly once per pass.
    pub fn finalize<R: Reduction>(&mut self, reduction: &R) -> Result<()> {
        match self.state {
            State::Uninitialized => return Err(Error::NotInitialized),
            State::Finalized => return Err(Error::AlreadyFinalized),
            State::Accumulating => {}
        }

        reduction.sum(&mut self.accumulator)?;

        let factor = self.kernel.factor();
        self.accumulator.iter_mut().for_each(|c| *c *= factor);
        self.state = State::Finalized;

        debug!(
            "Finalised {} projection over {} local points (G = {factor})",
            self.order, self.points
        );
        Ok(())
    }

    /// Finalised coefficients as a full set of order `(L, N)`
    pub fn coefficients(&self) -> Result<CoefficientSet> {
        self.check_finalized()?;

        let mut set = CoefficientSet::zeros(self.order);
        let n_terms = self.order.num_zernike_terms();
        for (l, row) in self
            .legendre_orders
            .clone()
            .zip(self.accumulator.chunks_exact(n_terms))
        {
            if let Some(vector) = set.legendre_mut(l) {
                vector.as_mut_slice().copy_from_slice(row);
            }
        }
        Ok(set)
    }

    /// Finalised coefficients for a single Legendre order
    pub fn legendre_coefficients(&self, l: usize) -> Result<CoefficientVector> {
        self.check_finalized()?;
        let row = self.row(l)?;
        CoefficientVector::from_vec(row.to_vec(), self.order.n_order)
    }

    /// A single finalised coefficient `C_l^{n,m}`
    pub fn value(&self, l: usize, index: ZernikeIndex) -> Result<f64> {
        self.check_finalized()?;
        self.row(l)?
            .get(index.position())
            .copied()
            .ok_or(Error::ZernikeIndexOutOfRange(index))
    }

    fn row(&self, l: usize) -> Result<&[f64]> {
        if !self.legendre_orders.contains(&l) {
            return Err(Error::LegendreOrderOutOfRange { l });
        }
        let n_terms = self.order.num_zernike_terms();
        let start = (l - self.legendre_orders.start()) * n_terms;
        Ok(&self.accumulator[start..start + n_terms])
    }

    /// Add one element into `acc`, shared by serial and parallel paths
    fn accumulate(&self, acc: &mut [f64], element: &[QuadraturePoint]) {
        let n_terms = self.order.num_zernike_terms();
        let l_first = *self.legendre_orders.start();
        let l_last = *self.legendre_orders.end();

        for point in element {
            let weighted = point.weighted_value();
            let legendre = self.basis.legendre_values(l_last, &point.position);
            let zernike = self.basis.zernike_values(self.order.n_order, &point.position);
            trace!("Accumulating {} with weighted value {weighted}", point.position);

            for (row, p_l) in acc.chunks_exact_mut(n_terms).zip(&legendre[l_first..]) {
                let scale = weighted * p_l;
                for (c, z) in row.iter_mut().zip(&zernike) {
                    *c += scale * z;
                }
            }
        }
    }

    fn check_accumulating(&self) -> Result<()> {
        match self.state {
            State::Accumulating => Ok(()),
            State::Uninitialized | State::Finalized => Err(Error::NotInitialized),
        }
    }

    fn check_finalized(&self) -> Result<()> {
        match self.state {
            State::Finalized => Ok(()),
            State::Uninitialized | State::Accumulating => Err(Error::NotFinalized),
        }
    }
}
