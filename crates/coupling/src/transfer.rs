// crate modules
use crate::error::{Error, Result};
use crate::status::{check, Operation, SolverStatus, Subject};

// external crates
use fetools_expansion::{CoefficientSet, ExpansionOrder};
use log::{debug, info};

/// Boundary to a transport solver that tallies expansion coefficients
///
/// Mirrors the small C API of the solver. Every method returns the raw status
/// code, which callers such as [CellTransfer] and
/// [FluidLayers](crate::FluidLayers) translate with [check()](crate::check).
///
/// Coefficient arrays use the Legendre-major flat layout of
/// [CoefficientSet::to_flat()].
pub trait CoefficientExchange {
    /// Store the coefficients of a continuous field for a cell
    fn receive_coeffs_for_cell(&mut self, cell: i32, coefficients: &[f64]) -> i32;

    /// Fill `coefficients` with the tallied expansion for a cell
    fn get_coeffs_from_cell(&mut self, cell: i32, coefficients: &mut [f64]) -> i32;

    /// Set the single temperature a cell uses for cross sections
    fn cell_set_temperature(&mut self, cell: i32, temperature: f64) -> i32;

    /// Write the internal index of the cell with user identifier `id`
    fn get_cell_index(&mut self, id: i32, index: &mut i32) -> i32;

    /// Write the internal index of the material with user identifier `id`
    fn get_material_index(&mut self, id: i32, index: &mut i32) -> i32;

    /// Set the atom density of a material in atoms/b-cm
    fn material_set_density(&mut self, index: i32, density: f64) -> i32;

    /// Write the combined k-effective estimate as `[mean, standard deviation]`
    fn get_keff(&mut self, keff: &mut [f64; 2]) -> i32;
}

/// Moves coefficients of one solver cell across the boundary
///
/// The expansion order is fixed for the cell, and anything of a different
/// order or length fails loudly rather than being truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellTransfer {
    cell: i32,
    order: ExpansionOrder,
}

impl CellTransfer {
    pub fn new(cell: i32, order: ExpansionOrder) -> Self {
        Self { cell, order }
    }

    /// Solver cell identifier
    pub fn cell(&self) -> i32 {
        self.cell
    }

    pub fn order(&self) -> ExpansionOrder {
        self.order
    }

    /// Send a full coefficient set to the solver
    ///
    /// The cell temperature is then set to the volume average of the field,
    /// since the solver cannot yet track a continuous temperature. Any
    /// warnings the solver raised along the way are returned.
    pub fn send<S: CoefficientExchange>(
        &self,
        solver: &mut S,
        coefficients: &CoefficientSet,
    ) -> Result<Vec<SolverStatus>> {
        if coefficients.order() != self.order {
            return Err(Error::OrderMismatch {
                cell: self.cell,
                expected: self.order,
                found: coefficients.order(),
            });
        }

        let flat = coefficients.to_flat();
        info!("Transferring {} coefficients to cell {}", flat.len(), self.cell);
        debug!("Sending {coefficients}");

        let mut warnings = Vec::new();
        let code = solver.receive_coeffs_for_cell(self.cell, &flat);
        warnings.extend(check(code, Operation::ReceiveCoefficients, self.subject())?);

        let temperature = coefficients.domain_average();
        debug!("Setting cell {} temperature to {temperature}", self.cell);
        let code = solver.cell_set_temperature(self.cell, temperature);
        warnings.extend(check(code, Operation::SetTemperature, self.subject())?);

        Ok(warnings)
    }

    /// Send a raw Legendre-major array, which must hold exactly `(L+1) T(N)`
    pub fn send_flat<S: CoefficientExchange>(
        &self,
        solver: &mut S,
        flat: &[f64],
    ) -> Result<Vec<SolverStatus>> {
        self.check_length(flat.len())?;
        let coefficients = CoefficientSet::from_flat(self.order, flat)?;
        self.send(solver, &coefficients)
    }

    /// Retrieve the tallied coefficient set for the cell
    ///
    /// Exactly `(L+1) T(N)` values are requested, along with any warnings the
    /// solver raised.
    pub fn receive<S: CoefficientExchange>(
        &self,
        solver: &mut S,
    ) -> Result<(CoefficientSet, Vec<SolverStatus>)> {
        let mut flat = vec![0.0; self.order.num_coefficients()];
        info!("Transferring {} coefficients from cell {}", flat.len(), self.cell);

        let code = solver.get_coeffs_from_cell(self.cell, &mut flat);
        let warnings = check(code, Operation::GetCoefficients, self.subject())?
            .into_iter()
            .collect();

        let coefficients = CoefficientSet::from_flat(self.order, &flat)?;
        debug!("Received {coefficients}");
        Ok((coefficients, warnings))
    }

    fn subject(&self) -> Subject {
        Subject::Cell(self.cell)
    }

    fn check_length(&self, found: usize) -> Result<()> {
        let expected = self.order.num_coefficients();
        if found != expected {
            return Err(Error::CoefficientCountMismatch {
                cell: self.cell,
                expected,
                found,
            });
        }
        Ok(())
    }
}
