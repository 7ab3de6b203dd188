//! Axially binned fluid temperatures and densities

// crate modules
use crate::error::{Error, Result};
use crate::status::{check, Operation, SolverStatus, Subject};
use crate::transfer::CoefficientExchange;

// external crates
use fetools_utils::ValueExt;
use itertools::Itertools;
use log::{debug, info};

/// Avogadro constant in 1/mol
pub const AVOGADRO: f64 = 6.022e23;

/// Molar mass of light water in g/mol
pub const WATER_MOLAR_MASS: f64 = 18.01588;

/// Rescale a nondimensional fluid temperature onto `[inlet, outlet]`
///
/// ```rust
/// # use fetools_coupling::layer_temperature;
/// assert_eq!(layer_temperature(0.0, 550.0, 600.0), 550.0);
/// assert_eq!(layer_temperature(0.5, 550.0, 600.0), 575.0);
/// ```
pub fn layer_temperature(theta: f64, inlet: f64, outlet: f64) -> f64 {
    theta * (outlet - inlet) + inlet
}

/// Density of water at 15 MPa in g/cm3, temperature in K
///
/// Quadratic fit valid over typical coolant temperatures.
///
/// ```text
/// ρ = (-0.0097 T² + 8.8796 T - 1167.1) / 1000
/// ```
pub fn water_density(temperature: f64) -> f64 {
    let kg_per_m3 = -0.0097 * temperature * temperature + 8.8796 * temperature - 1167.1;
    kg_per_m3 / 1000.0
}

/// Convert a mass density in g/cm3 to atoms/b-cm
///
/// ```rust
/// # use fetools_coupling::{atom_density, AVOGADRO, WATER_MOLAR_MASS};
/// let n = atom_density(1.0, WATER_MOLAR_MASS);
/// assert!((n - AVOGADRO / (WATER_MOLAR_MASS * 1e24)).abs() < 1e-15);
/// ```
pub fn atom_density(mass_density: f64, molar_mass: f64) -> f64 {
    mass_density * AVOGADRO / (molar_mass * 1e24)
}

/// Hands axially binned fluid conditions to the transport solver
///
/// Each layer, ordered from low to high along the flow, maps onto one solver
/// cell for the temperature and one material for the density. The fluid
/// solver reports nondimensional layer temperatures, which are rescaled
/// between the inlet and outlet temperatures before being sent.
///
/// Every set of temperatures sent is kept, one entry per iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidLayers {
    cells: Vec<i32>,
    materials: Vec<i32>,
    inlet_temperature: f64,
    outlet_temperature: f64,
    history: Vec<Vec<f64>>,
}

impl FluidLayers {
    /// Layers from matching lists of cell and material identifiers
    pub fn new(
        cells: Vec<i32>,
        materials: Vec<i32>,
        inlet_temperature: f64,
        outlet_temperature: f64,
    ) -> Result<Self> {
        if cells.len() != materials.len() {
            return Err(Error::CellMaterialMismatch {
                cells: cells.len(),
                materials: materials.len(),
            });
        }

        Ok(Self {
            cells,
            materials,
            inlet_temperature,
            outlet_temperature,
            history: Vec::new(),
        })
    }

    pub fn num_layers(&self) -> usize {
        self.cells.len()
    }

    pub fn cells(&self) -> &[i32] {
        &self.cells
    }

    pub fn materials(&self) -> &[i32] {
        &self.materials
    }

    /// Layer temperatures sent so far, oldest first
    pub fn history(&self) -> &[Vec<f64>] {
        &self.history
    }

    /// Physical temperature of every layer
    ///
    /// There must be exactly one nondimensional value per layer.
    pub fn temperatures(&self, theta: &[f64]) -> Result<Vec<f64>> {
        if theta.len() != self.num_layers() {
            return Err(Error::LayerCountMismatch {
                expected: self.num_layers(),
                found: theta.len(),
            });
        }

        Ok(theta
            .iter()
            .map(|t| layer_temperature(*t, self.inlet_temperature, self.outlet_temperature))
            .collect())
    }

    /// Set the temperature and water density of every layer in the solver
    ///
    /// Cell and material indices are looked up first, so a bad identifier
    /// fails before anything is changed. Any warnings are returned.
    pub fn send<S: CoefficientExchange>(
        &mut self,
        solver: &mut S,
        theta: &[f64],
    ) -> Result<Vec<SolverStatus>> {
        let temperatures = self.temperatures(theta)?;
        let mut warnings = Vec::new();

        let mut indices = Vec::with_capacity(self.num_layers());
        for (&cell, &material) in self.cells.iter().zip(&self.materials) {
            let mut cell_index = 0;
            let code = solver.get_cell_index(cell, &mut cell_index);
            warnings.extend(check(code, Operation::GetCellIndex, Subject::Cell(cell))?);

            let mut material_index = 0;
            let code = solver.get_material_index(material, &mut material_index);
            warnings.extend(check(
                code,
                Operation::GetMaterialIndex,
                Subject::Material(material),
            )?);

            indices.push((cell_index, material_index));
        }

        info!(
            "Transferring {} fluid layer temperatures: {}",
            temperatures.len(),
            temperatures.iter().map(|t| t.sci(5, 2)).join(" ")
        );

        for (i, temperature) in temperatures.iter().enumerate() {
            let (cell_index, material_index) = indices[i];

            let code = solver.cell_set_temperature(cell_index, *temperature);
            warnings.extend(check(
                code,
                Operation::SetTemperature,
                Subject::Cell(self.cells[i]),
            )?);

            let density = atom_density(water_density(*temperature), WATER_MOLAR_MASS);
            debug!("Layer {i} density {} atoms/b-cm", density.sci(5, 2));
            let code = solver.material_set_density(material_index, density);
            warnings.extend(check(
                code,
                Operation::SetMaterialDensity,
                Subject::Material(self.materials[i]),
            )?);
        }

        self.history.push(temperatures);
        Ok(warnings)
    }
}
