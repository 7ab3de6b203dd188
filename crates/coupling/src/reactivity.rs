// crate modules
use crate::error::{Error, Result};
use crate::status::{check, Operation, SolverStatus, Subject};
use crate::transfer::CoefficientExchange;

// external crates
use log::{info, warn};

/// Delayed neutron fraction β used to judge the reactivity
pub const DELAYED_NEUTRON_FRACTION: f64 = 0.00645;

/// Combined k-effective estimate of an eigenvalue calculation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keff {
    pub mean: f64,
    pub std_dev: f64,
}

impl Keff {
    /// Estimate with a positive, finite mean
    pub fn new(mean: f64, std_dev: f64) -> Result<Self> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(Error::InvalidKeff(mean));
        }
        Ok(Self { mean, std_dev })
    }

    /// Reactivity `ρ = (k - 1) / k`
    ///
    /// ```rust
    /// # use fetools_coupling::Keff;
    /// let keff = Keff::new(1.25, 1e-4).unwrap();
    /// assert_eq!(keff.reactivity(), 0.2);
    /// ```
    pub fn reactivity(&self) -> f64 {
        (self.mean - 1.0) / self.mean
    }

    /// True at or beyond one dollar of reactivity
    pub fn exceeds_beta(&self) -> bool {
        self.reactivity() >= DELAYED_NEUTRON_FRACTION
    }
}

impl std::fmt::Display for Keff {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:.5} +/- {:.5}", self.mean, self.std_dev)
    }
}

/// Retrieve k-effective from the solver, along with any warning
///
/// Reactivity at or above [DELAYED_NEUTRON_FRACTION] is logged as a warning,
/// since power changes estimated from it will be inaccurate.
pub fn receive_keff<S: CoefficientExchange>(
    solver: &mut S,
) -> Result<(Keff, Option<SolverStatus>)> {
    let mut raw = [0.0; 2];
    let code = solver.get_keff(&mut raw);
    let status = check(code, Operation::GetKeff, Subject::Problem)?;

    let keff = Keff::new(raw[0], raw[1])?;
    info!("Received k-effective {keff}");

    if keff.exceeds_beta() {
        warn!(
            "Reactivity {:.5} exceeds beta ({DELAYED_NEUTRON_FRACTION}), point kinetics power changes will be inaccurate",
            keff.reactivity()
        );
    }
    Ok((keff, status))
}
