// crate modules
use crate::error::Result;
use crate::order::ExpansionOrder;

// standard library
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

// external crates
use fetools_basis::{AxialDirection, LegendreBasis, ZernikeBasis, ZernikeLegendreBasis};
use serde::{Deserialize, Serialize};

/// Input parameters describing an expansion and its normalisation geometry
///
/// Field names follow the usual input parameter names of coupled multiphysics
/// inputs, so existing decks translate directly.
///
/// ```rust
/// # use fetools_expansion::ExpansionConfig;
/// # use fetools_basis::AxialDirection;
/// let config = ExpansionConfig::from_json(r#"{
///     "l_order": 4,
///     "n_order": 2,
///     "l_direction": "y",
///     "l_geom_norm": [0.0, 100.0],
///     "radius": 0.5
/// }"#).unwrap();
///
/// let (basis, order) = config.build().unwrap();
/// assert_eq!(order.num_coefficients(), 30);
/// assert_eq!(basis.direction(), AxialDirection::Y);
/// assert_eq!(basis.zernike().center(), [0.0, 0.0]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExpansionConfig {
    /// Highest Legendre order `L`
    pub l_order: usize,
    /// Highest Zernike radial order `N`
    pub n_order: usize,
    /// Axis of the Legendre expansion
    #[serde(default)]
    pub l_direction: AxialDirection,
    /// Axial `[min, max]` of the Legendre normalisation interval
    pub l_geom_norm: [f64; 2],
    /// Radius of the Zernike disk
    pub radius: f64,
    /// Centre of the Zernike disk in the transverse plane
    #[serde(default)]
    pub center: [f64; 2],
}

impl ExpansionConfig {
    /// Parse a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON file
    ///
    /// ```rust, no_run
    /// # use fetools_expansion::ExpansionConfig;
    /// let config = ExpansionConfig::read_json("path/to/expansion.json").unwrap();
    /// ```
    pub fn read_json<P: AsRef<Path>>(path: P) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        Ok(serde_json::from_reader(reader)?)
    }

    /// Validate everything and build the basis with its expansion order
    ///
    /// The resulting basis is immutable and shared by reference with every
    /// projection and reconstruction that uses it.
    pub fn build(&self) -> Result<(ZernikeLegendreBasis, ExpansionOrder)> {
        let [z_min, z_max] = self.l_geom_norm;
        let legendre = LegendreBasis::new(z_min, z_max)?;
        let zernike = ZernikeBasis::new(self.radius, self.center)?;
        let basis = ZernikeLegendreBasis::new(legendre, zernike, self.l_direction);
        Ok((basis, ExpansionOrder::new(self.l_order, self.n_order)))
    }
}
