// crate modules
use crate::error::{Error, Result};

// external crates
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// Axis along which the Legendre expansion is applied
///
/// The Zernike disk lies in the plane of the two remaining axes, taken in
/// ascending order.
///
/// | Direction | Legendre axis | Zernike (x', y') |
/// | --------- | ------------- | ---------------- |
/// | X         | x             | (y, z)           |
/// | Y         | y             | (x, z)           |
/// | Z         | z             | (x, y)           |
///
/// The default is `Z`, the usual case of a pin or channel aligned with the
/// z-axis.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxialDirection {
    /// Legendre in x, Zernike in y-z
    X = 0,
    /// Legendre in y, Zernike in x-z
    Y = 1,
    /// Legendre in z, Zernike in x-y
    #[default]
    Z = 2,
}

impl AxialDirection {
    /// Component index of the Legendre axis
    pub fn axial_index(&self) -> usize {
        *self as usize
    }

    /// Component indices of the Zernike plane
    pub fn transverse_indices(&self) -> (usize, usize) {
        match self {
            Self::X => (1, 2),
            Self::Y => (0, 2),
            Self::Z => (0, 1),
        }
    }

    /// Split a point into its axial and transverse coordinates
    ///
    /// ```rust
    /// # use fetools_basis::AxialDirection;
    /// # use nalgebra::Point3;
    /// let p = Point3::new(1.0, 2.0, 3.0);
    /// assert_eq!(AxialDirection::Z.split(&p), (3.0, (1.0, 2.0)));
    /// assert_eq!(AxialDirection::Y.split(&p), (2.0, (1.0, 3.0)));
    /// assert_eq!(AxialDirection::X.split(&p), (1.0, (2.0, 3.0)));
    /// ```
    pub fn split(&self, point: &Point3<f64>) -> (f64, (f64, f64)) {
        let (i, j) = self.transverse_indices();
        (point[self.axial_index()], (point[i], point[j]))
    }

    /// Inverse of [split()](AxialDirection::split)
    ///
    /// ```rust
    /// # use fetools_basis::AxialDirection;
    /// # use nalgebra::Point3;
    /// let p = Point3::new(1.0, 2.0, 3.0);
    /// let (axial, transverse) = AxialDirection::Y.split(&p);
    /// assert_eq!(AxialDirection::Y.compose(axial, transverse), p);
    /// ```
    pub fn compose(&self, axial: f64, transverse: (f64, f64)) -> Point3<f64> {
        let (i, j) = self.transverse_indices();
        let mut point = Point3::origin();
        point[self.axial_index()] = axial;
        point[i] = transverse.0;
        point[j] = transverse.1;
        point
    }

    /// Full name i.e. 'X', 'Y', 'Z'
    pub fn name(&self) -> &str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

impl TryFrom<i32> for AxialDirection {
    type Error = Error;

    /// Component index as used by finite element hosts, 0=x 1=y 2=z
    fn try_from(value: i32) -> Result<Self> {
        match value {
            0 => Ok(Self::X),
            1 => Ok(Self::Y),
            2 => Ok(Self::Z),
            _ => Err(Error::FailedToInferDirection(value.to_string())),
        }
    }
}

impl std::str::FromStr for AxialDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "x" | "0" => Ok(Self::X),
            "y" | "1" => Ok(Self::Y),
            "z" | "2" => Ok(Self::Z),
            _ => Err(Error::FailedToInferDirection(s.to_string())),
        }
    }
}

impl std::fmt::Display for AxialDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
