//! Coefficient exchange with an external transport solver
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod fourier;
mod heat;
mod layers;
mod reactivity;
mod status;
mod transfer;

#[doc(inline)]
pub use fourier::{FourierLegendreShape, DEFAULT_STRIDE};

#[doc(inline)]
pub use heat::heat_source;

#[doc(inline)]
pub use layers::{
    atom_density, layer_temperature, water_density, FluidLayers, AVOGADRO, WATER_MOLAR_MASS,
};

#[doc(inline)]
pub use reactivity::{receive_keff, Keff, DELAYED_NEUTRON_FRACTION};

#[doc(inline)]
pub use status::{check, Operation, Severity, SolverStatus, Subject};

#[doc(inline)]
pub use transfer::{CellTransfer, CoefficientExchange};

#[doc(inline)]
pub use error::{Error, Result};
