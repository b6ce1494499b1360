//! Simulation façade: an explicit state value, the events that change it, and
//! the observations derived from it.

pub mod observation;
pub mod reducer;
pub mod state;

pub use facade::*;
pub use planetary_geometry as geometry;
pub use planetary_orbits as orbits;
pub use planetary_phase as phase;

mod facade;
