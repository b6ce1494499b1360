//! Two-planet configuration simulator.
//!
//! An observer and a target planet move on concentric circular orbits about
//! the sun. Everything a front-end draws (elongation, phase, terminator shades,
//! apparent size, elapsed time) is derived from one explicit state value that
//! changes only through [`sim::reduce`]. The member crates are re-exported so
//! front-ends depend on this crate alone.

pub use planetary_config as config;
pub use planetary_core as core;
pub use planetary_export as export;
pub use planetary_geometry as geometry;
pub use planetary_orbits as orbits;
pub use planetary_phase as phase;
pub use planetary_sim as sim;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
