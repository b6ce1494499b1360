//! Orbit kinematics for two coplanar circular orbits about a shared centre.

pub mod cycles;
pub mod elapsed;
pub mod kinematics;

pub use cycles::{CycleCounter, CycleDelta, detect_cycle_crossing};
pub use elapsed::{ElapsedTime, days_into_cycle, elapsed_time};
pub use kinematics::{
    Advance, SeamBehavior, advance, advance_angle, clamp_radius_au, orbital_period_days,
    synodic_period_days, velocity_multiplier,
};
