//! Phase of the target body as seen from the observer, and the quantities the
//! phase view draws from it.

pub mod size;
pub mod strategy;
pub mod terminator;

pub use size::ApparentSize;
pub use strategy::{PhaseInput, PhaseStrategy, illuminated_fraction, linear_phase};
pub use terminator::{MaskSide, NightSideArc, Terminator};
