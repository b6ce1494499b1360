//! Phase fraction strategies.
//!
//! A phase fraction walks once through `[0, 1)` per synodic cycle: `0` is new,
//! `0.25` and `0.75` are the quarters, `0.5` is full. Both strategies map onto
//! this same cycle; they differ only in how the phase angle is obtained.

use std::f64::consts::{PI, TAU};

use planetary_core::angle::fold_to_pi;
use planetary_geometry::elongation::{
    ElongationFrameConvention, OrbitalBody, Vertex, solve as solve_elongation,
};
use planetary_geometry::triangle::triangle_angle;
use serde::{Deserialize, Serialize};

/// Geometry a phase strategy needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseInput {
    /// Raw separation between the observer and the sun seen from the target,
    /// in `[0, 2π)`.
    pub raw_target_angle: f64,
    /// Observer-target distance.
    pub distance: f64,
    /// Target-sun distance.
    pub target_radius: f64,
    /// Observer-sun distance.
    pub observer_radius: f64,
}

impl PhaseInput {
    pub fn from_bodies(
        observer: &OrbitalBody,
        target: &OrbitalBody,
        convention: ElongationFrameConvention,
    ) -> Self {
        let at_target = solve_elongation(observer, target, Vertex::Target, convention);
        Self {
            raw_target_angle: at_target.raw_elongation,
            distance: at_target.distance,
            target_radius: target.radius_au,
            observer_radius: observer.radius_au,
        }
    }
}

/// How the phase angle at the target is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhaseStrategy {
    /// Affine map of the raw target-vertex angle.
    #[default]
    Linear,
    /// Phase angle from the three side lengths of the sun-observer-target
    /// triangle.
    LawOfCosines,
}

impl PhaseStrategy {
    /// Sun-target-observer angle in `[0, π]`; `0` means fully lit.
    pub fn phase_angle(&self, input: &PhaseInput) -> f64 {
        match self {
            PhaseStrategy::Linear => fold_to_pi(input.raw_target_angle),
            PhaseStrategy::LawOfCosines => {
                triangle_angle(input.distance, input.target_radius, input.observer_radius)
            }
        }
    }

    /// Phase fraction in `[0, 1]`.
    pub fn phase_fraction(&self, input: &PhaseInput) -> f64 {
        match self {
            PhaseStrategy::Linear => linear_phase(input.raw_target_angle),
            PhaseStrategy::LawOfCosines => {
                let alpha = self.phase_angle(input);
                // At exactly π the target sits between the sun and the
                // observer; read that as new, as the linear map does.
                let phase = if input.raw_target_angle >= PI {
                    (PI - alpha) / TAU
                } else {
                    (PI + alpha) / TAU
                };
                clamp_fraction(phase)
            }
        }
    }
}

/// `(raw - π) / 2π`, folded into `[0, 1]`.
pub fn linear_phase(raw_target_angle: f64) -> f64 {
    let phase = (raw_target_angle - PI) / TAU;
    let phase = if phase > 1.0 {
        0.0
    } else if phase < 0.0 {
        phase + 1.0
    } else {
        phase
    };
    clamp_fraction(phase)
}

/// Fraction of the visible disk that is lit for a phase angle `alpha`.
pub fn illuminated_fraction(alpha: f64) -> f64 {
    clamp_fraction((1.0 + alpha.cos()) / 2.0)
}

fn clamp_fraction(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
