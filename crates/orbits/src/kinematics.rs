//! Angular speed from orbital radius and per-frame angle advancement.
//!
//! Speeds are expressed as multipliers of the reference orbit (1 AU), so a
//! multiplier of `1.0` completes one revolution per Earth year.

use std::f64::consts::{PI, TAU};

use planetary_core::constants::{EARTH_YEAR_DAYS, KEPLER_EXPONENT, MAX_RADIUS_AU, MIN_RADIUS_AU};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Angular velocity multiplier `radius_au^-1.5`.
///
/// A radius that is not a finite positive number is replaced by the lower
/// domain bound so the result is always positive and finite.
pub fn velocity_multiplier(radius_au: f64) -> f64 {
    let radius_au = if radius_au.is_finite() && radius_au > 0.0 {
        radius_au
    } else {
        warn!(radius_au, fallback = MIN_RADIUS_AU, "non-positive orbital radius");
        MIN_RADIUS_AU
    };
    radius_au.powf(KEPLER_EXPONENT)
}

/// Orbital period of a body at `radius_au`, in Earth days.
pub fn orbital_period_days(radius_au: f64) -> f64 {
    EARTH_YEAR_DAYS / velocity_multiplier(radius_au)
}

/// Time between successive identical configurations of the two bodies, in
/// Earth days. `None` when the orbits share a period.
pub fn synodic_period_days(observer_radius_au: f64, target_radius_au: f64) -> Option<f64> {
    let relative = (velocity_multiplier(observer_radius_au)
        - velocity_multiplier(target_radius_au))
    .abs();
    (relative > f64::EPSILON).then(|| EARTH_YEAR_DAYS / relative)
}

/// Clamp a radius into the range the controls accept.
pub fn clamp_radius_au(radius_au: f64) -> f64 {
    if radius_au.is_nan() {
        return MIN_RADIUS_AU;
    }
    radius_au.clamp(MIN_RADIUS_AU, MAX_RADIUS_AU)
}

/// How an advancing angle re-enters the `(-π, π]` range once it passes `+π`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeamBehavior {
    /// Negate the angle, jumping to its mirror image across the x-axis.
    ///
    /// This is the established behaviour of the simulator. The body steps back
    /// by twice the overshoot, so the angle's derivative is discontinuous at
    /// the seam.
    #[default]
    Mirror,
    /// Subtract a full turn, keeping the motion continuous.
    Wrap,
}

/// Result of advancing one body by one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Advance {
    pub angle: f64,
    /// `true` when the step passed `+π` and the seam rule was applied.
    pub seam_crossed: bool,
}

/// Advance `current` by `multiplier * step` using the given seam rule.
pub fn advance(current: f64, multiplier: f64, step: f64, seam: SeamBehavior) -> Advance {
    let stepped = current + multiplier * step;
    if stepped > PI {
        let angle = match seam {
            SeamBehavior::Mirror => -stepped,
            SeamBehavior::Wrap => stepped - TAU,
        };
        Advance {
            angle,
            seam_crossed: true,
        }
    } else {
        Advance {
            angle: stepped,
            seam_crossed: false,
        }
    }
}

/// Advance `current` by `multiplier * step`, mirroring past `+π`.
pub fn advance_angle(current: f64, multiplier: f64, step: f64) -> f64 {
    advance(current, multiplier, step, SeamBehavior::Mirror).angle
}
