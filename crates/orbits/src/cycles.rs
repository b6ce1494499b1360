//! Counting completed revolutions of the observer about the centre.

use std::f64::consts::{FRAC_PI_2, PI};

use planetary_core::angle::lift_from_baseline;
use tracing::debug;

/// Upper edge of the fourth-quadrant band. It sits slightly above 2π because
/// a shifted angle of exactly zero is lifted to a full turn.
const FOURTH_QUADRANT_CEILING: f64 = 2.0 * PI + 0.1;

/// Change to the completed-cycle count produced by one observer move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDelta {
    Backward,
    None,
    Forward,
}

impl CycleDelta {
    pub fn as_i64(self) -> i64 {
        match self {
            CycleDelta::Backward => -1,
            CycleDelta::None => 0,
            CycleDelta::Forward => 1,
        }
    }
}

fn in_first_quadrant(angle: f64) -> bool {
    angle > 0.0 && angle < FRAC_PI_2
}

fn in_fourth_quadrant(angle: f64) -> bool {
    angle > 3.0 * FRAC_PI_2 && angle < FOURTH_QUADRANT_CEILING
}

/// Classify a move from `prev` to `new` relative to the `theta_shift` baseline.
///
/// A move from the fourth-quadrant band into the first-quadrant band counts
/// as a completed cycle; the reverse move undoes one. Anything else, including
/// the mirrored jump at the `+π` seam, leaves the count alone. Callers must
/// keep each move well under a quarter turn.
pub fn detect_cycle_crossing(prev: f64, new: f64, theta_shift: f64) -> CycleDelta {
    let prev = lift_from_baseline(prev, theta_shift);
    let new = lift_from_baseline(new, theta_shift);

    if in_first_quadrant(new) && in_fourth_quadrant(prev) {
        CycleDelta::Forward
    } else if in_first_quadrant(prev) && in_fourth_quadrant(new) {
        CycleDelta::Backward
    } else {
        CycleDelta::None
    }
}

/// Completed observer revolutions since the last time reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CycleCounter {
    pub cycles_completed: i64,
    /// Observer angle at the last reset.
    pub theta_shift: f64,
}

impl CycleCounter {
    /// Counter baselined at `angle`.
    pub fn starting_at(angle: f64) -> Self {
        Self {
            cycles_completed: 0,
            theta_shift: angle,
        }
    }

    /// Counter after the observer moved from `prev` to `new`.
    pub fn record(&self, prev: f64, new: f64) -> Self {
        let delta = detect_cycle_crossing(prev, new, self.theta_shift);
        if delta != CycleDelta::None {
            debug!(
                ?delta,
                cycles = self.cycles_completed + delta.as_i64(),
                "observer crossed its baseline"
            );
        }
        Self {
            cycles_completed: self.cycles_completed + delta.as_i64(),
            theta_shift: self.theta_shift,
        }
    }

    /// Zero the count and move the baseline to `angle`.
    pub fn reset(&self, angle: f64) -> Self {
        Self::starting_at(angle)
    }
}
