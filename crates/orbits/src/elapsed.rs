//! Elapsed simulated time, in Earth days and years, derived from the observer's
//! orbit.
//!
//! Nothing here is stored: the display value is recomputed from the cycle
//! counter and the observer's current angle every time it is needed.

use std::f64::consts::TAU;

use planetary_core::angle::normalize_to_two_pi;
use planetary_core::constants::EARTH_YEAR_DAYS;

use crate::cycles::CycleCounter;
use crate::kinematics::orbital_period_days;

/// Elapsed simulated time since the last reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElapsedTime {
    /// Signed total, in Earth days.
    pub total_days: f64,
    /// Whole Earth years. Negative totals are floored and then moved one year
    /// towards zero, so `-10` days reads as year `0`.
    pub years: i64,
    /// Days past the last whole year; carries the sign of `total_days`.
    pub days: f64,
}

/// Earth days the observer has spent travelling from the baseline to
/// `observer_angle` within its current revolution.
///
/// Angles behind the baseline are counted the long way round.
pub fn days_into_cycle(observer_angle: f64, theta_shift: f64, observer_radius_au: f64) -> f64 {
    let angle = normalize_to_two_pi(observer_angle - theta_shift);
    angle / TAU * orbital_period_days(observer_radius_au)
}

/// Elapsed time for an observer at `observer_angle` on an orbit of
/// `observer_radius_au`.
///
/// The counter registers the first step away from a fresh baseline as a
/// crossing, so a positive count includes that departure and is reduced by
/// one. A count of zero or less means the observer is behind the baseline and
/// the within-cycle days are taken as negative.
pub fn elapsed_time(
    counter: &CycleCounter,
    observer_angle: f64,
    observer_radius_au: f64,
) -> ElapsedTime {
    let period = orbital_period_days(observer_radius_au);
    let days = days_into_cycle(observer_angle, counter.theta_shift, observer_radius_au);
    let cycles = counter.cycles_completed;

    let within_cycle = if days == 0.0 {
        0.0
    } else if cycles <= 0 {
        days - period
    } else {
        days
    };
    let completed = if cycles > 0 { cycles - 1 } else { cycles };

    let total_days = completed as f64 * period + within_cycle;
    let mut years = (total_days / EARTH_YEAR_DAYS).floor() as i64;
    if years < 0 {
        years += 1;
    }

    ElapsedTime {
        total_days,
        years,
        days: total_days % EARTH_YEAR_DAYS,
    }
}
