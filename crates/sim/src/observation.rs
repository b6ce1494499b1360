//! Values derived from a state for display.

use planetary_geometry::elongation::{
    ElongationResult, Vertex, heliocentric_separation, solve as solve_elongation,
};
use planetary_orbits::{ElapsedTime, elapsed_time};
use planetary_phase::{PhaseInput, Terminator, illuminated_fraction};

use crate::state::SimulationState;

/// Everything the views draw for one state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    /// Elongation of the target seen from the observer.
    pub elongation: ElongationResult,
    /// Sun-target-observer angle in `[0, π]`, per the configured strategy.
    pub phase_angle: f64,
    pub phase_fraction: f64,
    pub illuminated_fraction: f64,
    pub terminator: Terminator,
    /// Drawn diameter of the target in the phase view, in pixels.
    pub apparent_diameter: f64,
    pub apparent_scale: f64,
    /// Angle between the bodies seen from the sun.
    pub heliocentric_separation: f64,
    pub elapsed: ElapsedTime,
}

/// Derive the observation for `state`.
pub fn observe(state: &SimulationState) -> Observation {
    let settings = &state.settings;
    let observer = state.observer.orbital();
    let target = state.target.orbital();

    let elongation = solve_elongation(
        &observer,
        &target,
        Vertex::Observer,
        settings.frame_convention,
    );

    let input = PhaseInput::from_bodies(&observer, &target, settings.frame_convention);
    let phase_angle = settings.phase_strategy.phase_angle(&input);
    let phase_fraction = settings.phase_strategy.phase_fraction(&input);

    let apparent_diameter = settings.apparent_size.diameter(
        elongation.distance,
        observer.radius_au,
        target.radius_au,
    );

    Observation {
        elongation,
        phase_angle,
        phase_fraction,
        illuminated_fraction: illuminated_fraction(phase_angle),
        terminator: Terminator::from_phase(phase_fraction),
        apparent_diameter,
        apparent_scale: settings.apparent_size.scale(apparent_diameter),
        heliocentric_separation: heliocentric_separation(&observer, &target),
        elapsed: elapsed_time(&state.counter, observer.angle, observer.radius_au),
    }
}
