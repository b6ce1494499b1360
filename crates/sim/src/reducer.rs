//! Typed events and the pure transition function.
//!
//! The animation driver sends one [`Event::Tick`] per frame; controls send the
//! other events. Dragging a body pauses playback so only one writer moves the
//! angles at a time.

use planetary_config::BodyPreset;
use planetary_orbits::{SeamBehavior, advance, clamp_radius_au, velocity_multiplier};
use planetary_phase::PhaseStrategy;
use tracing::{debug, trace};

use crate::state::{SimulationState, clamp_animation_rate, pixel_radii};

/// Something that happened to the simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// One animation frame.
    Tick,
    Play,
    Pause,
    SetObserverRadius(f64),
    SetTargetRadius(f64),
    SelectObserverPreset(BodyPreset),
    SelectTargetPreset(BodyPreset),
    /// The observer was dragged to this orbital angle.
    DragObserver(f64),
    /// The target was dragged to this orbital angle.
    DragTarget(f64),
    SetAnimationRate(f64),
    SetPhaseStrategy(PhaseStrategy),
    /// Restart the elapsed-time clock from the observer's current angle.
    ResetTime,
    /// Restore the initial bodies, keeping the current settings.
    Reset,
}

/// Which of the two bodies an event is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Observer,
    Target,
}

/// Apply `event` to `state`, returning the next state.
pub fn reduce(state: &SimulationState, event: &Event) -> SimulationState {
    match event {
        Event::Tick => trace!("tick"),
        other => debug!(event = ?other, "reduce"),
    }

    let mut next = state.clone();
    match event {
        Event::Tick => {
            if state.playing {
                tick(&mut next);
            }
        }
        Event::Play => next.playing = true,
        Event::Pause => next.playing = false,
        Event::SetObserverRadius(radius_au) => {
            set_radius(&mut next, Role::Observer, *radius_au, "observer planet".to_string());
        }
        Event::SetTargetRadius(radius_au) => {
            set_radius(&mut next, Role::Target, *radius_au, "target planet".to_string());
        }
        Event::SelectObserverPreset(preset) => {
            let name = format!("observer ({})", preset.display_name());
            set_radius(&mut next, Role::Observer, preset.radius_au, name);
        }
        Event::SelectTargetPreset(preset) => {
            let name = format!("target ({})", preset.display_name());
            set_radius(&mut next, Role::Target, preset.radius_au, name);
        }
        Event::DragObserver(angle) => {
            next.playing = false;
            next.counter = state.counter.record(state.observer.angle, *angle);
            next.observer.angle = *angle;
        }
        Event::DragTarget(angle) => {
            next.playing = false;
            next.target.angle = *angle;
        }
        Event::SetAnimationRate(rate) => {
            next.settings.animation_rate = clamp_animation_rate(*rate);
        }
        Event::SetPhaseStrategy(strategy) => next.settings.phase_strategy = *strategy,
        Event::ResetTime => next.counter = state.counter.reset(state.observer.angle),
        Event::Reset => next = SimulationState::new(state.settings.clone()),
    }
    next
}

fn tick(state: &mut SimulationState) {
    let settings = &state.settings;
    let step = settings.base_step_rad * settings.animation_rate;

    let observer = advance(
        state.observer.angle,
        velocity_multiplier(state.observer.radius_au),
        step,
        settings.seam,
    );
    let target = advance(
        state.target.angle,
        velocity_multiplier(state.target.radius_au),
        step,
        settings.seam,
    );

    // A mirrored jump is not a real crossing and must not touch the count.
    if !(observer.seam_crossed && settings.seam == SeamBehavior::Mirror) {
        state.counter = state.counter.record(state.observer.angle, observer.angle);
    }
    state.observer.angle = observer.angle;
    state.target.angle = target.angle;
}

fn set_radius(state: &mut SimulationState, role: Role, radius_au: f64, name: String) {
    let radius_au = clamp_radius_au(radius_au);
    match role {
        Role::Observer => {
            state.observer.radius_au = radius_au;
            state.observer.name = name;
            // A new observer orbit changes the length of a year.
            state.counter = state.counter.reset(state.observer.angle);
        }
        Role::Target => {
            state.target.radius_au = radius_au;
            state.target.name = name;
        }
    }

    let (observer_pixels, target_pixels) = pixel_radii(
        state.observer.radius_au,
        state.target.radius_au,
        state.settings.max_pixel_radius,
    );
    state.observer.radius_pixels = observer_pixels;
    state.target.radius_pixels = target_pixels;
}
