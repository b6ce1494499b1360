use std::f64::consts::{PI, TAU};

use planetary_configurations::config::BodyPreset;
use planetary_configurations::sim::{
    Event, PhaseStrategy, SeamBehavior, Settings, SimulationState, observe, reduce,
};

const TOL: f64 = 1e-9;
const STEP: f64 = 0.0115 * 1.5;

fn run(state: &SimulationState, events: &[Event]) -> SimulationState {
    events
        .iter()
        .fold(state.clone(), |state, event| reduce(&state, event))
}

fn ticks(state: &SimulationState, n: usize) -> SimulationState {
    (0..n).fold(state.clone(), |state, _| reduce(&state, &Event::Tick))
}

fn mars() -> BodyPreset {
    BodyPreset {
        name: "MARS".to_string(),
        radius_au: 1.52,
        label: None,
    }
}

#[test]
fn initial_state_is_earth_observing_venus() {
    let state = SimulationState::default();
    assert_eq!(state.observer.name, "observer (earth)");
    assert_eq!(state.target.name, "target (venus)");
    assert_eq!(state.observer.radius_au, 1.0);
    assert_eq!(state.target.radius_au, 0.72);
    assert_eq!(state.observer.radius_pixels, 400.0);
    assert!((state.target.radius_pixels - 288.0).abs() < TOL);
    assert_eq!((state.observer.angle, state.target.angle), (0.0, 0.0));
    assert!(!state.playing);
    assert_eq!(state.counter.cycles_completed, 0);
}

#[test]
fn tick_is_a_no_op_while_paused() {
    let state = SimulationState::default();
    assert_eq!(reduce(&state, &Event::Tick), state);
}

#[test]
fn reduce_leaves_its_input_untouched() {
    let state = SimulationState::default();
    let before = state.clone();
    let _ = run(&state, &[Event::Play, Event::Tick, Event::SetObserverRadius(3.0)]);
    assert_eq!(state, before);
}

#[test]
fn tick_advances_both_bodies_by_their_multipliers() {
    let state = run(&SimulationState::default(), &[Event::Play, Event::Tick]);
    assert!((state.observer.angle - STEP).abs() < TOL);
    assert!((state.target.angle - STEP * 0.72_f64.powf(-1.5)).abs() < TOL);
    assert!(state.target.angle > state.observer.angle);
    assert_eq!(state.counter.cycles_completed, 1);
}

#[test]
fn animation_rate_scales_the_step() {
    let state = run(
        &SimulationState::default(),
        &[Event::SetAnimationRate(0.5), Event::Play, Event::Tick],
    );
    assert!((state.observer.angle - 0.0115 * 0.5).abs() < TOL);
}

#[test]
fn animation_rate_is_clamped() {
    let fast = reduce(&SimulationState::default(), &Event::SetAnimationRate(100.0));
    assert!((fast.settings.animation_rate - 1.5 * PI).abs() < TOL);
    let slow = reduce(&SimulationState::default(), &Event::SetAnimationRate(0.0));
    assert!((slow.settings.animation_rate - 0.1).abs() < TOL);
}

#[test]
fn play_and_pause_toggle_playback() {
    let playing = reduce(&SimulationState::default(), &Event::Play);
    assert!(playing.playing);
    assert!(!reduce(&playing, &Event::Pause).playing);
}

#[test]
fn dragging_pauses_and_sets_the_angle() {
    let state = run(
        &SimulationState::default(),
        &[Event::Play, Event::DragTarget(1.0)],
    );
    assert!(!state.playing);
    assert_eq!(state.target.angle, 1.0);

    // Further ticks wait until playback resumes.
    let after = ticks(&state, 3);
    assert_eq!(after.target.angle, 1.0);
}

#[test]
fn dragging_the_observer_feeds_the_cycle_counter() {
    let state = run(
        &SimulationState::default(),
        &[Event::DragObserver(-0.05), Event::DragObserver(0.05)],
    );
    assert_eq!(state.counter.cycles_completed, 1);
    let back = reduce(&state, &Event::DragObserver(-0.05));
    assert_eq!(back.counter.cycles_completed, 0);

    // Target drags never touch the counter.
    let target = run(&state, &[Event::DragTarget(-0.05), Event::DragTarget(0.05)]);
    assert_eq!(target.counter, state.counter);
}

#[test]
fn observer_radius_is_clamped_and_resets_time() {
    let played = ticks(&reduce(&SimulationState::default(), &Event::Play), 10);
    let state = reduce(&played, &Event::SetObserverRadius(20.0));

    assert_eq!(state.observer.radius_au, 10.0);
    assert_eq!(state.observer.name, "observer planet");
    assert_eq!(state.observer.radius_pixels, 400.0);
    assert!((state.target.radius_pixels - 28.8).abs() < TOL);
    assert_eq!(state.counter.cycles_completed, 0);
    assert_eq!(state.counter.theta_shift, played.observer.angle);
    assert_eq!(observe(&state).elapsed.total_days, 0.0);
}

#[test]
fn target_radius_keeps_the_clock() {
    let played = ticks(&reduce(&SimulationState::default(), &Event::Play), 10);
    let state = reduce(&played, &Event::SetTargetRadius(0.1));
    assert_eq!(state.target.radius_au, 0.25);
    assert_eq!(state.target.name, "target planet");
    assert_eq!(state.counter, played.counter);
}

#[test]
fn preset_selection_names_the_body() {
    let state = reduce(
        &SimulationState::default(),
        &Event::SelectTargetPreset(mars()),
    );
    assert_eq!(state.target.name, "target (mars)");
    assert_eq!(state.target.radius_au, 1.52);
    assert_eq!(state.target.radius_pixels, 400.0);
    assert!((state.observer.radius_pixels - 400.0 / 1.52).abs() < TOL);

    let labelled = BodyPreset {
        label: Some("red planet".to_string()),
        ..mars()
    };
    let state = reduce(&state, &Event::SelectObserverPreset(labelled));
    assert_eq!(state.observer.name, "observer (red planet)");
}

#[test]
fn phase_strategy_switches_the_observation() {
    let state = run(
        &SimulationState::default(),
        &[Event::DragTarget(0.72_f64.acos())],
    );
    let linear = observe(&state);
    let cosines = observe(&reduce(
        &state,
        &Event::SetPhaseStrategy(PhaseStrategy::LawOfCosines),
    ));
    assert!((linear.phase_fraction - 0.75).abs() < TOL);
    assert!((cosines.phase_fraction - 0.75).abs() < TOL);
    assert!((cosines.phase_angle - PI / 2.0).abs() < TOL);
}

#[test]
fn reset_time_rebaselines_at_the_observer() {
    let played = ticks(&reduce(&SimulationState::default(), &Event::Play), 50);
    assert!(observe(&played).elapsed.total_days > 0.0);

    let state = reduce(&played, &Event::ResetTime);
    assert_eq!(state.counter.cycles_completed, 0);
    assert_eq!(state.counter.theta_shift, played.observer.angle);
    assert_eq!(state.observer, played.observer);
    assert_eq!(observe(&state).elapsed.total_days, 0.0);
}

#[test]
fn reset_restores_bodies_and_keeps_settings() {
    let state = run(
        &SimulationState::default(),
        &[
            Event::SetPhaseStrategy(PhaseStrategy::LawOfCosines),
            Event::SetAnimationRate(2.0),
            Event::SelectTargetPreset(mars()),
            Event::Play,
            Event::Tick,
            Event::Tick,
            Event::Reset,
        ],
    );
    let mut expected_settings = Settings::default();
    expected_settings.phase_strategy = PhaseStrategy::LawOfCosines;
    expected_settings.animation_rate = 2.0;
    assert_eq!(state, SimulationState::new(expected_settings));
}

#[test]
fn mirrored_seam_leaves_the_count_alone() {
    let state = run(
        &SimulationState::default(),
        &[Event::DragObserver(3.13), Event::Play],
    );
    let cycles = state.counter.cycles_completed;
    let state = reduce(&state, &Event::Tick);
    assert!((state.observer.angle + (3.13 + STEP)).abs() < TOL);
    assert_eq!(state.counter.cycles_completed, cycles);
}

#[test]
fn mirrored_seam_counts_orbits_from_a_baseline_near_pi() {
    let start = run(
        &SimulationState::default(),
        &[Event::DragObserver(3.14), Event::ResetTime, Event::Play],
    );
    let state = ticks(&start, 1000);

    // Departure plus two full orbits.
    assert_eq!(state.counter.cycles_completed, 3);

    let elapsed = observe(&state).elapsed;
    assert!(elapsed.total_days > 2.0 * 365.0, "{elapsed:?}");
    assert!(elapsed.total_days < 1000.0 * STEP / TAU * 365.0, "{elapsed:?}");
    assert_eq!(elapsed.years, 2);
}

#[test]
fn wrapped_seam_tracks_elapsed_time_continuously() {
    let settings = Settings {
        seam: SeamBehavior::Wrap,
        ..Settings::default()
    };
    let start = reduce(&SimulationState::new(settings), &Event::Play);
    let state = ticks(&start, 400);

    // Departure plus one full orbit.
    assert_eq!(state.counter.cycles_completed, 2);
    assert!(state.observer.angle > -PI && state.observer.angle <= PI);

    let elapsed = observe(&state).elapsed;
    let expected = 400.0 * STEP / TAU * 365.0;
    assert!((elapsed.total_days - expected).abs() < 1e-6);
    assert_eq!(elapsed.years, 1);
}

#[test]
fn observation_of_the_initial_state() {
    let observation = observe(&SimulationState::default());
    assert!(observation.elongation.elongation_angle.abs() < TOL);
    assert_eq!(observation.elongation.direction, None);
    assert!(observation.phase_fraction.abs() < TOL);
    assert!(observation.illuminated_fraction.abs() < TOL);
    assert_eq!(observation.terminator.mask, None);
    assert!((observation.apparent_diameter - 275.0).abs() < TOL);
    assert!((observation.apparent_scale - 1.0).abs() < TOL);
    assert_eq!(observation.heliocentric_separation, 0.0);
    assert_eq!(observation.elapsed.total_days, 0.0);
}

#[test]
fn observation_fields_stay_in_range_while_playing() {
    let mut state = reduce(&SimulationState::default(), &Event::Play);
    for _ in 0..2000 {
        state = reduce(&state, &Event::Tick);
        let observation = observe(&state);
        assert!((0.0..=PI).contains(&observation.elongation.elongation_angle));
        assert!((0.0..=1.0).contains(&observation.phase_fraction));
        assert!((0.0..=1.0).contains(&observation.illuminated_fraction));
        assert!((0.0..=PI).contains(&observation.heliocentric_separation));
        assert!(observation.apparent_diameter.is_finite());
        assert!(state.observer.angle >= -PI - STEP && state.observer.angle <= PI);
    }
}
