//! The simulation state value.

use planetary_core::constants::{
    BASE_STEP_RAD, DEFAULT_ANIMATION_RATE, MAX_ANIMATION_RATE, MAX_PIXEL_RADIUS,
    MIN_ANIMATION_RATE,
};
use planetary_geometry::elongation::{ElongationFrameConvention, OrbitalBody};
use planetary_orbits::{CycleCounter, SeamBehavior, clamp_radius_au};
use planetary_phase::{ApparentSize, PhaseStrategy};

/// Knobs that shape how the state evolves and how it is observed.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub animation_rate: f64,
    pub base_step_rad: f64,
    pub max_pixel_radius: f64,
    pub phase_strategy: PhaseStrategy,
    pub frame_convention: ElongationFrameConvention,
    pub seam: SeamBehavior,
    pub apparent_size: ApparentSize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            animation_rate: DEFAULT_ANIMATION_RATE,
            base_step_rad: BASE_STEP_RAD,
            max_pixel_radius: MAX_PIXEL_RADIUS,
            phase_strategy: PhaseStrategy::default(),
            frame_convention: ElongationFrameConvention::default(),
            seam: SeamBehavior::default(),
            apparent_size: ApparentSize::default(),
        }
    }
}

/// Clamp an animation rate into the selectable range.
pub fn clamp_animation_rate(rate: f64) -> f64 {
    if rate.is_nan() {
        return DEFAULT_ANIMATION_RATE;
    }
    rate.clamp(MIN_ANIMATION_RATE, MAX_ANIMATION_RATE)
}

/// One orbiting body as the simulator tracks it.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyState {
    pub name: String,
    pub radius_au: f64,
    pub radius_pixels: f64,
    pub angle: f64,
}

impl BodyState {
    pub fn new(name: impl Into<String>, radius_au: f64, radius_pixels: f64) -> Self {
        Self {
            name: name.into(),
            radius_au,
            radius_pixels,
            angle: 0.0,
        }
    }

    pub fn orbital(&self) -> OrbitalBody {
        OrbitalBody::new(self.radius_au, self.radius_pixels, self.angle)
    }
}

/// Everything the simulator knows. Changed only through
/// [`reduce`](crate::reducer::reduce).
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationState {
    pub observer: BodyState,
    pub target: BodyState,
    pub counter: CycleCounter,
    pub playing: bool,
    pub settings: Settings,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl SimulationState {
    /// Earth observing Venus, both at angle zero, paused.
    pub fn new(settings: Settings) -> Self {
        Self::with_bodies(
            settings,
            ("observer (earth)".to_string(), 1.00),
            ("target (venus)".to_string(), 0.72),
        )
    }

    /// State with the given `(name, radius_au)` pairs, both at angle zero.
    /// Radii are clamped into the accepted range.
    pub fn with_bodies(
        settings: Settings,
        observer: (String, f64),
        target: (String, f64),
    ) -> Self {
        let observer_au = clamp_radius_au(observer.1);
        let target_au = clamp_radius_au(target.1);
        let (observer_pixels, target_pixels) =
            pixel_radii(observer_au, target_au, settings.max_pixel_radius);
        Self {
            observer: BodyState::new(observer.0, observer_au, observer_pixels),
            target: BodyState::new(target.0, target_au, target_pixels),
            counter: CycleCounter::default(),
            playing: false,
            settings,
        }
    }
}

/// Drawn orbit radii: the larger orbit gets `max_pixels`, the other keeps the
/// true ratio.
pub fn pixel_radii(observer_au: f64, target_au: f64, max_pixels: f64) -> (f64, f64) {
    if observer_au >= target_au {
        (max_pixels, target_au / observer_au * max_pixels)
    } else {
        (observer_au / target_au * max_pixels, max_pixels)
    }
}
