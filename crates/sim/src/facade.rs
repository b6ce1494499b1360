//! Re-exported APIs for consumers of the simulation crate.

pub use crate::observation::{Observation, observe};
pub use crate::reducer::{Event, reduce};
pub use crate::state::{BodyState, Settings, SimulationState, clamp_animation_rate, pixel_radii};
pub use planetary_geometry::{Direction, ElongationFrameConvention, ElongationResult};
pub use planetary_orbits::{CycleCounter, ElapsedTime, SeamBehavior};
pub use planetary_phase::{PhaseStrategy, Terminator};

pub mod settings {
    use planetary_config::{
        BodyPreset, FrameConventionConfig, PhaseStrategyConfig, SeamConfig, SimulationConfig,
        find_preset,
    };
    use planetary_geometry::ElongationFrameConvention;
    use planetary_orbits::SeamBehavior;
    use planetary_phase::PhaseStrategy;
    use thiserror::Error;
    use tracing::info;

    use crate::state::{Settings, SimulationState, clamp_animation_rate};

    /// Errors surfaced when building a state from configuration.
    #[derive(Debug, Error)]
    pub enum SettingsError {
        #[error("body preset '{0}' not found in catalog")]
        PresetNotFound(String),
        #[error("body preset catalog is empty")]
        EmptyCatalog,
    }

    pub fn phase_strategy(config: PhaseStrategyConfig) -> PhaseStrategy {
        match config {
            PhaseStrategyConfig::Linear => PhaseStrategy::Linear,
            PhaseStrategyConfig::LawOfCosines => PhaseStrategy::LawOfCosines,
        }
    }

    pub fn frame_convention(config: FrameConventionConfig) -> ElongationFrameConvention {
        match config {
            FrameConventionConfig::MathYUp => ElongationFrameConvention::MathYUp,
            FrameConventionConfig::ScreenYDown => ElongationFrameConvention::ScreenYDown,
        }
    }

    pub fn seam(config: SeamConfig) -> SeamBehavior {
        match config {
            SeamConfig::Mirror => SeamBehavior::Mirror,
            SeamConfig::Wrap => SeamBehavior::Wrap,
        }
    }

    /// Convert a `SimulationConfig` into runtime `Settings`.
    pub fn from_config(config: &SimulationConfig) -> Settings {
        Settings {
            animation_rate: clamp_animation_rate(config.animation_rate),
            base_step_rad: config.base_step_rad,
            max_pixel_radius: config.max_pixel_radius,
            phase_strategy: phase_strategy(config.phase_strategy),
            frame_convention: frame_convention(config.frame_convention),
            seam: seam(config.seam),
            ..Settings::default()
        }
    }

    /// Look up a preset by name, ignoring case.
    pub fn select<'a>(
        presets: &'a [BodyPreset],
        name: &str,
    ) -> Result<&'a BodyPreset, SettingsError> {
        if presets.is_empty() {
            return Err(SettingsError::EmptyCatalog);
        }
        find_preset(presets, name).ok_or_else(|| SettingsError::PresetNotFound(name.to_string()))
    }

    /// Initial state for the observer and target presets named in `config`.
    pub fn initial_state(
        config: &SimulationConfig,
        presets: &[BodyPreset],
    ) -> Result<SimulationState, SettingsError> {
        let observer = select(presets, &config.observer)?;
        let target = select(presets, &config.target)?;
        info!(
            observer = %observer.name,
            target = %target.name,
            "initial configuration"
        );
        Ok(SimulationState::with_bodies(
            from_config(config),
            (
                format!("observer ({})", observer.display_name()),
                observer.radius_au,
            ),
            (
                format!("target ({})", target.display_name()),
                target.radius_au,
            ),
        ))
    }
}
