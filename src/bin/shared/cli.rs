//! Helpers shared by the command-line binaries.

use std::str::FromStr;

use clap::ValueEnum;
use planetary_configurations::config::{
    BodyPreset, PhaseStrategyConfig, SeamConfig, SimulationConfig,
};
use planetary_configurations::sim::{Event, SimulationState, reduce, settings};
use tracing_subscriber::{EnvFilter, fmt};

/// Install the stderr log subscriber. `RUST_LOG` overrides the `info` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// A body given on the command line, either by preset name or by radius in AU.
#[derive(Debug, Clone, PartialEq)]
pub enum BodyArg {
    Preset(String),
    Radius(f64),
}

impl FromStr for BodyArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("body must be a preset name or a radius in AU".to_string());
        }
        match s.parse::<f64>() {
            Ok(radius) if radius.is_finite() && radius > 0.0 => Ok(BodyArg::Radius(radius)),
            Ok(radius) => Err(format!("radius {radius} AU must be positive")),
            Err(_) => Ok(BodyArg::Preset(s.to_string())),
        }
    }
}

/// Initial state for the configured bodies, with command-line overrides.
///
/// Preset names replace the configured presets; radii are applied afterwards
/// as radius changes, so those bodies carry the generic labels.
pub fn build_state(
    config: &SimulationConfig,
    presets: &[BodyPreset],
    observer: Option<&BodyArg>,
    target: Option<&BodyArg>,
) -> anyhow::Result<SimulationState> {
    let mut config = config.clone();
    if let Some(BodyArg::Preset(name)) = observer {
        config.observer = name.clone();
    }
    if let Some(BodyArg::Preset(name)) = target {
        config.target = name.clone();
    }

    let mut state = settings::initial_state(&config, presets)?;
    if let Some(BodyArg::Radius(radius_au)) = observer {
        state = reduce(&state, &Event::SetObserverRadius(*radius_au));
    }
    if let Some(BodyArg::Radius(radius_au)) = target {
        state = reduce(&state, &Event::SetTargetRadius(*radius_au));
    }
    Ok(state)
}

#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum StrategyArg {
    Linear,
    LawOfCosines,
}

impl From<StrategyArg> for PhaseStrategyConfig {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Linear => PhaseStrategyConfig::Linear,
            StrategyArg::LawOfCosines => PhaseStrategyConfig::LawOfCosines,
        }
    }
}

#[derive(Copy, Clone, ValueEnum, Debug)]
pub enum SeamArg {
    Mirror,
    Wrap,
}

impl From<SeamArg> for SeamConfig {
    fn from(arg: SeamArg) -> Self {
        match arg {
            SeamArg::Mirror => SeamConfig::Mirror,
            SeamArg::Wrap => SeamConfig::Wrap,
        }
    }
}

/// `E`, `W`, or empty.
pub fn direction_label<T: std::fmt::Display>(direction: Option<T>) -> String {
    direction.map(|d| d.to_string()).unwrap_or_default()
}
