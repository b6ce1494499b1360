//! Configuration models and loaders for the planetary configurations simulator.

use std::f64::consts::FRAC_PI_2;
use std::fs::File;
use std::path::{Path, PathBuf};

use planetary_core::constants::{
    BASE_STEP_RAD, DEFAULT_ANIMATION_RATE, MAX_ANIMATION_RATE, MAX_PIXEL_RADIUS,
    MAX_RADIUS_AU, MIN_ANIMATION_RATE, MIN_RADIUS_AU,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// A named orbit offered as a preset for either body.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyPreset {
    pub name: String,
    pub radius_au: f64,
    /// Display label; defaults to the lower-cased name.
    #[serde(default)]
    pub label: Option<String>,
}

impl BodyPreset {
    pub fn display_name(&self) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| self.name.to_lowercase())
    }
}

/// Phase strategy as written in settings files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum PhaseStrategyConfig {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "law_of_cosines")]
    LawOfCosines,
}

/// Frame convention as written in settings files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrameConventionConfig {
    #[default]
    #[serde(rename = "math_y_up")]
    MathYUp,
    #[serde(rename = "screen_y_down")]
    ScreenYDown,
}

/// Seam rule as written in settings files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeamConfig {
    #[default]
    #[serde(rename = "mirror")]
    Mirror,
    #[serde(rename = "wrap")]
    Wrap,
}

/// Simulation settings. Every field may be omitted.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    /// Preset name for the observer.
    pub observer: String,
    /// Preset name for the target.
    pub target: String,
    pub animation_rate: f64,
    pub base_step_rad: f64,
    pub max_pixel_radius: f64,
    pub phase_strategy: PhaseStrategyConfig,
    pub frame_convention: FrameConventionConfig,
    pub seam: SeamConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            observer: "EARTH".to_string(),
            target: "VENUS".to_string(),
            animation_rate: DEFAULT_ANIMATION_RATE,
            base_step_rad: BASE_STEP_RAD,
            max_pixel_radius: MAX_PIXEL_RADIUS,
            phase_strategy: PhaseStrategyConfig::default(),
            frame_convention: FrameConventionConfig::default(),
            seam: SeamConfig::default(),
        }
    }
}

impl SimulationConfig {
    /// Reject settings the engine's preconditions do not cover.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_ANIMATION_RATE..=MAX_ANIMATION_RATE).contains(&self.animation_rate) {
            return Err(ConfigError::Invalid(format!(
                "animation_rate {} outside [{MIN_ANIMATION_RATE}, {MAX_ANIMATION_RATE:.3}]",
                self.animation_rate
            )));
        }
        // One frame must stay well under a quarter turn for cycle counting.
        let fastest_step = self.base_step_rad * MAX_ANIMATION_RATE * MIN_RADIUS_AU.powf(-1.5);
        if !(self.base_step_rad > 0.0) || fastest_step >= FRAC_PI_2 {
            return Err(ConfigError::Invalid(format!(
                "base_step_rad {} must be positive and keep every frame below a quarter turn",
                self.base_step_rad
            )));
        }
        if !(self.max_pixel_radius > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "max_pixel_radius {} must be positive",
                self.max_pixel_radius
            )));
        }
        Ok(())
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Load body presets from a directory of TOML files, a TOML file, or a YAML list.
pub fn load_presets<P: AsRef<Path>>(path: P) -> Result<Vec<BodyPreset>, ConfigError> {
    let presets: Vec<BodyPreset> = load_records(path)?;
    for preset in &presets {
        if !(MIN_RADIUS_AU..=MAX_RADIUS_AU).contains(&preset.radius_au) {
            return Err(ConfigError::Invalid(format!(
                "preset '{}' radius {} AU outside [{MIN_RADIUS_AU}, {MAX_RADIUS_AU}]",
                preset.name, preset.radius_au
            )));
        }
    }
    debug!(count = presets.len(), "loaded body presets");
    Ok(presets)
}

/// Find a preset by name, ignoring case.
pub fn find_preset<'a>(presets: &'a [BodyPreset], name: &str) -> Option<&'a BodyPreset> {
    let upper = name.to_uppercase();
    presets.iter().find(|p| p.name.to_uppercase() == upper)
}

/// Load simulation settings from a TOML or YAML file and validate them.
pub fn load_simulation_config<P: AsRef<Path>>(path: P) -> Result<SimulationConfig, ConfigError> {
    let path = path.as_ref();
    let config: SimulationConfig = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    config.validate()?;
    Ok(config)
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
