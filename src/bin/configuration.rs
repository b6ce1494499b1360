use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use planetary_configurations::config::{
    FrameConventionConfig, SimulationConfig, load_presets, load_simulation_config,
};
use planetary_configurations::core::units::{degrees, radians};
use planetary_configurations::sim::{Event, observe, reduce};

#[path = "shared/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::{BodyArg, StrategyArg};

/// Describe one still configuration of the two bodies.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Elongation, phase, and apparent size for one configuration"
)]
struct Cli {
    /// Observer preset name (case-insensitive) or orbital radius in AU
    #[arg(long)]
    observer: Option<BodyArg>,

    /// Target preset name (case-insensitive) or orbital radius in AU
    #[arg(long)]
    target: Option<BodyArg>,

    /// Observer orbital angle (radians unless --degrees)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    observer_angle: f64,

    /// Target orbital angle (radians unless --degrees)
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    target_angle: f64,

    /// Read the angles as degrees
    #[arg(long, default_value_t = false)]
    degrees: bool,

    /// Phase strategy (overrides the settings file)
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Frame convention used for bearings
    #[arg(long, value_enum)]
    convention: Option<ConventionArg>,

    /// Body preset catalog: a directory of TOML files or a single TOML/YAML file
    #[arg(long, default_value = "configs/bodies")]
    presets: PathBuf,

    /// Simulation settings file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum ConventionArg {
    MathYUp,
    ScreenYDown,
}

fn main() -> anyhow::Result<()> {
    cli::init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_simulation_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(strategy) = cli.strategy {
        config.phase_strategy = strategy.into();
    }
    if let Some(convention) = cli.convention {
        config.frame_convention = match convention {
            ConventionArg::MathYUp => FrameConventionConfig::MathYUp,
            ConventionArg::ScreenYDown => FrameConventionConfig::ScreenYDown,
        };
    }

    let presets = load_presets(&cli.presets)?;
    let state = cli::build_state(
        &config,
        &presets,
        cli.observer.as_ref(),
        cli.target.as_ref(),
    )?;

    let (observer_angle, target_angle) = if cli.degrees {
        (radians(cli.observer_angle), radians(cli.target_angle))
    } else {
        (cli.observer_angle, cli.target_angle)
    };
    let state = reduce(&state, &Event::DragObserver(observer_angle));
    let state = reduce(&state, &Event::DragTarget(target_angle));

    let observation = observe(&state);
    let elongation = &observation.elongation;
    println!("observer: {} ({:.2} AU)", state.observer.name, state.observer.radius_au);
    println!("target: {} ({:.2} AU)", state.target.name, state.target.radius_au);
    println!("elongation_deg: {:.3}", degrees(elongation.elongation_angle));
    println!("direction: {}", cli::direction_label(elongation.direction));
    println!("distance_au: {:.6}", elongation.distance);
    println!(
        "heliocentric_separation_deg: {:.3}",
        degrees(observation.heliocentric_separation)
    );
    println!("phase_angle_deg: {:.3}", degrees(observation.phase_angle));
    println!("phase_fraction: {:.6}", observation.phase_fraction);
    println!("illuminated_fraction: {:.6}", observation.illuminated_fraction);
    println!(
        "terminator: left {:.3} right {:.3} mask {}",
        observation.terminator.left_scale,
        observation.terminator.right_scale,
        observation
            .terminator
            .mask
            .map(|side| format!("{side:?}").to_lowercase())
            .unwrap_or_else(|| "none".to_string())
    );
    println!(
        "apparent_diameter_px: {:.3} (scale {:.3})",
        observation.apparent_diameter, observation.apparent_scale
    );
    Ok(())
}
