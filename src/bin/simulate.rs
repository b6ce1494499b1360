use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use planetary_configurations::config::{SimulationConfig, load_presets, load_simulation_config};
use planetary_configurations::core::units::degrees;
use planetary_configurations::export::summary::{self, BodySummary, Extremes, Summary};
use planetary_configurations::export::trace;
use planetary_configurations::orbits::{orbital_period_days, synodic_period_days};
use planetary_configurations::sim::{BodyState, Event, Observation, observe, reduce};
use tracing::info;

#[path = "shared/cli.rs"]
mod cli;

use cli::{BodyArg, SeamArg, StrategyArg};

/// Run the two-planet simulation headlessly for a fixed number of frames.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Headless planetary configuration simulator"
)]
struct Cli {
    /// Observer preset name (case-insensitive) or orbital radius in AU
    #[arg(long)]
    observer: Option<BodyArg>,

    /// Target preset name (case-insensitive) or orbital radius in AU
    #[arg(long)]
    target: Option<BodyArg>,

    /// Number of animation frames to simulate
    #[arg(long, default_value_t = 1000)]
    ticks: u64,

    /// Animation rate multiplier (overrides the settings file)
    #[arg(long)]
    rate: Option<f64>,

    /// Phase strategy (overrides the settings file)
    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    /// Seam rule at +π (overrides the settings file)
    #[arg(long, value_enum)]
    seam: Option<SeamArg>,

    /// Per-frame CSV trace (use '-' for stdout)
    #[arg(long)]
    output: Option<PathBuf>,

    /// JSON summary of the run
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Body preset catalog: a directory of TOML files or a single TOML/YAML file
    #[arg(long, default_value = "configs/bodies")]
    presets: PathBuf,

    /// Simulation settings file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    cli::init_logging();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_simulation_config(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(rate) = cli.rate {
        config.animation_rate = rate;
    }
    if let Some(strategy) = cli.strategy {
        config.phase_strategy = strategy.into();
    }
    if let Some(seam) = cli.seam {
        config.seam = seam.into();
    }
    config.validate()?;

    let presets = load_presets(&cli.presets)?;
    let mut state = cli::build_state(
        &config,
        &presets,
        cli.observer.as_ref(),
        cli.target.as_ref(),
    )?;
    info!(
        observer = %state.observer.name,
        target = %state.target.name,
        ticks = cli.ticks,
        "starting run"
    );

    let mut writer = match &cli.output {
        Some(path) => {
            let mut writer = trace::writer_for_path(path)?;
            trace::write_header(writer.as_mut())?;
            Some(writer)
        }
        None => None,
    };

    state = reduce(&state, &Event::Play);
    let mut observation = observe(&state);
    let mut extremes = Extremes {
        max_elongation_deg: degrees(observation.elongation.elongation_angle),
        min_distance_au: observation.elongation.distance,
        max_distance_au: observation.elongation.distance,
    };

    for tick in 1..=cli.ticks {
        state = reduce(&state, &Event::Tick);
        observation = observe(&state);

        let elongation_deg = degrees(observation.elongation.elongation_angle);
        extremes.max_elongation_deg = extremes.max_elongation_deg.max(elongation_deg);
        extremes.min_distance_au = extremes.min_distance_au.min(observation.elongation.distance);
        extremes.max_distance_au = extremes.max_distance_au.max(observation.elongation.distance);

        if let Some(writer) = writer.as_mut() {
            let direction = cli::direction_label(observation.elongation.direction);
            trace::Record {
                tick,
                observer_angle: state.observer.angle,
                target_angle: state.target.angle,
                elongation_deg,
                direction: &direction,
                phase_fraction: observation.phase_fraction,
                illuminated_fraction: observation.illuminated_fraction,
                distance_au: observation.elongation.distance,
                apparent_diameter: observation.apparent_diameter,
                cycles_completed: state.counter.cycles_completed,
                elapsed_days: observation.elapsed.total_days,
                elapsed_years: observation.elapsed.years,
                days_into_year: observation.elapsed.days,
            }
            .write_to(writer.as_mut())?;
        }
    }
    if let Some(mut writer) = writer {
        writer.flush()?;
    }
    state = reduce(&state, &Event::Pause);

    if let Some(path) = &cli.summary {
        let run = Summary {
            ticks: cli.ticks,
            phase_strategy: format!("{:?}", state.settings.phase_strategy),
            animation_rate: state.settings.animation_rate,
            observer: body_summary(&state.observer),
            target: body_summary(&state.target),
            synodic_period_days: synodic_period_days(
                state.observer.radius_au,
                state.target.radius_au,
            ),
            cycles_completed: state.counter.cycles_completed,
            elapsed_days: observation.elapsed.total_days,
            elapsed_years: observation.elapsed.years,
            days_into_year: observation.elapsed.days,
            final_elongation_deg: degrees(observation.elongation.elongation_angle),
            final_direction: observation.elongation.direction.map(|d| d.to_string()),
            final_phase_fraction: observation.phase_fraction,
            extremes,
        };
        summary::write_summary(path, &run)?;
        info!(path = %path.display(), "wrote summary");
    }

    let trace_on_stdout = cli
        .output
        .as_ref()
        .is_some_and(|path| path.as_os_str() == "-");
    if !trace_on_stdout {
        print_report(&state.observer, &state.target, cli.ticks, &observation);
    }
    Ok(())
}

fn body_summary(body: &BodyState) -> BodySummary {
    BodySummary {
        name: body.name.clone(),
        radius_au: body.radius_au,
        angle_rad: body.angle,
        period_days: orbital_period_days(body.radius_au),
    }
}

fn print_report(observer: &BodyState, target: &BodyState, ticks: u64, observation: &Observation) {
    println!(
        "{} at {:.2} AU observing {} at {:.2} AU",
        observer.name, observer.radius_au, target.name, target.radius_au
    );
    println!("ticks: {ticks}");
    let direction = cli::direction_label(observation.elongation.direction);
    println!(
        "elongation: {:.1} deg {}",
        degrees(observation.elongation.elongation_angle),
        direction
    );
    println!(
        "phase: {:.3} (illuminated {:.3})",
        observation.phase_fraction, observation.illuminated_fraction
    );
    println!("distance: {:.3} AU", observation.elongation.distance);
    println!(
        "elapsed: {} yr {:.1} d ({:.1} days)",
        observation.elapsed.years, observation.elapsed.days, observation.elapsed.total_days
    );
}
