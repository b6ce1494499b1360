use std::fs;
use std::path::PathBuf;

use planetary_configurations::config::{
    ConfigError, FrameConventionConfig, PhaseStrategyConfig, SeamConfig, SimulationConfig,
    find_preset, load_presets, load_simulation_config,
};
use planetary_configurations::sim::settings::{self, SettingsError};
use planetary_configurations::sim::{ElongationFrameConvention, PhaseStrategy, SeamBehavior};

fn repo_path(relative: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(relative)
}

#[test]
fn bundled_presets_load_in_path_order() {
    let presets = load_presets(repo_path("configs/bodies")).expect("load presets");
    let names: Vec<&str> = presets.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(
        names,
        ["EARTH", "JUPITER", "MARS", "MERCURY", "SATURN", "VENUS"]
    );

    let venus = find_preset(&presets, "venus").expect("venus preset");
    assert_eq!(venus.radius_au, 0.72);
    assert_eq!(venus.display_name(), "venus");
    assert!(find_preset(&presets, "pluto").is_none());
}

#[test]
fn presets_load_from_a_yaml_list() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bodies.yaml");
    fs::write(
        &path,
        "- name: CERES\n  radius_au: 2.77\n  label: dwarf planet\n- name: VESTA\n  radius_au: 2.36\n",
    )
    .expect("write yaml");

    let presets = load_presets(&path).expect("load yaml presets");
    assert_eq!(presets.len(), 2);
    assert_eq!(presets[0].display_name(), "dwarf planet");
    assert_eq!(presets[1].display_name(), "vesta");
}

#[test]
fn out_of_range_preset_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("far.toml");
    fs::write(&path, "name = \"NEPTUNE\"\nradius_au = 30.1\n").expect("write toml");

    let err = load_presets(&path).expect_err("neptune is outside the control range");
    assert!(matches!(err, ConfigError::Invalid(_)));
    assert!(err.to_string().contains("NEPTUNE"));
}

#[test]
fn missing_catalog_is_an_io_error() {
    let err = load_presets(repo_path("configs/does-not-exist.yaml")).expect_err("missing file");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn bundled_settings_match_the_defaults() {
    let config = load_simulation_config(repo_path("configs/simulation.toml")).expect("settings");
    assert_eq!(config, SimulationConfig::default());
}

#[test]
fn partial_yaml_settings_fall_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.yaml");
    fs::write(
        &path,
        "target: mars\nphase_strategy: law_of_cosines\nframe_convention: screen_y_down\nseam: wrap\n",
    )
    .expect("write yaml");

    let config = load_simulation_config(&path).expect("load yaml settings");
    assert_eq!(config.observer, "EARTH");
    assert_eq!(config.target, "mars");
    assert_eq!(config.phase_strategy, PhaseStrategyConfig::LawOfCosines);
    assert_eq!(config.frame_convention, FrameConventionConfig::ScreenYDown);
    assert_eq!(config.seam, SeamConfig::Wrap);
    assert_eq!(config.animation_rate, 1.5);
}

#[test]
fn unknown_strategy_is_a_parse_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("settings.toml");
    fs::write(&path, "phase_strategy = \"sinusoidal\"\n").expect("write toml");
    let err = load_simulation_config(&path).expect_err("unknown strategy");
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn validation_rejects_out_of_domain_settings() {
    let too_fast = SimulationConfig {
        animation_rate: 20.0,
        ..SimulationConfig::default()
    };
    assert!(matches!(too_fast.validate(), Err(ConfigError::Invalid(_))));

    let no_step = SimulationConfig {
        base_step_rad: 0.0,
        ..SimulationConfig::default()
    };
    assert!(no_step.validate().is_err());

    // One frame of the fastest body must stay under a quarter turn.
    let huge_step = SimulationConfig {
        base_step_rad: 0.05,
        ..SimulationConfig::default()
    };
    assert!(huge_step.validate().is_err());

    let no_pixels = SimulationConfig {
        max_pixel_radius: -1.0,
        ..SimulationConfig::default()
    };
    assert!(no_pixels.validate().is_err());

    assert!(SimulationConfig::default().validate().is_ok());
}

#[test]
fn settings_convert_into_runtime_types() {
    let config = SimulationConfig {
        phase_strategy: PhaseStrategyConfig::LawOfCosines,
        frame_convention: FrameConventionConfig::ScreenYDown,
        seam: SeamConfig::Wrap,
        animation_rate: 0.5,
        ..SimulationConfig::default()
    };
    let runtime = settings::from_config(&config);
    assert_eq!(runtime.phase_strategy, PhaseStrategy::LawOfCosines);
    assert_eq!(runtime.frame_convention, ElongationFrameConvention::ScreenYDown);
    assert_eq!(runtime.seam, SeamBehavior::Wrap);
    assert_eq!(runtime.animation_rate, 0.5);
}

#[test]
fn initial_state_uses_the_named_presets() {
    let presets = load_presets(repo_path("configs/bodies")).expect("load presets");
    let config = SimulationConfig {
        observer: "mars".to_string(),
        target: "Jupiter".to_string(),
        ..SimulationConfig::default()
    };
    let state = settings::initial_state(&config, &presets).expect("initial state");
    assert_eq!(state.observer.name, "observer (mars)");
    assert_eq!(state.target.name, "target (jupiter)");
    assert_eq!(state.observer.radius_au, 1.52);
    assert_eq!(state.target.radius_au, 5.2);
    assert_eq!(state.target.radius_pixels, 400.0);
}

#[test]
fn unknown_preset_is_reported_by_name() {
    let presets = load_presets(repo_path("configs/bodies")).expect("load presets");
    let config = SimulationConfig {
        target: "Vulcan".to_string(),
        ..SimulationConfig::default()
    };
    let err = settings::initial_state(&config, &presets).expect_err("vulcan is not a preset");
    assert!(matches!(err, SettingsError::PresetNotFound(ref name) if name == "Vulcan"));

    let empty = settings::initial_state(&SimulationConfig::default(), &[]);
    assert!(matches!(empty, Err(SettingsError::EmptyCatalog)));
}
