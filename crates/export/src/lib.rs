//! Export helpers for CSV traces and JSON summaries.

pub mod trace {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    pub const HEADER: &str = "tick,observer_angle_rad,target_angle_rad,elongation_deg,direction,phase_fraction,illuminated_fraction,distance_au,apparent_diameter_px,cycles_completed,elapsed_days,elapsed_years,days_into_year";

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Write the trace CSV header.
    pub fn write_header(writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "{}", HEADER)
    }

    /// One CSV row per simulated tick.
    #[derive(Debug, Clone)]
    pub struct Record<'a> {
        pub tick: u64,
        pub observer_angle: f64,
        pub target_angle: f64,
        pub elongation_deg: f64,
        /// `E`, `W`, or empty when the target is in line with the sun.
        pub direction: &'a str,
        pub phase_fraction: f64,
        pub illuminated_fraction: f64,
        pub distance_au: f64,
        pub apparent_diameter: f64,
        pub cycles_completed: i64,
        pub elapsed_days: f64,
        pub elapsed_years: i64,
        pub days_into_year: f64,
    }

    impl Record<'_> {
        /// Serialize the record to CSV, matching the header ordering.
        pub fn write_to(&self, writer: &mut dyn Write) -> io::Result<()> {
            writeln!(
                writer,
                "{},{:.6},{:.6},{:.3},{},{:.6},{:.6},{:.6},{:.3},{},{:.3},{},{:.3}",
                self.tick,
                self.observer_angle,
                self.target_angle,
                self.elongation_deg,
                self.direction,
                self.phase_fraction,
                self.illuminated_fraction,
                self.distance_au,
                self.apparent_diameter,
                self.cycles_completed,
                self.elapsed_days,
                self.elapsed_years,
                self.days_into_year,
            )
        }
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// One body as it stood at the end of a run.
    #[derive(Debug, Clone, Serialize)]
    pub struct BodySummary {
        pub name: String,
        pub radius_au: f64,
        pub angle_rad: f64,
        pub period_days: f64,
    }

    /// Extremes seen over a run.
    #[derive(Debug, Clone, Default, Serialize)]
    pub struct Extremes {
        pub max_elongation_deg: f64,
        pub min_distance_au: f64,
        pub max_distance_au: f64,
    }

    /// JSON sidecar describing a whole simulation run.
    #[derive(Debug, Clone, Serialize)]
    pub struct Summary {
        pub ticks: u64,
        pub phase_strategy: String,
        pub animation_rate: f64,
        pub observer: BodySummary,
        pub target: BodySummary,
        pub synodic_period_days: Option<f64>,
        pub cycles_completed: i64,
        pub elapsed_days: f64,
        pub elapsed_years: i64,
        pub days_into_year: f64,
        pub final_elongation_deg: f64,
        pub final_direction: Option<String>,
        pub final_phase_fraction: f64,
        pub extremes: Extremes,
    }

    /// Write `summary` as pretty JSON, creating parent directories as needed.
    pub fn write_summary(path: &Path, summary: &Summary) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
