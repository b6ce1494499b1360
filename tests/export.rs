use std::fs;

use planetary_configurations::export::summary::{BodySummary, Extremes, Summary, write_summary};
use planetary_configurations::export::trace::{HEADER, Record, write_header, writer_for_path};

fn record(tick: u64, direction: &str) -> Record<'_> {
    Record {
        tick,
        observer_angle: 0.01725,
        target_angle: 0.028234,
        elongation_deg: 12.5,
        direction,
        phase_fraction: 0.031,
        illuminated_fraction: 0.009,
        distance_au: 0.281,
        apparent_diameter: 274.9,
        cycles_completed: 1,
        elapsed_days: 1.002,
        elapsed_years: 0,
        days_into_year: 1.002,
    }
}

#[test]
fn trace_rows_line_up_with_the_header() {
    let mut buffer: Vec<u8> = Vec::new();
    write_header(&mut buffer).expect("header");
    record(1, "W").write_to(&mut buffer).expect("row");
    record(2, "").write_to(&mut buffer).expect("row");

    let mut reader = csv::Reader::from_reader(buffer.as_slice());
    let headers = reader.headers().expect("headers").clone();
    assert_eq!(headers.len(), HEADER.split(',').count());
    assert_eq!(&headers[0], "tick");
    assert_eq!(&headers[4], "direction");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.expect("row")).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].len(), headers.len());
    assert_eq!(&rows[0][0], "1");
    assert_eq!(&rows[0][1], "0.017250");
    assert_eq!(&rows[0][4], "W");
    assert_eq!(&rows[1][4], "");
    let elongation: f64 = rows[0][3].parse().expect("elongation");
    assert!((elongation - 12.5).abs() < 1e-9);
}

#[test]
fn writer_creates_missing_directories() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nested").join("trace.csv");
    {
        let mut writer = writer_for_path(&path).expect("writer");
        write_header(writer.as_mut()).expect("header");
        record(1, "E").write_to(writer.as_mut()).expect("row");
    }
    let contents = fs::read_to_string(&path).expect("read trace");
    assert!(contents.starts_with(HEADER));
    assert_eq!(contents.lines().count(), 2);
}

#[test]
fn summary_is_written_as_json() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("summary.json");
    let summary = Summary {
        ticks: 10,
        phase_strategy: "Linear".to_string(),
        animation_rate: 1.5,
        observer: BodySummary {
            name: "observer (earth)".to_string(),
            radius_au: 1.0,
            angle_rad: 0.1725,
            period_days: 365.0,
        },
        target: BodySummary {
            name: "target (venus)".to_string(),
            radius_au: 0.72,
            angle_rad: 0.282,
            period_days: 223.0,
        },
        synodic_period_days: Some(573.0),
        cycles_completed: 1,
        elapsed_days: 10.02,
        elapsed_years: 0,
        days_into_year: 10.02,
        final_elongation_deg: 5.0,
        final_direction: Some("W".to_string()),
        final_phase_fraction: 0.01,
        extremes: Extremes::default(),
    };
    write_summary(&path, &summary).expect("write summary");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).expect("read summary")).expect("json");
    assert_eq!(json["ticks"], 10);
    assert_eq!(json["observer"]["name"], "observer (earth)");
    assert_eq!(json["synodic_period_days"], 573.0);
    assert_eq!(json["final_direction"], "W");
    assert!(json["extremes"]["max_elongation_deg"].is_number());
}
