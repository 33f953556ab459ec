//! Integrationstests für einen kompletten Generator-Lauf:
//! KML lesen → labeln → resampeln → KML/KMZ schreiben → erneut lesen.

use kml_pole_generator::app::file_io::load_line_drawing;
use kml_pole_generator::{
    haversine_distance, parse_linestrings, run_generate, GenerateJob, GeneratorOptions, LineLabel,
};
use std::path::{Path, PathBuf};

/// Legt ein frisches Testverzeichnis mit den Fixtures an.
fn prepare_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("kml_pole_generator_{name}"));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("jalur.kml"), include_str!("fixtures/jalur.kml")).unwrap();
    std::fs::write(dir.join("tiang.csv"), include_str!("fixtures/tiang.csv")).unwrap();
    dir
}

fn job(dir: &Path, labels: &[&str]) -> GenerateJob {
    GenerateJob {
        input: dir.join("jalur.kml"),
        poles_csv: Some(dir.join("tiang.csv")),
        output: None,
        kmz: false,
        labels: labels.iter().map(|l| l.parse().unwrap()).collect(),
        default_label: LineLabel::Unlabeled,
        report: None,
        options: GeneratorOptions {
            interval_m: 50.0,
            ..Default::default()
        },
    }
}

#[test]
fn test_generate_writes_kml_next_to_input() {
    let dir = prepare_dir("flow_kml");
    let report = run_generate(&job(&dir, &["Feeder Utama=TN7", "#2=TE"])).unwrap();

    assert_eq!(report.output, dir.join("jalur_poles.kml"));
    assert_eq!(report.line_count, 3);
    assert_eq!(report.existing_poles, 3);
    assert_eq!(report.skipped_pole_rows, 1);
    assert_eq!(report.lines.len(), 2);

    let feeder = &report.lines[0];
    assert_eq!(feeder.label, LineLabel::Tn7);
    assert_eq!(feeder.pole_count, feeder.resampled_points);
    assert_eq!(
        feeder.resampled_points,
        (feeder.length_m / 50.0).floor() as usize + 1 + usize::from(feeder.endpoint_appended)
    );

    // TE-Linie bekommt alle Bestandsmasten
    assert_eq!(report.lines[1].label, LineLabel::Te);
    assert_eq!(report.lines[1].pole_count, 3);

    let written = std::fs::read_to_string(&report.output).unwrap();
    assert!(written.contains("<name>Distribusi Feeder Utama</name>"));
    assert!(written.contains("<description>PU-S7.0-400NM</description>"));
    assert!(written.contains("<description>PU-AS</description>"));
    assert!(written.contains("<name>TE-003, Sudut</name>"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_distribution_lines_keep_exact_endpoints() {
    let dir = prepare_dir("flow_endpoints");
    let report = run_generate(&job(&dir, &["#0=TN7", "#2=TN7", "#3=TE"])).unwrap();

    let original = parse_linestrings(include_str!("fixtures/jalur.kml")).unwrap();
    let written = std::fs::read_to_string(&report.output).unwrap();
    let distribution = parse_linestrings(&written).unwrap();

    // Nur die Distributions-Linien sind LineStrings in der Ausgabe
    assert_eq!(distribution.len(), 3);
    for (source, resampled) in original.iter().zip(&distribution) {
        assert_eq!(resampled.name, source.name);
        assert_eq!(resampled.coords.first(), source.coords.first());
        assert_eq!(resampled.coords.last(), source.coords.last());

        let steps: Vec<f64> = resampled
            .coords
            .windows(2)
            .map(|w| haversine_distance(w[0], w[1]))
            .collect();
        // Abstände höchstens ein Intervall, letzter Schritt kürzer
        assert!(steps.iter().all(|&d| d <= 50.0 + 0.01), "{steps:?}");
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_kmz_with_report() {
    let dir = prepare_dir("flow_kmz");
    let mut job = job(&dir, &[]);
    job.kmz = true;
    job.default_label = LineLabel::Tn7;
    job.report = Some(dir.join("report.json"));
    job.options.output_suffix = "_jmsolution".to_string();

    let report = run_generate(&job).unwrap();
    assert_eq!(report.output, dir.join("jalur_jmsolution.kmz"));
    assert_eq!(report.lines.len(), 3);

    let reread = load_line_drawing(&report.output).unwrap();
    assert_eq!(reread.len(), 3);

    let json = std::fs::read_to_string(dir.join("report.json")).unwrap();
    assert!(json.contains("\"label\": \"TN7\""));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_generate_rejects_invalid_interval_and_unknown_label() {
    let dir = prepare_dir("flow_errors");

    let mut bad_interval = job(&dir, &["#0=TN7"]);
    for interval in [0.0, 1e-300, 0.5] {
        bad_interval.options.interval_m = interval;
        assert!(run_generate(&bad_interval).is_err(), "Intervall {interval}");
    }

    let err = run_generate(&job(&dir, &["Tidak Ada=TE"])).expect_err("Name existiert nicht");
    assert!(format!("{err:#}").contains("Tidak Ada"));
    assert!(!dir.join("jalur_poles.kml").exists());

    let _ = std::fs::remove_dir_all(&dir);
}
