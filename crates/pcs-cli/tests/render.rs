//! Rendering of loaded tables and built models.

use std::io::Write;

use tempfile::NamedTempFile;

use pcs_cli::render::{patients_table, render_model, risk_table};
use pcs_ingest::columns::{SYNDROME_TERM, required_columns};
use pcs_ingest::{PatientTable, load};
use pcs_metrics::{RiskScore, build_for};
use pcs_model::{DashboardOptions, DashboardVariant, RiskFactor};

fn sample_table(options: DashboardOptions) -> (NamedTempFile, PatientTable) {
    let mut headers: Vec<&str> = required_columns();
    headers.push(SYNDROME_TERM);
    let rows: [&[(&str, &str)]; 2] = [
        &[
            ("PatID", "1023"),
            ("Gender", "0"),
            ("Premature", "1"),
            ("SurgWtKg", "2.9"),
            ("BirthWtKg", "2.1"),
            ("Shunt Size", "3.5"),
            ("CompCardArrest", "1"),
            ("CardArrestDtTm", "2021-03-04"),
            ("SyndromeTerm", "No syndromic abnormality identified"),
        ],
        &[
            ("PatID", "1024"),
            ("Gender", "1"),
            ("SurgWtKg", "3.6"),
            ("Shunt Size", "4"),
            ("SyndromeTerm", "No syndromic abnormality identified"),
        ],
    ];

    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", headers.join(",")).unwrap();
    for row in rows {
        let line = headers
            .iter()
            .map(|h| {
                row.iter()
                    .find(|(name, _)| name == h)
                    .map_or("", |(_, value)| *value)
            })
            .collect::<Vec<_>>()
            .join(",");
        writeln!(file, "{line}").unwrap();
    }
    let table = load(file.path(), options).unwrap();
    (file, table)
}

#[test]
fn patients_table_lists_each_identifier() {
    let (_file, table) = sample_table(DashboardOptions::default());
    let rendered = patients_table(&table).to_string();

    assert!(rendered.contains("1023"));
    assert!(rendered.contains("1024"));
    assert!(rendered.contains("Girl"));
    assert!(rendered.contains("Early"));
}

#[test]
fn overview_shows_notifications_and_shunts() {
    let options = DashboardOptions::default();
    let (_file, table) = sample_table(options);
    let model = build_for(&table, "1023", options).unwrap();
    let risk = RiskScore::from_labels(&["Premature"]).unwrap();
    let rendered = render_model(&model, &risk);

    assert!(rendered.contains("Patient 1023"));
    assert!(rendered.contains("Overall risk: 28% (Low)"));
    assert!(rendered.contains("Cardiac Arrest"));
    assert!(rendered.contains("(1 active, Medium)"));
    assert!(rendered.contains("Shunt analysis"));
    assert!(rendered.contains("(current)"));
    assert!(!rendered.contains("Timeline of events"));
    assert!(rendered.contains("2.5 / 10"));
}

#[test]
fn pediatric_shows_timeline_and_syndrome() {
    let options = DashboardOptions::default().with_variant(DashboardVariant::Pediatric);
    let (_file, table) = sample_table(options);
    let model = build_for(&table, 1023_i64, options).unwrap();
    let risk = RiskScore::from_factors(&Vec::<RiskFactor>::new());
    let rendered = render_model(&model, &risk);

    assert!(rendered.contains("Timeline of events"));
    assert!(rendered.contains("Surgery Completion"));
    assert!(rendered.contains("Premature"));
    assert!(!rendered.contains("Shunt analysis"));
    assert!(rendered.contains("none selected"));
}

#[test]
fn risk_table_reports_score_and_gauge() {
    let risk = RiskScore::from_labels(&["Post-op bleed", "Premature", "Low birth weight"]).unwrap();
    let rendered = risk_table(&risk).to_string();

    assert!(rendered.contains("7.5 / 10"));
    assert!(rendered.contains("75%"));
}
