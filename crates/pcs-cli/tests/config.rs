//! Configuration file parsing and flag precedence.

use std::io::Write;

use tempfile::NamedTempFile;

use pcs_cli::config::{DashboardConfig, OptionOverrides};
use pcs_model::{DashboardVariant, DuplicateIdPolicy, ScatterMode};

fn write_config(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{json}").unwrap();
    file
}

#[test]
fn loads_all_fields() {
    let file = write_config(
        r#"{
            "variant": "pediatric",
            "scatter_mode": "size",
            "duplicate_ids": "reject",
            "risk_factors": ["Premature", "Post-op bleed"]
        }"#,
    );
    let config = DashboardConfig::load(file.path()).unwrap();

    assert_eq!(config.variant, Some(DashboardVariant::Pediatric));
    assert_eq!(config.scatter_mode, Some(ScatterMode::Size));
    assert_eq!(config.duplicate_ids, Some(DuplicateIdPolicy::Reject));
    assert_eq!(config.risk_factors, vec!["Premature", "Post-op bleed"]);
}

#[test]
fn flags_override_file_values() {
    let config = DashboardConfig::from_json(r#"{"variant":"pediatric","scatter_mode":"size"}"#)
        .unwrap();
    let options = config.options(OptionOverrides {
        variant: Some(DashboardVariant::Overview),
        scatter_mode: None,
        reject_duplicates: true,
    });

    assert_eq!(options.variant, DashboardVariant::Overview);
    assert_eq!(options.scatter_mode, ScatterMode::Size);
    assert_eq!(options.duplicate_ids, DuplicateIdPolicy::Reject);
}

#[test]
fn command_line_risk_factors_win() {
    let config = DashboardConfig::from_json(r#"{"risk_factors":["Premature"]}"#).unwrap();
    let cli = vec!["Post-op bleed".to_string()];

    assert_eq!(config.risk_factor_labels(&cli), cli.as_slice());
    assert_eq!(config.risk_factor_labels(&[]), config.risk_factors.as_slice());
}

#[test]
fn missing_file_reports_path() {
    let err = DashboardConfig::load(std::path::Path::new("/nonexistent/dashboard.json"))
        .unwrap_err();
    assert!(format!("{err:#}").contains("/nonexistent/dashboard.json"));
}

#[test]
fn invalid_variant_is_an_error() {
    let file = write_config(r#"{"variant":"cardiology"}"#);
    assert!(DashboardConfig::load(file.path()).is_err());
}

#[test]
fn absent_path_uses_defaults() {
    let config = DashboardConfig::load_optional(None).unwrap();
    assert_eq!(config, DashboardConfig::default());
}
