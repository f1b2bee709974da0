//! Patient header card.

use pcs_ingest::format_numeric;
use pcs_model::labels::prematurity_label;
use pcs_model::{DashboardVariant, PatientRecord, PatientSummary, RiskLevel};

use crate::dates::days_between;

pub const SURGERY_DATE_DEFAULT: &str = "N/A";
pub const DATE_OF_BIRTH_DEFAULT: &str = "_";

/// Weight gained between birth and surgery, rounded to one decimal.
///
/// A missing weight counts as 0, so a record without a birth weight reports
/// its whole surgical weight as gain.
pub fn weight_gain(surgical_weight_kg: Option<f64>, birth_weight_kg: Option<f64>) -> f64 {
    round_to(
        surgical_weight_kg.unwrap_or(0.0) - birth_weight_kg.unwrap_or(0.0),
        1,
    )
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Header card for `record`, with the birth status worded for `variant`.
pub fn summarize(record: &PatientRecord, variant: DashboardVariant) -> PatientSummary {
    let surgical_weight_kg = record.surgical_weight_kg.unwrap_or(0.0);
    let age_at_surgery_days = match (&record.date_of_birth, &record.surgery_date) {
        (Some(dob), Some(surgery)) => days_between(dob, surgery),
        _ => None,
    };

    PatientSummary {
        id: record.id.clone(),
        age_display: format!(
            "{} months",
            format_numeric(record.age_at_surgery_months.unwrap_or(0.0))
        ),
        birth_weight_display: format!(
            "{} kg",
            format_numeric(record.birth_weight_kg.unwrap_or(0.0))
        ),
        sex: record.labels.gender.clone(),
        race: record.labels.race.clone(),
        ethnicity: record.labels.ethnicity.clone(),
        birth_status: prematurity_label(record.codes.premature, variant).to_string(),
        shunt_size_mm: record.shunt_size_mm.unwrap_or(0.0),
        surgical_weight_kg,
        surgery_date: record
            .surgery_date
            .clone()
            .unwrap_or_else(|| SURGERY_DATE_DEFAULT.to_string()),
        weight_gain_kg: weight_gain(record.surgical_weight_kg, record.birth_weight_kg),
        weight_risk: RiskLevel::from_surgical_weight(surgical_weight_kg),
        date_of_birth: record
            .date_of_birth
            .clone()
            .unwrap_or_else(|| DATE_OF_BIRTH_DEFAULT.to_string()),
        age_at_surgery_days,
    }
}
