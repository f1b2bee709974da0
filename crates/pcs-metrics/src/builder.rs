//! Presentation model assembly.

use std::time::Instant;

use tracing::{debug, info_span};

use pcs_ingest::PatientTable;
use pcs_model::{
    DashboardOptions, PatientId, PatientRecord, PresentationModel, ProcedureTimes,
    RiskBreakdownEntry, RiskLevel,
};

use crate::error::{MetricsError, Result};
use crate::notifications::collect_notifications;
use crate::scatter::{scatter_dataset, shunt_analysis};
use crate::summary::summarize;
use crate::timeline::{build_syndrome_panel, build_timeline};

/// Placeholder overall risk shown on the gauge. Not derived from the record.
pub const PLACEHOLDER_OVERALL_RISK_PERCENT: i64 = 28;

/// Placeholder contribution breakdown. Not derived from the record.
pub const PLACEHOLDER_RISK_BREAKDOWN: [(&str, u8); 5] = [
    ("Age", 20),
    ("Surgical Complexity", 35),
    ("Cardiac Function", 30),
    ("Procedure Duration", 10),
    ("Comorbidities", 5),
];

/// Bypass and cross-clamp durations, truncated to whole minutes.
pub fn procedure_times(record: &PatientRecord) -> ProcedureTimes {
    let cpb_minutes = whole_minutes(record.cpb_minutes);
    let cross_clamp_minutes = whole_minutes(record.cross_clamp_minutes);
    ProcedureTimes {
        cpb_minutes,
        cross_clamp_minutes,
        cpb_risk: RiskLevel::from_duration_minutes(cpb_minutes),
        cross_clamp_risk: RiskLevel::from_duration_minutes(cross_clamp_minutes),
    }
}

fn whole_minutes(value: Option<f64>) -> i64 {
    value.unwrap_or(0.0).trunc() as i64
}

fn placeholder_breakdown() -> Vec<RiskBreakdownEntry> {
    PLACEHOLDER_RISK_BREAKDOWN
        .iter()
        .map(|(label, percent)| RiskBreakdownEntry {
            label: (*label).to_string(),
            percent: *percent,
        })
        .collect()
}

/// Build the dashboard model for `record`.
///
/// `table` supplies the cross-patient scatter data; `record` must be one of
/// its rows. Nothing is cached: every call recomputes the whole model.
pub fn build(
    record: &PatientRecord,
    table: &PatientTable,
    options: DashboardOptions,
) -> Result<PresentationModel> {
    if !table.iter().any(|row| row.id == record.id) {
        return Err(MetricsError::ForeignRecord {
            id: record.id.clone(),
        });
    }

    let span = info_span!("build", variant = %options.variant);
    let _guard = span.enter();
    let start = Instant::now();

    let notifications = collect_notifications(record);
    let shunt_scatter = scatter_dataset(table, &record.id);
    let analysis = shunt_analysis(&shunt_scatter, options.scatter_mode);

    let model = PresentationModel {
        variant: options.variant,
        patient: summarize(record, options.variant),
        overall_risk_percent: PLACEHOLDER_OVERALL_RISK_PERCENT,
        overall_risk: RiskLevel::from_percent(PLACEHOLDER_OVERALL_RISK_PERCENT),
        procedure_times: procedure_times(record),
        risk_breakdown: placeholder_breakdown(),
        notifs_complications: notifications.complications,
        notifs_comorbidities: notifications.comorbidities,
        notifs_other: notifications.other,
        shunt_scatter,
        shunt_analysis: analysis,
        timeline: build_timeline(record),
        syndrome: build_syndrome_panel(record),
    };

    debug!(
        notification_count = model.notification_count(),
        scatter_points = model.shunt_scatter.len(),
        duration_ms = start.elapsed().as_millis(),
        "model built"
    );
    Ok(model)
}

/// Select the record for `key` and build its model.
pub fn build_for(
    table: &PatientTable,
    key: impl Into<PatientId>,
    options: DashboardOptions,
) -> Result<PresentationModel> {
    let record = table.select(key)?;
    build(record, table, options)
}
