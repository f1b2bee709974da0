//! Terminal rendering of dashboard models.

use std::fmt::Write;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pcs_ingest::{PatientTable, format_numeric};
use pcs_metrics::RiskScore;
use pcs_model::{
    NotificationCategory, NotificationItem, PresentationModel, RiskLevel, ShuntAnalysis,
};

pub fn patients_table(table: &PatientTable) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Patient"),
        header_cell("Sex"),
        header_cell("Birth status"),
        header_cell("Race"),
        header_cell("Ethnicity"),
        header_cell("Surgery date"),
    ]);
    apply_table_style(&mut out);
    for record in table.first_records() {
        out.add_row(vec![
            Cell::new(&record.id).add_attribute(Attribute::Bold),
            Cell::new(&record.labels.gender),
            Cell::new(&record.labels.prematurity),
            Cell::new(&record.labels.race),
            Cell::new(&record.labels.ethnicity),
            optional_cell(record.surgery_date.as_deref()),
        ]);
    }
    out
}

pub fn risk_table(risk: &RiskScore) -> Table {
    let mut out = Table::new();
    out.set_header(vec![header_cell("Risk factor"), header_cell("Weight")]);
    apply_table_style(&mut out);
    align_column(&mut out, 1, CellAlignment::Right);
    if risk.factors.is_empty() {
        out.add_row(vec![dim_cell("none selected"), dim_cell("-")]);
    }
    for factor in &risk.factors {
        out.add_row(vec![
            Cell::new(factor.label()),
            Cell::new(format_numeric(factor.weight())),
        ]);
    }
    out.add_row(vec![
        Cell::new("Score")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1} / 10", risk.score)).add_attribute(Attribute::Bold),
    ]);
    out.add_row(vec![
        Cell::new("Gauge"),
        risk_cell(
            format!("{}% ({:.0}°)", risk.percent, risk.needle_angle),
            risk.level,
        ),
    ]);
    out
}

/// Render every section the model's variant shows, followed by the risk factor score.
pub fn render_model(model: &PresentationModel, risk: &RiskScore) -> String {
    let mut out = String::new();
    section(&mut out, &format!("Patient {}", model.patient.id), &summary_table(model));

    if model.variant.shows_notifications() {
        let _ = writeln!(
            out,
            "Overall risk: {}% ({})",
            model.overall_risk_percent, model.overall_risk
        );
        section(&mut out, "Risk breakdown", &breakdown_table(model));
        section(
            &mut out,
            "Duration of surgical procedures",
            &procedure_table(model),
        );
        for category in [
            NotificationCategory::Complication,
            NotificationCategory::Comorbidity,
            NotificationCategory::Other,
        ] {
            let items = notifications(model, category);
            let band = RiskLevel::from_active_count(items.len());
            let heading = format!("{} ({} active, {band})", category.heading(), items.len());
            section(&mut out, &heading, &notification_table(items));
        }
        section(
            &mut out,
            "Shunt analysis",
            &shunt_table(&model.shunt_analysis),
        );
        if let Some(trend) = model.shunt_analysis.trend {
            let _ = writeln!(
                out,
                "Trend: y = {:.3}x + {:.3} (from {:.2} to {:.2})",
                trend.slope, trend.intercept, trend.start.1, trend.end.1
            );
        }
    }

    if model.variant.shows_timeline() {
        section(&mut out, "Timeline of events", &timeline_table(model));
        section(&mut out, "Syndrome", &syndrome_table(model));
    }

    section(&mut out, "Risk factors", &risk_table(risk));
    out
}

fn section(out: &mut String, title: &str, table: &Table) {
    let _ = writeln!(out, "{title}");
    let _ = writeln!(out, "{table}");
    out.push('\n');
}

fn notifications(model: &PresentationModel, category: NotificationCategory) -> &[NotificationItem] {
    match category {
        NotificationCategory::Complication => &model.notifs_complications,
        NotificationCategory::Comorbidity => &model.notifs_comorbidities,
        NotificationCategory::Other => &model.notifs_other,
    }
}

fn summary_table(model: &PresentationModel) -> Table {
    let patient = &model.patient;
    let mut out = key_value_table();
    out.add_row(vec![label_cell("Age"), Cell::new(&patient.age_display)]);
    out.add_row(vec![
        label_cell("Birth weight"),
        Cell::new(&patient.birth_weight_display),
    ]);
    out.add_row(vec![label_cell("Sex"), Cell::new(&patient.sex)]);
    out.add_row(vec![label_cell("Race"), Cell::new(&patient.race)]);
    out.add_row(vec![label_cell("Ethnicity"), Cell::new(&patient.ethnicity)]);
    out.add_row(vec![label_cell("Birth status"), Cell::new(&patient.birth_status)]);
    out.add_row(vec![label_cell("Date of birth"), Cell::new(&patient.date_of_birth)]);
    out.add_row(vec![label_cell("Surgery date"), Cell::new(&patient.surgery_date)]);
    out.add_row(vec![
        label_cell("Age at surgery"),
        match patient.age_at_surgery_days {
            Some(days) => Cell::new(format!("{days} days")),
            None => dim_cell("-"),
        },
    ]);
    out.add_row(vec![
        label_cell("Weight at surgery"),
        risk_cell(
            format!("{} kg", format_numeric(patient.surgical_weight_kg)),
            patient.weight_risk,
        ),
    ]);
    out.add_row(vec![
        label_cell("Weight gain"),
        Cell::new(format!("{} kg", format_numeric(patient.weight_gain_kg))),
    ]);
    out.add_row(vec![
        label_cell("Shunt size"),
        Cell::new(format!("{} mm", format_numeric(patient.shunt_size_mm))),
    ]);
    out
}

fn breakdown_table(model: &PresentationModel) -> Table {
    let mut out = Table::new();
    out.set_header(vec![header_cell("Factor"), header_cell("Contribution")]);
    apply_table_style(&mut out);
    align_column(&mut out, 1, CellAlignment::Right);
    for entry in &model.risk_breakdown {
        out.add_row(vec![
            Cell::new(&entry.label),
            Cell::new(format!("{}%", entry.percent)),
        ]);
    }
    out
}

fn procedure_table(model: &PresentationModel) -> Table {
    let times = &model.procedure_times;
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Procedure"),
        header_cell("Minutes"),
        header_cell("Risk"),
    ]);
    apply_table_style(&mut out);
    align_column(&mut out, 1, CellAlignment::Right);
    align_column(&mut out, 2, CellAlignment::Center);
    out.add_row(vec![
        Cell::new("Cross Clamp Duration"),
        Cell::new(times.cross_clamp_minutes),
        risk_cell(times.cross_clamp_risk, times.cross_clamp_risk),
    ]);
    out.add_row(vec![
        Cell::new("CPB (Cardiopulmonary Bypass) Duration"),
        Cell::new(times.cpb_minutes),
        risk_cell(times.cpb_risk, times.cpb_risk),
    ]);
    out
}

fn notification_table(items: &[NotificationItem]) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("Alert"),
        header_cell("Risk"),
        header_cell("Details"),
    ]);
    apply_wide_table_style(&mut out);
    align_column(&mut out, 1, CellAlignment::Center);
    if items.is_empty() {
        out.add_row(vec![dim_cell("No active notifications"), dim_cell("-"), dim_cell("-")]);
    }
    for item in items {
        out.add_row(vec![
            Cell::new(format!("{}\n{}", item.title, item.subtext)),
            risk_cell(item.risk, item.risk),
            Cell::new(item.details.replace("**", "").replace("\n\n", "\n")),
        ]);
    }
    out
}

fn shunt_table(analysis: &ShuntAnalysis) -> Table {
    let mut out = Table::new();
    out.set_header(vec![
        header_cell("#"),
        header_cell("Patient"),
        header_cell(&analysis.y_label),
    ]);
    apply_table_style(&mut out);
    align_column(&mut out, 0, CellAlignment::Right);
    align_column(&mut out, 2, CellAlignment::Right);
    if analysis.points.is_empty() {
        out.add_row(vec![dim_cell("-"), dim_cell("no data"), dim_cell("-")]);
    }
    for point in &analysis.points {
        let id = if point.is_current {
            Cell::new(format!("{} (current)", point.patient_id))
                .fg(Color::Cyan)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(&point.patient_id)
        };
        out.add_row(vec![
            Cell::new(point.x),
            id,
            Cell::new(format!("{:.2}", point.y)),
        ]);
    }
    if let Some((low, high)) = analysis.y_range {
        out.add_row(vec![
            dim_cell(""),
            dim_cell("range"),
            dim_cell(format!("{low:.2} – {high:.2}")),
        ]);
    }
    out
}

fn timeline_table(model: &PresentationModel) -> Table {
    let timeline = &model.timeline;
    let mut out = Table::new();
    out.set_header(vec![header_cell("Event"), header_cell("Date")]);
    apply_table_style(&mut out);
    for event in &timeline.events {
        out.add_row(vec![Cell::new(&event.label), Cell::new(&event.date)]);
    }
    for card in [&timeline.cardiac_event, &timeline.septic_event] {
        out.add_row(vec![
            Cell::new(&card.title).add_attribute(Attribute::Bold),
            Cell::new(format!("{}\n{}", card.date, card.details)),
        ]);
    }
    out
}

fn syndrome_table(model: &PresentationModel) -> Table {
    let panel = &model.syndrome;
    let mut out = key_value_table();
    out.add_row(vec![
        label_cell("Syndrome present"),
        Cell::new(if panel.syndrome_present { "Yes" } else { "No" }),
    ]);
    out.add_row(vec![
        label_cell("Fetal drug exposure"),
        Cell::new(&panel.fetal_drug_exposure),
    ]);
    out.add_row(vec![label_cell("Abnormalities"), Cell::new(&panel.abnormalities)]);
    out.add_row(vec![
        label_cell("Non-cardiac anomalies"),
        if panel.noncardiac_anomalies.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(panel.noncardiac_anomalies.join("\n"))
        },
    ]);
    if panel.premature_badge {
        out.add_row(vec![
            label_cell("Badge"),
            Cell::new("Premature")
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
        ]);
    }
    out
}

fn key_value_table() -> Table {
    let mut out = Table::new();
    apply_table_style(&mut out);
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_wide_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn label_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn optional_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn risk_cell<T: ToString>(value: T, level: RiskLevel) -> Cell {
    let color = match level {
        RiskLevel::Low => Color::Green,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::High => Color::Red,
    };
    Cell::new(value.to_string())
        .fg(color)
        .add_attribute(Attribute::Bold)
}
