//! Presentation-ready structures handed to a dashboard front end.
//!
//! Everything here is rebuilt from scratch for each patient selection and
//! never written back to the source table.

use serde::{Deserialize, Serialize};

use crate::{DashboardVariant, PatientId, RiskLevel, ScatterMode};

/// Header card for the selected patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientSummary {
    pub id: PatientId,
    pub age_display: String,
    pub birth_weight_display: String,
    pub sex: String,
    pub race: String,
    pub ethnicity: String,
    pub birth_status: String,
    pub shunt_size_mm: f64,
    pub surgical_weight_kg: f64,
    pub surgery_date: String,
    pub weight_gain_kg: f64,
    /// Band for the "Weight at Surgery" card.
    pub weight_risk: RiskLevel,
    pub date_of_birth: String,
    /// Days between `DOB` and `CardSurgDt` when both dates parse.
    pub age_at_surgery_days: Option<i64>,
}

/// One triggered flag rendered as an alert card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationItem {
    pub title: String,
    pub subtext: String,
    pub risk: RiskLevel,
    /// Markdown body shown under "View Details".
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskBreakdownEntry {
    pub label: String,
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcedureTimes {
    pub cpb_minutes: i64,
    pub cross_clamp_minutes: i64,
    pub cpb_risk: RiskLevel,
    pub cross_clamp_risk: RiskLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub patient_id: PatientId,
    pub weight_kg: f64,
    pub shunt_mm: f64,
    pub is_current: bool,
}

/// Weight vs. shunt size for every patient with both values recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterDataset {
    pub points: Vec<ScatterPoint>,
    pub current_patient_id: PatientId,
}

impl ScatterDataset {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn current_point(&self) -> Option<&ScatterPoint> {
        self.points.iter().find(|point| point.is_current)
    }
}

/// One plotted point of the shunt analysis chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPoint {
    /// 1-based rank of the point in the scatter dataset.
    pub x: f64,
    pub y: f64,
    pub patient_id: PatientId,
    pub is_current: bool,
}

/// Least-squares line evaluated at the smallest and largest x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
    pub start: (f64, f64),
    pub end: (f64, f64),
}

impl TrendLine {
    /// Fitted y at `x`.
    pub fn at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Shunt analysis chart data for one scatter mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShuntAnalysis {
    pub mode: ScatterMode,
    pub y_label: String,
    pub points: Vec<AnalysisPoint>,
    /// Absent with fewer than two distinct x values.
    pub trend: Option<TrendLine>,
    /// Shaded band spanning the observed y values.
    pub y_range: Option<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub label: String,
    pub date: String,
}

/// Dated card with a free-text body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCard {
    pub title: String,
    pub date: String,
    pub details: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    /// Events in display order, most recent first.
    pub events: Vec<TimelineEvent>,
    pub cardiac_event: EventCard,
    pub septic_event: EventCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyndromePanel {
    pub syndrome_present: bool,
    pub fetal_drug_exposure: String,
    pub abnormalities: String,
    pub noncardiac_anomalies: Vec<String>,
    pub premature_badge: bool,
}

/// Complete dashboard model for one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresentationModel {
    pub variant: DashboardVariant,
    pub patient: PatientSummary,
    pub overall_risk_percent: i64,
    pub overall_risk: RiskLevel,
    pub procedure_times: ProcedureTimes,
    pub risk_breakdown: Vec<RiskBreakdownEntry>,
    pub notifs_complications: Vec<NotificationItem>,
    pub notifs_comorbidities: Vec<NotificationItem>,
    pub notifs_other: Vec<NotificationItem>,
    pub shunt_scatter: ScatterDataset,
    pub shunt_analysis: ShuntAnalysis,
    pub timeline: Timeline,
    pub syndrome: SyndromePanel,
}

impl PresentationModel {
    pub fn notification_count(&self) -> usize {
        self.notifs_complications.len() + self.notifs_comorbidities.len() + self.notifs_other.len()
    }
}
