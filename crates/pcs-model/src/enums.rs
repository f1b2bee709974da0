//! Type-safe enumerations for dashboard concepts.
//!
//! These enums replace the free-text literals ("High", "ratio", ...) the
//! dashboards compare against, so a typo becomes a compile error instead of a
//! silently unmatched branch.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PcsError;

/// Three-step risk band used by notifications, gauges and progress bars.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Band for a 0–100 percentage: up to 30 is low, up to 70 is medium.
    pub fn from_percent(percent: i64) -> Self {
        if percent <= 30 {
            RiskLevel::Low
        } else if percent <= 70 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    /// Band for a procedure duration in minutes (same cut points as percentages).
    pub fn from_duration_minutes(minutes: i64) -> Self {
        Self::from_percent(minutes)
    }

    /// Band for the surgical weight card: under 3.0 kg is high, under 3.5 kg medium.
    pub fn from_surgical_weight(weight_kg: f64) -> Self {
        if weight_kg < 3.0 {
            RiskLevel::High
        } else if weight_kg < 3.5 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Band for the "N active" badge on a notification column.
    pub fn from_active_count(count: usize) -> Self {
        if count > 2 {
            RiskLevel::High
        } else if count > 0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which of the two dashboard layouts a model is built for.
///
/// The layouts share the whole pipeline and differ only in the prematurity
/// wording and in which optional sections are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardVariant {
    /// Risk overview: gauge, notifications, procedure durations, shunt analysis.
    #[default]
    Overview,
    /// Pediatric card view: event timeline, syndrome panel, risk-factor gauge.
    Pediatric,
}

impl DashboardVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardVariant::Overview => "overview",
            DashboardVariant::Pediatric => "pediatric",
        }
    }

    /// Labels for prematurity codes 0 and 1.
    pub fn prematurity_labels(&self) -> (&'static str, &'static str) {
        match self {
            DashboardVariant::Overview => ("Normal", "Early"),
            DashboardVariant::Pediatric => ("No", "Yes"),
        }
    }

    pub fn shows_timeline(&self) -> bool {
        matches!(self, DashboardVariant::Pediatric)
    }

    pub fn shows_notifications(&self) -> bool {
        matches!(self, DashboardVariant::Overview)
    }
}

impl fmt::Display for DashboardVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DashboardVariant {
    type Err = PcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overview" | "risk" => Ok(DashboardVariant::Overview),
            "pediatric" | "paediatric" => Ok(DashboardVariant::Pediatric),
            _ => Err(PcsError::UnknownVariant(s.to_string())),
        }
    }
}

/// Y axis of the shunt analysis chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScatterMode {
    /// Shunt size divided by surgical weight (mm/kg).
    #[default]
    Ratio,
    /// Raw shunt size (mm).
    Size,
}

impl ScatterMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScatterMode::Ratio => "ratio",
            ScatterMode::Size => "size",
        }
    }

    pub fn axis_label(&self) -> &'static str {
        match self {
            ScatterMode::Ratio => "Shunt-to-Weight (mm/kg)",
            ScatterMode::Size => "Shunt Size (mm)",
        }
    }
}

impl fmt::Display for ScatterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScatterMode {
    type Err = PcsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ratio" | "shunt-to-weight ratio" => Ok(ScatterMode::Ratio),
            "size" | "raw" | "shunt size" => Ok(ScatterMode::Size),
            _ => Err(PcsError::UnknownScatterMode(s.to_string())),
        }
    }
}

/// What the selector does when an identifier occurs on more than one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DuplicateIdPolicy {
    /// Use the first row in source order. Duplicates are reported at load time.
    #[default]
    FirstMatch,
    /// Refuse to select an ambiguous identifier.
    Reject,
}

/// Which notification column an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum NotificationCategory {
    Complication,
    Comorbidity,
    Other,
}

impl NotificationCategory {
    pub fn heading(&self) -> &'static str {
        match self {
            NotificationCategory::Complication => "Complications & Concurrent Repairs",
            NotificationCategory::Comorbidity => "Comorbidities",
            NotificationCategory::Other => "Other",
        }
    }
}
