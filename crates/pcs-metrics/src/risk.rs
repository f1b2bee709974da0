//! Operator-selected risk factor score and gauge geometry.

use std::collections::BTreeSet;

use serde::Serialize;

use pcs_model::{RiskFactor, RiskLevel};

use crate::error::Result;
use crate::summary::round_to;

pub const MAX_SCORE: f64 = 10.0;

/// Sum of factor weights clamped to `[0, 10]`.
///
/// The selection is a set, so a factor listed twice counts once.
pub fn score<'a>(selection: impl IntoIterator<Item = &'a RiskFactor>) -> f64 {
    let unique: BTreeSet<RiskFactor> = selection.into_iter().copied().collect();
    let total: f64 = unique.iter().map(RiskFactor::weight).sum();
    total.clamp(0.0, MAX_SCORE)
}

/// Score as a whole percentage of the maximum.
pub fn score_percent(score: f64) -> i64 {
    (score.clamp(0.0, MAX_SCORE) / MAX_SCORE * 100.0).round() as i64
}

/// Gauge needle angle in degrees: 180 at score 0, 0 at score 10.
pub fn needle_angle(score: f64) -> f64 {
    180.0 - score.clamp(0.0, MAX_SCORE) * 18.0
}

/// Needle tip offset from the gauge center for a needle of `radius`.
///
/// y grows upward.
pub fn needle_tip(score: f64, radius: f64) -> (f64, f64) {
    let angle = needle_angle(score).to_radians();
    (radius * angle.cos(), radius * angle.sin())
}

/// Scored selection ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskScore {
    pub factors: Vec<RiskFactor>,
    pub score: f64,
    pub percent: i64,
    pub level: RiskLevel,
    pub needle_angle: f64,
}

impl RiskScore {
    pub fn from_factors<'a>(selection: impl IntoIterator<Item = &'a RiskFactor>) -> Self {
        let factors: Vec<RiskFactor> = selection
            .into_iter()
            .copied()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let value = score(&factors);
        let percent = score_percent(value);
        Self {
            factors,
            score: round_to(value, 1),
            percent,
            level: RiskLevel::from_percent(percent),
            needle_angle: needle_angle(value),
        }
    }

    /// Parse operator labels (`"Post-op bleed"`, `"premature"`) and score them.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Result<Self> {
        let factors = labels
            .iter()
            .map(|label| label.as_ref().parse::<RiskFactor>())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::from_factors(&factors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MetricsError;

    #[test]
    fn known_selections() {
        let selection = [
            RiskFactor::PostOpBleed,
            RiskFactor::Premature,
            RiskFactor::LowBirthWeight,
        ];
        assert_eq!(score(&selection), 7.5);
        assert_eq!(score(&RiskFactor::ALL), 10.0);
        assert_eq!(score(&Vec::<RiskFactor>::new()), 0.0);
    }

    #[test]
    fn duplicates_count_once() {
        let selection = [RiskFactor::PostOpBleed, RiskFactor::PostOpBleed];
        assert_eq!(score(&selection), 3.0);
    }

    #[test]
    fn percent_and_gauge() {
        assert_eq!(score_percent(7.5), 75);
        assert_eq!(score_percent(12.0), 100);
        assert_eq!(needle_angle(0.0), 180.0);
        assert_eq!(needle_angle(5.0), 90.0);
        assert_eq!(needle_angle(10.0), 0.0);
        assert_eq!(needle_angle(-3.0), 180.0);
        let (x, y) = needle_tip(10.0, 65.0);
        assert!((x - 65.0).abs() < 1e-9);
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn from_labels_parses_and_scores() {
        let risk = RiskScore::from_labels(&["Post-op bleed", "premature", "Premature"]).unwrap();
        assert_eq!(risk.factors, vec![RiskFactor::Premature, RiskFactor::PostOpBleed]);
        assert_eq!(risk.score, 5.5);
        assert_eq!(risk.percent, 55);
        assert_eq!(risk.level, RiskLevel::Medium);
    }

    #[test]
    fn from_labels_rejects_unknown() {
        let err = RiskScore::from_labels(&["smoker"]).unwrap_err();
        assert!(matches!(err, MetricsError::Model(_)));
    }
}
