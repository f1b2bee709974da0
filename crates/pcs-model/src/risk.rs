//! Operator-selectable risk factors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::PcsError;

/// One of the six categorical risk factors offered to the operator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum RiskFactor {
    Premature,
    LowBirthWeight,
    CoMorbidity,
    GeneticSyndrome,
    RecentInfection,
    PostOpBleed,
}

impl RiskFactor {
    /// Vocabulary in picker order.
    pub const ALL: [RiskFactor; 6] = [
        RiskFactor::Premature,
        RiskFactor::LowBirthWeight,
        RiskFactor::CoMorbidity,
        RiskFactor::GeneticSyndrome,
        RiskFactor::RecentInfection,
        RiskFactor::PostOpBleed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            RiskFactor::Premature => "Premature",
            RiskFactor::LowBirthWeight => "Low birth weight",
            RiskFactor::CoMorbidity => "Co-morbidity",
            RiskFactor::GeneticSyndrome => "Genetic syndrome",
            RiskFactor::RecentInfection => "Recent infection",
            RiskFactor::PostOpBleed => "Post-op bleed",
        }
    }

    /// Contribution to the 0–10 score.
    pub fn weight(&self) -> f64 {
        match self {
            RiskFactor::Premature => 2.5,
            RiskFactor::LowBirthWeight => 2.0,
            RiskFactor::CoMorbidity => 1.5,
            RiskFactor::GeneticSyndrome => 1.5,
            RiskFactor::RecentInfection => 1.0,
            RiskFactor::PostOpBleed => 3.0,
        }
    }
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RiskFactor {
    type Err = PcsError;

    /// Accepts the display label in any case, with `-`, `_` or spaces
    /// treated alike (`post-op bleed`, `post_op_bleed`, `Post-op bleed`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = fold_label(s);
        RiskFactor::ALL
            .into_iter()
            .find(|factor| fold_label(factor.label()) == wanted)
            .ok_or_else(|| PcsError::UnknownRiskFactor(s.trim().to_string()))
    }
}

fn fold_label(value: &str) -> String {
    value
        .trim()
        .chars()
        .filter(|ch| !matches!(ch, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_str() {
        for factor in RiskFactor::ALL {
            assert_eq!(factor.label().parse::<RiskFactor>().unwrap(), factor);
        }
    }

    #[test]
    fn parsing_ignores_case_and_separators() {
        assert_eq!(
            "post_op_bleed".parse::<RiskFactor>().unwrap(),
            RiskFactor::PostOpBleed
        );
        assert_eq!(
            "LOW BIRTH WEIGHT".parse::<RiskFactor>().unwrap(),
            RiskFactor::LowBirthWeight
        );
        assert!(matches!(
            "smoker".parse::<RiskFactor>(),
            Err(PcsError::UnknownRiskFactor(label)) if label == "smoker"
        ));
    }
}
