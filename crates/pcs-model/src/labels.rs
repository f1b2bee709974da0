//! Fixed code → label dictionaries.
//!
//! Every lookup is total: a code outside the dictionary, or a missing value,
//! resolves to the documented fallback label.

use crate::DashboardVariant;

pub const UNKNOWN: &str = "Unknown";
pub const OTHER_UNKNOWN: &str = "Other/Unknown";

/// `SyndromeTerm` value meaning "no syndrome".
pub const NO_SYNDROME_TERM: &str = "No syndromic abnormality identified";
/// `SyndromeTerm` value flagging fetal drug exposure.
pub const FETAL_DRUG_EXPOSURE_TERM: &str = "Fetal drug exposure";
/// Placeholder term used when the source has no `SyndromeTerm` column.
pub const SYNDROME_COLUMN_MISSING_TERM: &str = "Column Not Found";

const GENDER: &[(i64, &str)] = &[(0, "Girl"), (1, "Boy")];

const RACE: &[(i64, &str)] = &[
    (1, "White"),
    (2, "Black"),
    (3, "Asian"),
    (4, "American Indian"),
    (5, "Native Hawaiian"),
    (6, "Other Pacific Islander"),
];

const ETHNICITY: &[(i64, &str)] = &[
    (0, "Non-Hispanic"),
    (1, "Hispanic/Latino"),
    (2, "Other/Unknown"),
];

fn lookup(table: &[(i64, &'static str)], code: Option<i64>, fallback: &'static str) -> &'static str {
    code.and_then(|code| {
        table
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| *label)
    })
    .unwrap_or(fallback)
}

pub fn gender_label(code: Option<i64>) -> &'static str {
    lookup(GENDER, code, UNKNOWN)
}

pub fn prematurity_label(code: Option<i64>, variant: DashboardVariant) -> &'static str {
    let (normal, early) = variant.prematurity_labels();
    match code {
        Some(0) => normal,
        Some(1) => early,
        _ => UNKNOWN,
    }
}

pub fn race_label(code: Option<i64>) -> &'static str {
    lookup(RACE, code, OTHER_UNKNOWN)
}

pub fn ethnicity_label(code: Option<i64>) -> &'static str {
    lookup(ETHNICITY, code, OTHER_UNKNOWN)
}

/// True unless the term is exactly the "no syndrome" sentinel.
///
/// A missing term is not the sentinel, so it counts as present.
pub fn syndrome_present(term: Option<&str>) -> bool {
    term != Some(NO_SYNDROME_TERM)
}

pub fn fetal_drug_exposure(term: Option<&str>) -> bool {
    term == Some(FETAL_DRUG_EXPOSURE_TERM)
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}
