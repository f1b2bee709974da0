//! Column inventory of the source table.

use pcs_model::{Companion, Flag};

pub const PATIENT_ID: &str = "PatID";
pub const GENDER: &str = "Gender";
pub const PREMATURE: &str = "Premature";
pub const RACE: &str = "Race";
pub const ETHNICITY: &str = "Ethnicity";
pub const SYNDROME_TERM: &str = "SyndromeTerm";
pub const AGE_AT_SURGERY_MONTHS: &str = "AgeAtSurgeryMonths";
pub const BIRTH_WEIGHT_KG: &str = "BirthWtKg";
pub const SURGICAL_WEIGHT_KG: &str = "SurgWtKg";
pub const SHUNT_SIZE: &str = "Shunt Size";
pub const SURGERY_DATE: &str = "CardSurgDt";
pub const CPB_TIME: &str = "CPBTm";
pub const CROSS_CLAMP_TIME: &str = "XClampTm";
pub const DATE_OF_BIRTH: &str = "DOB";
pub const CHROM_AB_TERM: &str = "ChromAbTerm";
pub const CARDIAC_ANATOMY_NOTES: &str = "Cardiac Anatomy Notes";
pub const DISCHARGE: &str = "End of Interstage/BTTS Period/Admission";
pub const NONCARDIAC_ANOMALIES: [&str; 5] = ["NCAA1", "NCAA2", "NCAA3", "NCAA4", "NCAA5"];

/// Plain (non-flag) columns every source must provide.
const REQUIRED_FIELDS: &[&str] = &[
    PATIENT_ID,
    GENDER,
    PREMATURE,
    RACE,
    ETHNICITY,
    AGE_AT_SURGERY_MONTHS,
    BIRTH_WEIGHT_KG,
    SURGICAL_WEIGHT_KG,
    SHUNT_SIZE,
    SURGERY_DATE,
    CPB_TIME,
    CROSS_CLAMP_TIME,
    DATE_OF_BIRTH,
    CHROM_AB_TERM,
    CARDIAC_ANATOMY_NOTES,
    DISCHARGE,
];

/// Every column whose absence fails the load, in check order.
///
/// The label-mapping columns come first so a file from the wrong study fails
/// with the most telling column name.
pub fn required_columns() -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = REQUIRED_FIELDS.to_vec();
    columns.extend(Flag::ALL.iter().map(Flag::column));
    columns.extend(Companion::ALL.iter().map(Companion::column));
    columns
}

/// Normalizes a header the way CSV exports drift: BOM, outer whitespace and
/// runs of inner whitespace.
pub fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}
