#![deny(unsafe_code)]

use std::fmt;

use crate::PcsError;

/// Canonical text form of a patient identifier.
///
/// Source files store `PatID` inconsistently (`1023`, `"1023"`, `1023.0`), so
/// every identifier is canonicalized before it is stored or compared:
/// surrounding whitespace is dropped and integral numbers render without a
/// fractional part.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct PatientId(String);

impl PatientId {
    pub fn new(value: impl AsRef<str>) -> Result<Self, PcsError> {
        let canonical = canonical_id_text(value.as_ref());
        if canonical.is_empty() {
            return Err(PcsError::EmptyPatientId);
        }
        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PatientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<i64> for PatientId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<i32> for PatientId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for PatientId {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

impl From<u64> for PatientId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<f64> for PatientId {
    fn from(value: f64) -> Self {
        Self(canonical_id_text(&value.to_string()))
    }
}

impl From<&str> for PatientId {
    /// Infallible conversion used for lookups; an empty key simply never matches.
    fn from(value: &str) -> Self {
        Self(canonical_id_text(value))
    }
}

impl From<String> for PatientId {
    fn from(value: String) -> Self {
        Self(canonical_id_text(&value))
    }
}

impl From<&String> for PatientId {
    fn from(value: &String) -> Self {
        Self(canonical_id_text(value))
    }
}

impl From<&PatientId> for PatientId {
    fn from(value: &PatientId) -> Self {
        value.clone()
    }
}

/// Canonicalize raw identifier text.
///
/// Integral numeric text (`"1023"`, `"1023.0"`, `" 1023 "`) collapses to the
/// integer rendering; anything else is returned trimmed.
pub fn canonical_id_text(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    if let Ok(number) = trimmed.parse::<f64>()
        && number.is_finite()
        && number.fract() == 0.0
        && number.abs() < 9.0e15
    {
        return format!("{}", number as i64);
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_forms_agree() {
        assert_eq!(PatientId::from(1023_i64), PatientId::from("1023"));
        assert_eq!(PatientId::from("1023.0"), PatientId::from(1023_i64));
        assert_eq!(PatientId::from(1023.0_f64), PatientId::from(" 1023 "));
    }

    #[test]
    fn non_numeric_ids_are_trimmed_only() {
        assert_eq!(PatientId::from("  P-0007 ").as_str(), "P-0007");
        assert_eq!(PatientId::from("0007").as_str(), "7");
        assert_eq!(PatientId::from("12.5").as_str(), "12.5");
    }

    #[test]
    fn empty_id_is_rejected_by_new() {
        assert!(matches!(PatientId::new("   "), Err(PcsError::EmptyPatientId)));
        assert_eq!(PatientId::new("42").unwrap().as_str(), "42");
    }
}
