use pcs_model::labels::{
    FETAL_DRUG_EXPOSURE_TERM, NO_SYNDROME_TERM, ethnicity_label, gender_label, race_label,
};
use pcs_model::{
    DashboardOptions, DashboardVariant, DemographicCodes, DerivedLabels, DuplicateIdPolicy,
    PatientId, RiskFactor, RiskLevel, ScatterMode,
};

#[test]
fn label_lookups_are_total() {
    for code in -5..20 {
        assert!(!gender_label(Some(code)).is_empty());
        assert!(!race_label(Some(code)).is_empty());
        assert!(!ethnicity_label(Some(code)).is_empty());
    }
    assert_eq!(gender_label(None), "Unknown");
    assert_eq!(race_label(None), "Other/Unknown");
    assert_eq!(ethnicity_label(Some(2)), "Other/Unknown");
}

#[test]
fn syndrome_derivations_are_exclusive_for_sentinels() {
    let none = DerivedLabels::derive(
        DemographicCodes::default(),
        Some(NO_SYNDROME_TERM),
        true,
        DashboardVariant::Overview,
    );
    assert!(!none.syndrome_present);
    assert_eq!(none.fetal_drug_exposure_label(), "No");

    let fetal = DerivedLabels::derive(
        DemographicCodes::default(),
        Some(FETAL_DRUG_EXPOSURE_TERM),
        true,
        DashboardVariant::Overview,
    );
    assert!(fetal.syndrome_present);
    assert_eq!(fetal.fetal_drug_exposure_label(), "Yes");
    assert_eq!(fetal.syndrome_present_label(), "Yes");
}

#[test]
fn derived_labels_follow_variant() {
    let codes = DemographicCodes {
        gender: Some(1),
        premature: Some(0),
        race: Some(2),
        ethnicity: Some(0),
    };
    let overview = DerivedLabels::derive(codes, None, true, DashboardVariant::Overview);
    let pediatric = DerivedLabels::derive(codes, None, true, DashboardVariant::Pediatric);

    assert_eq!(overview.gender, "Boy");
    assert_eq!(overview.race, "Black");
    assert_eq!(overview.ethnicity, "Non-Hispanic");
    assert_eq!(overview.prematurity, "Normal");
    assert_eq!(pediatric.prematurity, "No");
}

#[test]
fn identifiers_serialize_as_plain_text() {
    let id = PatientId::from(1023_i64);
    assert_eq!(serde_json::to_string(&id).unwrap(), "\"1023\"");
    let back: PatientId = serde_json::from_str("\"1023\"").unwrap();
    assert_eq!(back, PatientId::from("1023.0"));
}

#[test]
fn options_deserialize_with_defaults() {
    let options: DashboardOptions = serde_json::from_str(r#"{"variant":"pediatric"}"#).unwrap();
    assert_eq!(options.variant, DashboardVariant::Pediatric);
    assert_eq!(options.scatter_mode, ScatterMode::Ratio);
    assert_eq!(options.duplicate_ids, DuplicateIdPolicy::FirstMatch);

    let options: DashboardOptions =
        serde_json::from_str(r#"{"scatter_mode":"size","duplicate_ids":"reject"}"#).unwrap();
    assert_eq!(options.scatter_mode, ScatterMode::Size);
    assert_eq!(options.duplicate_ids, DuplicateIdPolicy::Reject);
}

#[test]
fn risk_levels_serialize_by_name() {
    assert_eq!(serde_json::to_string(&RiskLevel::High).unwrap(), "\"High\"");
    assert_eq!(RiskLevel::Medium.to_string(), "Medium");
}

#[test]
fn risk_factor_weights_sum_above_ceiling() {
    let total: f64 = RiskFactor::ALL.iter().map(RiskFactor::weight).sum();
    assert!((total - 11.5).abs() < 1e-9);
}
