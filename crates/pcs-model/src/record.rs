//! Typed patient record.
//!
//! Each field the dashboards read has an explicit type and an explicit
//! "missing" state. A column the source lacks is rejected when the table is
//! loaded; a blank cell in a present column is `None` here.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::labels;
use crate::{DashboardVariant, PatientId};

/// A 0/1 column whose value of 1 means the event or condition occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Flag {
    CardiacArrest,
    MechanicalSupport,
    LowCardiacOutput,
    ReoperationForBleeding,
    Chylothorax,
    Sepsis,
    SuperficialWoundInfection,
    DeepWoundInfection,
    Clabsi,
    Stroke,
    StrokeHemorrhage,
    Ivh,
    Nec,
    ConcurrentTapvrRepair,
    ChromosomalAbnormality,
}

impl Flag {
    pub const ALL: [Flag; 15] = [
        Flag::CardiacArrest,
        Flag::MechanicalSupport,
        Flag::LowCardiacOutput,
        Flag::ReoperationForBleeding,
        Flag::Chylothorax,
        Flag::Sepsis,
        Flag::SuperficialWoundInfection,
        Flag::DeepWoundInfection,
        Flag::Clabsi,
        Flag::Stroke,
        Flag::StrokeHemorrhage,
        Flag::Ivh,
        Flag::Nec,
        Flag::ConcurrentTapvrRepair,
        Flag::ChromosomalAbnormality,
    ];

    /// Source column holding the flag.
    pub fn column(&self) -> &'static str {
        match self {
            Flag::CardiacArrest => "CompCardArrest",
            Flag::MechanicalSupport => "MechCircSupp",
            Flag::LowCardiacOutput => "CompLCOS2",
            Flag::ReoperationForBleeding => "CompReopBleed",
            Flag::Chylothorax => "CompChyloIntv",
            Flag::Sepsis => "CompSepsis",
            Flag::SuperficialWoundInfection => "CompSupWoundInf",
            Flag::DeepWoundInfection => "CompWoundInf",
            Flag::Clabsi => "CompCLABSI",
            Flag::Stroke => "CompStroke",
            Flag::StrokeHemorrhage => "StrokeHemorrhage",
            Flag::Ivh => "CompIVH",
            Flag::Nec => "CompNECBell",
            Flag::ConcurrentTapvrRepair => "Concurrent TAPVR Repair",
            Flag::ChromosomalAbnormality => "ChromAb",
        }
    }
}

/// Date or free-text column that accompanies a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Companion {
    CardiacArrestTime,
    MechanicalSupportType,
    MechanicalSupportReason,
    MechanicalSupportStart,
    LowCardiacOutputTime,
    ReoperationTime,
    ChylothoraxTime,
    SepsisDate,
    SuperficialWoundInfectionDate,
    ClabsiDate,
    StrokeTime,
    IvhTime,
    NecDate,
}

impl Companion {
    pub const ALL: [Companion; 13] = [
        Companion::CardiacArrestTime,
        Companion::MechanicalSupportType,
        Companion::MechanicalSupportReason,
        Companion::MechanicalSupportStart,
        Companion::LowCardiacOutputTime,
        Companion::ReoperationTime,
        Companion::ChylothoraxTime,
        Companion::SepsisDate,
        Companion::SuperficialWoundInfectionDate,
        Companion::ClabsiDate,
        Companion::StrokeTime,
        Companion::IvhTime,
        Companion::NecDate,
    ];

    pub fn column(&self) -> &'static str {
        match self {
            Companion::CardiacArrestTime => "CardArrestDtTm",
            Companion::MechanicalSupportType => "MechCircSuppType",
            Companion::MechanicalSupportReason => "MechCircSuppReason",
            Companion::MechanicalSupportStart => "MechCircSuppInitDtTm",
            Companion::LowCardiacOutputTime => "CompLCOSDtTime",
            Companion::ReoperationTime => "CompReopBleedDtTm",
            Companion::ChylothoraxTime => "CompChyloIntvDtTm",
            Companion::SepsisDate => "CompSepsisDt",
            Companion::SuperficialWoundInfectionDate => "CompSupWoundInfDt",
            Companion::ClabsiDate => "CompCLABSIDt",
            Companion::StrokeTime => "StrokeDtTm",
            Companion::IvhTime => "CompIVHDtTm",
            Companion::NecDate => "NECbellDt",
        }
    }
}

/// Display labels computed once when the table is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedLabels {
    pub gender: String,
    pub prematurity: String,
    pub race: String,
    pub ethnicity: String,
    pub syndrome_present: bool,
    pub fetal_drug_exposure: bool,
}

/// Raw demographic codes a record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DemographicCodes {
    pub gender: Option<i64>,
    pub premature: Option<i64>,
    pub race: Option<i64>,
    pub ethnicity: Option<i64>,
}

impl DerivedLabels {
    /// Derive labels from raw codes.
    ///
    /// `syndrome_term` is `None` both for a blank cell and for a source without
    /// the column; `syndrome_column_present` tells the two apart, because a
    /// missing column forces both syndrome derivations to "absent".
    pub fn derive(
        codes: DemographicCodes,
        syndrome_term: Option<&str>,
        syndrome_column_present: bool,
        variant: DashboardVariant,
    ) -> Self {
        let (syndrome_present, fetal_drug_exposure) = if syndrome_column_present {
            (
                labels::syndrome_present(syndrome_term),
                labels::fetal_drug_exposure(syndrome_term),
            )
        } else {
            (false, false)
        };
        Self {
            gender: labels::gender_label(codes.gender).to_string(),
            prematurity: labels::prematurity_label(codes.premature, variant).to_string(),
            race: labels::race_label(codes.race).to_string(),
            ethnicity: labels::ethnicity_label(codes.ethnicity).to_string(),
            syndrome_present,
            fetal_drug_exposure,
        }
    }

    pub fn fetal_drug_exposure_label(&self) -> &'static str {
        labels::yes_no(self.fetal_drug_exposure)
    }

    pub fn syndrome_present_label(&self) -> &'static str {
        labels::yes_no(self.syndrome_present)
    }
}

/// One row of the source table.
#[derive(Debug, Clone, PartialEq)]
pub struct PatientRecord {
    pub id: PatientId,
    /// Zero-based position in the source file (data rows only).
    pub row: usize,
    pub codes: DemographicCodes,
    pub syndrome_term: Option<String>,
    pub chrom_ab_term: Option<String>,
    pub age_at_surgery_months: Option<f64>,
    pub birth_weight_kg: Option<f64>,
    pub surgical_weight_kg: Option<f64>,
    pub shunt_size_mm: Option<f64>,
    pub cpb_minutes: Option<f64>,
    pub cross_clamp_minutes: Option<f64>,
    pub date_of_birth: Option<String>,
    pub surgery_date: Option<String>,
    pub discharge_date: Option<String>,
    pub cardiac_anatomy_notes: Option<String>,
    /// Non-missing `NCAA1..NCAA5` values in column order.
    pub noncardiac_anomalies: Vec<String>,
    /// Flags whose value is 1.
    pub flags: BTreeSet<Flag>,
    /// Non-missing companion values.
    pub companions: BTreeMap<Companion, String>,
    pub labels: DerivedLabels,
}

impl PatientRecord {
    /// Record with every optional field missing; used as a starting point by loaders and tests.
    pub fn empty(id: PatientId, variant: DashboardVariant) -> Self {
        Self {
            id,
            row: 0,
            codes: DemographicCodes::default(),
            syndrome_term: None,
            chrom_ab_term: None,
            age_at_surgery_months: None,
            birth_weight_kg: None,
            surgical_weight_kg: None,
            shunt_size_mm: None,
            cpb_minutes: None,
            cross_clamp_minutes: None,
            date_of_birth: None,
            surgery_date: None,
            discharge_date: None,
            cardiac_anatomy_notes: None,
            noncardiac_anomalies: Vec::new(),
            flags: BTreeSet::new(),
            companions: BTreeMap::new(),
            labels: DerivedLabels::derive(DemographicCodes::default(), None, true, variant),
        }
    }

    pub fn has_flag(&self, flag: Flag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn companion(&self, companion: Companion) -> Option<&str> {
        self.companions.get(&companion).map(String::as_str)
    }
}
