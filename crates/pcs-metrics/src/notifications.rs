//! Flag-driven alert cards.
//!
//! Each rule names what triggers it, the fixed card text, and how the details
//! body is assembled from companion columns. Rules are evaluated in table
//! order, which is also the display order within each list.

use pcs_model::labels::yes_no;
use pcs_model::{Companion, Flag, NotificationCategory, NotificationItem, PatientRecord, RiskLevel};

/// Placeholder for a companion value that was not recorded.
pub const MISSING_DETAIL: &str = "N/A";

#[derive(Debug, Clone, Copy)]
enum Trigger {
    Flag(Flag),
    SyndromePresent,
    FetalDrugExposure,
}

#[derive(Debug, Clone, Copy)]
enum Source {
    Companion(Companion),
    StrokeHemorrhage,
    SyndromeTerm,
    ChromAbTerm,
}

#[derive(Debug, Clone, Copy)]
enum Details {
    Fixed(&'static str),
    /// `**Label:** value` lines joined by blank lines.
    Fields(&'static [(&'static str, Source)]),
}

#[derive(Debug, Clone, Copy)]
struct NotificationRule {
    category: NotificationCategory,
    trigger: Trigger,
    title: &'static str,
    subtext: &'static str,
    risk: RiskLevel,
    details: Details,
}

const RULES: &[NotificationRule] = &[
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::CardiacArrest),
        title: "Cardiac Arrest",
        subtext: "Patient experienced cardiac arrest.",
        risk: RiskLevel::High,
        details: Details::Fields(&[("Date/Time", Source::Companion(Companion::CardiacArrestTime))]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::MechanicalSupport),
        title: "Mechanical Support",
        subtext: "Mechanical circulatory support was required.",
        risk: RiskLevel::High,
        details: Details::Fields(&[
            ("Type", Source::Companion(Companion::MechanicalSupportType)),
            ("Reason", Source::Companion(Companion::MechanicalSupportReason)),
            ("Date", Source::Companion(Companion::MechanicalSupportStart)),
        ]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::LowCardiacOutput),
        title: "Low Cardiac Output",
        subtext: "Patient experienced Low Cardiac Output Syndrome.",
        risk: RiskLevel::High,
        details: Details::Fields(&[(
            "Date/Time",
            Source::Companion(Companion::LowCardiacOutputTime),
        )]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::ReoperationForBleeding),
        title: "Reoperation for Bleeding",
        subtext: "Patient required reoperation for bleeding.",
        risk: RiskLevel::Medium,
        details: Details::Fields(&[("Date/Time", Source::Companion(Companion::ReoperationTime))]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::Chylothorax),
        title: "Chylothorax",
        subtext: "Intervention required for chylothorax.",
        risk: RiskLevel::Medium,
        details: Details::Fields(&[("Date/Time", Source::Companion(Companion::ChylothoraxTime))]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::Sepsis),
        title: "Sepsis",
        subtext: "Patient developed sepsis.",
        risk: RiskLevel::High,
        details: Details::Fields(&[("Date", Source::Companion(Companion::SepsisDate))]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::SuperficialWoundInfection),
        title: "Superficial Wound Infection",
        subtext: "Post-operative superficial wound infection.",
        risk: RiskLevel::Medium,
        details: Details::Fields(&[(
            "Date",
            Source::Companion(Companion::SuperficialWoundInfectionDate),
        )]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::DeepWoundInfection),
        title: "Deep Wound Infection",
        subtext: "Post-operative deep wound infection.",
        risk: RiskLevel::High,
        details: Details::Fixed("No additional details available."),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::Clabsi),
        title: "CLABSI",
        subtext: "Central line-associated bloodstream infection.",
        risk: RiskLevel::High,
        details: Details::Fields(&[("Date", Source::Companion(Companion::ClabsiDate))]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::Stroke),
        title: "Stroke",
        subtext: "Patient experienced a stroke.",
        risk: RiskLevel::High,
        details: Details::Fields(&[
            ("Date/Time", Source::Companion(Companion::StrokeTime)),
            ("Hemorrhage", Source::StrokeHemorrhage),
        ]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::Ivh),
        title: "IVH (Intraventricular Hemorrhage)",
        subtext: "Patient developed an IVH.",
        risk: RiskLevel::High,
        details: Details::Fields(&[("Date/Time", Source::Companion(Companion::IvhTime))]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::Nec),
        title: "NEC (Necrotizing Enterocolitis)",
        subtext: "Patient developed NEC.",
        risk: RiskLevel::High,
        details: Details::Fields(&[("Date", Source::Companion(Companion::NecDate))]),
    },
    NotificationRule {
        category: NotificationCategory::Complication,
        trigger: Trigger::Flag(Flag::ConcurrentTapvrRepair),
        title: "Concurrent TAPVR Repair",
        subtext: "TAPVR repair performed during surgery.",
        risk: RiskLevel::Medium,
        details: Details::Fixed("TAPVR repair was performed during the primary surgery."),
    },
    NotificationRule {
        category: NotificationCategory::Comorbidity,
        trigger: Trigger::SyndromePresent,
        title: "Genetic Syndrome",
        subtext: "Genetic syndrome identified.",
        risk: RiskLevel::Medium,
        details: Details::Fields(&[("Syndrome Term", Source::SyndromeTerm)]),
    },
    NotificationRule {
        category: NotificationCategory::Comorbidity,
        trigger: Trigger::Flag(Flag::ChromosomalAbnormality),
        title: "Chromosomal Abnormality",
        subtext: "Chromosomal abnormality present.",
        risk: RiskLevel::Medium,
        details: Details::Fields(&[("Abnormality", Source::ChromAbTerm)]),
    },
    NotificationRule {
        category: NotificationCategory::Other,
        trigger: Trigger::FetalDrugExposure,
        title: "Fetal Drug Exposure",
        subtext: "Patient had fetal drug exposure.",
        risk: RiskLevel::Medium,
        details: Details::Fixed("Patient noted as having fetal drug exposure."),
    },
];

/// Notification lists for one record, grouped by column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notifications {
    pub complications: Vec<NotificationItem>,
    pub comorbidities: Vec<NotificationItem>,
    pub other: Vec<NotificationItem>,
}

impl Notifications {
    pub fn len(&self) -> usize {
        self.complications.len() + self.comorbidities.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, category: NotificationCategory, item: NotificationItem) {
        match category {
            NotificationCategory::Complication => self.complications.push(item),
            NotificationCategory::Comorbidity => self.comorbidities.push(item),
            NotificationCategory::Other => self.other.push(item),
        }
    }
}

/// Build the three notification lists for a record.
pub fn collect_notifications(record: &PatientRecord) -> Notifications {
    let mut notifications = Notifications::default();
    for rule in RULES.iter().filter(|rule| is_triggered(rule.trigger, record)) {
        notifications.push(
            rule.category,
            NotificationItem {
                title: rule.title.to_string(),
                subtext: rule.subtext.to_string(),
                risk: rule.risk,
                details: render_details(rule.details, record),
            },
        );
    }
    notifications
}

fn is_triggered(trigger: Trigger, record: &PatientRecord) -> bool {
    match trigger {
        Trigger::Flag(flag) => record.has_flag(flag),
        Trigger::SyndromePresent => record.labels.syndrome_present,
        Trigger::FetalDrugExposure => record.labels.fetal_drug_exposure,
    }
}

fn render_details(details: Details, record: &PatientRecord) -> String {
    match details {
        Details::Fixed(text) => text.to_string(),
        Details::Fields(fields) => fields
            .iter()
            .map(|(label, source)| format!("**{label}:** {}", source_value(*source, record)))
            .collect::<Vec<_>>()
            .join("\n\n"),
    }
}

fn source_value(source: Source, record: &PatientRecord) -> &str {
    let value = match source {
        Source::Companion(companion) => record.companion(companion),
        Source::StrokeHemorrhage => Some(yes_no(record.has_flag(Flag::StrokeHemorrhage))),
        Source::SyndromeTerm => record.syndrome_term.as_deref(),
        Source::ChromAbTerm => record.chrom_ab_term.as_deref(),
    };
    value.unwrap_or(MISSING_DETAIL)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcs_model::labels::NO_SYNDROME_TERM;
    use pcs_model::{DashboardVariant, DemographicCodes, DerivedLabels, PatientId};

    fn quiet_record() -> PatientRecord {
        let mut record = PatientRecord::empty(PatientId::from("1"), DashboardVariant::Overview);
        record.syndrome_term = Some(NO_SYNDROME_TERM.to_string());
        record.labels = DerivedLabels::derive(
            DemographicCodes::default(),
            Some(NO_SYNDROME_TERM),
            true,
            DashboardVariant::Overview,
        );
        record
    }

    #[test]
    fn no_flags_means_no_notifications() {
        let notifications = collect_notifications(&quiet_record());
        assert!(notifications.is_empty());
    }

    #[test]
    fn cardiac_arrest_alone() {
        let mut record = quiet_record();
        record.flags.insert(Flag::CardiacArrest);
        record.companions.insert(
            Companion::CardiacArrestTime,
            "2021-03-04 10:15".to_string(),
        );
        let notifications = collect_notifications(&record);

        assert_eq!(notifications.complications.len(), 1);
        assert!(notifications.comorbidities.is_empty());
        assert!(notifications.other.is_empty());
        let item = &notifications.complications[0];
        assert_eq!(item.title, "Cardiac Arrest");
        assert_eq!(item.risk, RiskLevel::High);
        assert_eq!(item.details, "**Date/Time:** 2021-03-04 10:15");
    }

    #[test]
    fn missing_companions_render_as_na() {
        let mut record = quiet_record();
        record.flags.insert(Flag::MechanicalSupport);
        record
            .companions
            .insert(Companion::MechanicalSupportType, "ECMO".to_string());
        let notifications = collect_notifications(&record);

        assert_eq!(
            notifications.complications[0].details,
            "**Type:** ECMO\n\n**Reason:** N/A\n\n**Date:** N/A"
        );
    }

    #[test]
    fn stroke_reports_hemorrhage() {
        let mut record = quiet_record();
        record.flags.insert(Flag::Stroke);
        record.flags.insert(Flag::StrokeHemorrhage);
        let notifications = collect_notifications(&record);

        assert_eq!(
            notifications.complications[0].details,
            "**Date/Time:** N/A\n\n**Hemorrhage:** Yes"
        );
    }

    #[test]
    fn rules_follow_table_order() {
        let mut record = quiet_record();
        record.flags.insert(Flag::ConcurrentTapvrRepair);
        record.flags.insert(Flag::Sepsis);
        record.flags.insert(Flag::CardiacArrest);
        let notifications = collect_notifications(&record);
        let titles: Vec<&str> = notifications
            .complications
            .iter()
            .map(|item| item.title.as_str())
            .collect();

        assert_eq!(titles, vec!["Cardiac Arrest", "Sepsis", "Concurrent TAPVR Repair"]);
    }
}
