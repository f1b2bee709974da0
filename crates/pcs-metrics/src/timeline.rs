//! Event timeline and syndrome panel of the pediatric layout.

use pcs_model::labels::yes_no;
use pcs_model::{Companion, EventCard, PatientRecord, SyndromePanel, Timeline, TimelineEvent};

/// Shown for an event whose date was not recorded.
pub const MISSING_EVENT: &str = "--";
/// Shown when no chromosomal abnormality term was recorded.
pub const NO_ABNORMALITY: &str = "—";
/// Body of the septic event card; the source has no free-text column for it.
pub const SEPTIC_EVENT_DETAILS: &str = "*Details*";

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING_EVENT).to_string()
}

/// Timeline events, most recent first, plus the two event cards.
pub fn build_timeline(record: &PatientRecord) -> Timeline {
    let sepsis_date = record.companion(Companion::SepsisDate);
    let events = [
        ("Discharge", record.discharge_date.as_deref()),
        ("Sepsis Found and Treated", sepsis_date),
        (
            "Bleed Present",
            record.companion(Companion::ReoperationTime),
        ),
        ("Surgery Completion", record.surgery_date.as_deref()),
    ]
    .into_iter()
    .map(|(label, date)| TimelineEvent {
        label: label.to_string(),
        date: or_missing(date),
    })
    .collect();

    Timeline {
        events,
        cardiac_event: EventCard {
            title: "Cardiac Event".to_string(),
            date: or_missing(record.companion(Companion::CardiacArrestTime)),
            details: or_missing(record.cardiac_anatomy_notes.as_deref()),
        },
        septic_event: EventCard {
            title: "Septic Event".to_string(),
            date: or_missing(sepsis_date),
            details: SEPTIC_EVENT_DETAILS.to_string(),
        },
    }
}

pub fn build_syndrome_panel(record: &PatientRecord) -> SyndromePanel {
    SyndromePanel {
        syndrome_present: record.labels.syndrome_present,
        fetal_drug_exposure: yes_no(record.labels.fetal_drug_exposure).to_string(),
        abnormalities: record
            .chrom_ab_term
            .clone()
            .unwrap_or_else(|| NO_ABNORMALITY.to_string()),
        noncardiac_anomalies: record.noncardiac_anomalies.clone(),
        premature_badge: record.codes.premature == Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcs_model::{DashboardVariant, PatientId};

    #[test]
    fn missing_dates_default_to_dashes() {
        let record = PatientRecord::empty(PatientId::from("1"), DashboardVariant::Pediatric);
        let timeline = build_timeline(&record);

        let labels: Vec<&str> = timeline.events.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Discharge",
                "Sepsis Found and Treated",
                "Bleed Present",
                "Surgery Completion"
            ]
        );
        assert!(timeline.events.iter().all(|e| e.date == MISSING_EVENT));
        assert_eq!(timeline.cardiac_event.date, "--");
        assert_eq!(timeline.cardiac_event.details, "--");
        assert_eq!(timeline.septic_event.details, "*Details*");
    }

    #[test]
    fn recorded_dates_fill_events() {
        let mut record = PatientRecord::empty(PatientId::from("1"), DashboardVariant::Pediatric);
        record.surgery_date = Some("2021-02-01".to_string());
        record
            .companions
            .insert(Companion::SepsisDate, "2021-02-10".to_string());
        record.cardiac_anatomy_notes = Some("HLHS".to_string());
        let timeline = build_timeline(&record);

        assert_eq!(timeline.events[1].date, "2021-02-10");
        assert_eq!(timeline.events[3].date, "2021-02-01");
        assert_eq!(timeline.septic_event.date, "2021-02-10");
        assert_eq!(timeline.cardiac_event.details, "HLHS");
    }

    #[test]
    fn syndrome_panel_defaults() {
        let mut record = PatientRecord::empty(PatientId::from("1"), DashboardVariant::Pediatric);
        record.codes.premature = Some(1);
        record.noncardiac_anomalies = vec!["Cleft palate".to_string()];
        let panel = build_syndrome_panel(&record);

        assert_eq!(panel.abnormalities, NO_ABNORMALITY);
        assert_eq!(panel.fetal_drug_exposure, "No");
        assert_eq!(panel.noncardiac_anomalies, vec!["Cleft palate".to_string()]);
        assert!(panel.premature_badge);
    }
}
