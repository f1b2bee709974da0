//! Domain model for the pediatric cardiac-surgery dashboards.
//!
//! Pure types with no I/O: identifiers, code → label dictionaries, the typed
//! patient record, risk factors, and the presentation model handed to a
//! front end.

pub mod enums;
pub mod error;
pub mod ids;
pub mod labels;
pub mod options;
pub mod presentation;
pub mod record;
pub mod risk;

pub use enums::{DashboardVariant, DuplicateIdPolicy, NotificationCategory, RiskLevel, ScatterMode};
pub use error::{PcsError, Result};
pub use ids::{PatientId, canonical_id_text};
pub use options::DashboardOptions;
pub use presentation::{
    AnalysisPoint, EventCard, NotificationItem, PatientSummary, PresentationModel, ProcedureTimes,
    RiskBreakdownEntry, ScatterDataset, ScatterPoint, ShuntAnalysis, SyndromePanel, Timeline,
    TimelineEvent, TrendLine,
};
pub use record::{Companion, DemographicCodes, DerivedLabels, Flag, PatientRecord};
pub use risk::RiskFactor;
