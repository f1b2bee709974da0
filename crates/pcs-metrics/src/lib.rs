//! Dashboard metrics for the selected patient.
//!
//! This crate turns a loaded [`PatientTable`](pcs_ingest::PatientTable) and one
//! selected record into a [`PresentationModel`](pcs_model::PresentationModel):
//!
//! - **summary**: header card values, weight gain, age at surgery
//! - **notifications**: alert cards driven by flag columns
//! - **scatter**: cross-patient weight vs. shunt data and least-squares trend
//! - **timeline**: event timeline and syndrome panel
//! - **risk**: operator-selected risk factor score and gauge geometry
//! - **builder**: assembles the full model

pub mod builder;
pub mod dates;
mod error;
pub mod notifications;
pub mod risk;
pub mod scatter;
pub mod summary;
pub mod timeline;

pub use builder::{build, build_for, procedure_times};
pub use error::{MetricsError, Result};
pub use notifications::{Notifications, collect_notifications};
pub use risk::{RiskScore, needle_angle, score, score_percent};
pub use scatter::{fit_trend, scatter_dataset, shunt_analysis};
pub use summary::{summarize, weight_gain};
