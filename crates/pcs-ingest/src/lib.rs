//! Patient table ingestion.
//!
//! This crate loads the de-identified surgery CSV into Polars, checks the
//! column inventory, and builds one typed [`PatientRecord`](pcs_model::PatientRecord)
//! per row with its derived display labels.
//!
//! # Example
//!
//! ```ignore
//! use pcs_ingest::PatientStore;
//! use pcs_model::DashboardOptions;
//!
//! let store = PatientStore::open("MS_copy_DeID_Complete.csv", DashboardOptions::default())?;
//! let record = store.table().select(1023)?;
//! ```

pub mod columns;
mod error;
pub mod polars_utils;
mod reader;
mod store;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{read_patient_frame, validate_encoding};

// === Table ===
pub use store::PatientStore;
pub use table::{PatientTable, load};

pub use polars_utils::{any_to_f64, any_to_string, any_to_text, format_numeric, parse_f64};
