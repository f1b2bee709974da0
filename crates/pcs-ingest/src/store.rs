//! Owned, load-once access to the patient table.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use pcs_model::DashboardOptions;

use crate::error::Result;
use crate::table::{PatientTable, load};

/// Data-access object constructed once at startup and passed by reference.
///
/// The table is read exactly once, when the store is opened, and is immutable
/// afterwards. Picking up a changed file means opening a new store; there is
/// no implicit refresh.
#[derive(Debug, Clone)]
pub struct PatientStore {
    source: Option<PathBuf>,
    table: Arc<PatientTable>,
}

impl PatientStore {
    pub fn open(path: impl AsRef<Path>, options: DashboardOptions) -> Result<Self> {
        let path = path.as_ref();
        let table = load(path, options)?;
        Ok(Self {
            source: Some(path.to_path_buf()),
            table: Arc::new(table),
        })
    }

    /// Wraps a table built elsewhere (tests, in-memory frames).
    pub fn from_table(table: PatientTable) -> Self {
        Self {
            source: None,
            table: Arc::new(table),
        }
    }

    pub fn table(&self) -> &PatientTable {
        &self.table
    }

    /// Shared handle for consumers that outlive the store borrow.
    pub fn shared(&self) -> Arc<PatientTable> {
        Arc::clone(&self.table)
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}
