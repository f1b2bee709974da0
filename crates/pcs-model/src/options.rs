//! Options shared by the loader and the metrics builder.

use serde::{Deserialize, Serialize};

use crate::{DashboardVariant, DuplicateIdPolicy, ScatterMode};

/// Options controlling how a table is loaded and how models are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardOptions {
    /// Layout the models are built for; also picks the prematurity wording.
    pub variant: DashboardVariant,

    /// Y axis of the shunt analysis chart.
    pub scatter_mode: ScatterMode,

    /// Behavior when an identifier occurs on more than one row.
    pub duplicate_ids: DuplicateIdPolicy,
}

impl DashboardOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_variant(mut self, variant: DashboardVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_scatter_mode(mut self, mode: ScatterMode) -> Self {
        self.scatter_mode = mode;
        self
    }

    pub fn with_duplicate_ids(mut self, policy: DuplicateIdPolicy) -> Self {
        self.duplicate_ids = policy;
        self
    }
}
