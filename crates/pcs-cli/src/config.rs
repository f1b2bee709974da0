//! Optional JSON configuration file.
//!
//! The file supplies defaults; command-line flags override it.
//!
//! ```json
//! {
//!   "variant": "pediatric",
//!   "scatter_mode": "size",
//!   "duplicate_ids": "reject",
//!   "risk_factors": ["Premature", "Post-op bleed"]
//! }
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use pcs_model::{DashboardOptions, DashboardVariant, DuplicateIdPolicy, ScatterMode};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    pub variant: Option<DashboardVariant>,
    pub scatter_mode: Option<ScatterMode>,
    pub duplicate_ids: Option<DuplicateIdPolicy>,
    /// Risk factor labels used when none are given on the command line.
    pub risk_factors: Vec<String>,
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionOverrides {
    pub variant: Option<DashboardVariant>,
    pub scatter_mode: Option<ScatterMode>,
    pub reject_duplicates: bool,
}

impl DashboardConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("parse config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn options(&self, overrides: OptionOverrides) -> DashboardOptions {
        let defaults = DashboardOptions::default();
        let duplicate_ids = if overrides.reject_duplicates {
            DuplicateIdPolicy::Reject
        } else {
            self.duplicate_ids.unwrap_or(defaults.duplicate_ids)
        };
        DashboardOptions::new()
            .with_variant(
                overrides
                    .variant
                    .or(self.variant)
                    .unwrap_or(defaults.variant),
            )
            .with_scatter_mode(
                overrides
                    .scatter_mode
                    .or(self.scatter_mode)
                    .unwrap_or(defaults.scatter_mode),
            )
            .with_duplicate_ids(duplicate_ids)
    }

    /// Command-line labels win when any are given.
    pub fn risk_factor_labels<'a>(&'a self, cli: &'a [String]) -> &'a [String] {
        if cli.is_empty() { &self.risk_factors } else { cli }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_all_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(
            config.options(OptionOverrides::default()),
            DashboardOptions::default()
        );
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(DashboardConfig::from_json(r#"{"colour":"red"}"#).is_err());
    }
}
