//! CLI library components for the patient dashboards.

pub mod config;
pub mod logging;
pub mod render;
