//! CLI argument definitions for the dashboard front end.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pcs-dashboard",
    version,
    about = "Pediatric cardiac-surgery patient dashboards in the terminal",
    long_about = "Load a de-identified surgery CSV, select a patient, and print the\n\
                  overview or pediatric dashboard as tables or JSON."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// JSON file with default dashboard options.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow patient identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// List the patients in a data file.
    Patients(PatientsArgs),

    /// Build and print the dashboard for one patient.
    Show(ShowArgs),

    /// Score a set of risk factors without loading any data.
    Score(ScoreArgs),
}

#[derive(Parser)]
pub struct PatientsArgs {
    /// Path to the patient CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Path to the patient CSV file.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Patient identifier (`1023` and `1023.0` select the same patient).
    #[arg(long = "patient", short = 'p', value_name = "ID")]
    pub patient: String,

    /// Dashboard layout (default from config, else overview).
    #[arg(long = "variant", value_enum)]
    pub variant: Option<VariantArg>,

    /// Y axis of the shunt analysis (default from config, else ratio).
    #[arg(long = "scatter", value_enum)]
    pub scatter: Option<ScatterArg>,

    /// Risk factor label to score; repeat for several.
    ///
    /// One of: Premature, "Low birth weight", Co-morbidity, "Genetic syndrome",
    /// "Recent infection", "Post-op bleed". Case and separators are ignored.
    #[arg(long = "risk-factor", value_name = "LABEL")]
    pub risk_factors: Vec<String>,

    /// Fail instead of picking the first row when the identifier is duplicated.
    #[arg(long = "reject-duplicates")]
    pub reject_duplicates: bool,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ScoreArgs {
    /// Risk factor label to score; repeat for several.
    #[arg(long = "risk-factor", value_name = "LABEL")]
    pub risk_factors: Vec<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum VariantArg {
    Overview,
    Pediatric,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ScatterArg {
    Ratio,
    Size,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
