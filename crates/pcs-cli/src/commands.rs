use std::time::Instant;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use pcs_cli::config::{DashboardConfig, OptionOverrides};
use pcs_cli::logging::redact_value;
use pcs_cli::render::{patients_table, render_model, risk_table};
use pcs_ingest::PatientStore;
use pcs_metrics::{RiskScore, build};
use pcs_model::{DashboardVariant, PatientId, PresentationModel, ScatterMode};

use crate::cli::{OutputFormatArg, PatientsArgs, ScatterArg, ScoreArgs, ShowArgs, VariantArg};

const LOAD_FAILURE: &str = "Dashboard cannot be loaded";

#[derive(Serialize)]
struct PatientListing<'a> {
    id: &'a PatientId,
    sex: &'a str,
    birth_status: &'a str,
    race: &'a str,
    ethnicity: &'a str,
}

#[derive(Serialize)]
struct ShowReport<'a> {
    #[serde(flatten)]
    model: &'a PresentationModel,
    risk_score: &'a RiskScore,
}

pub fn run_patients(args: &PatientsArgs, config: &DashboardConfig) -> Result<()> {
    let options = config.options(OptionOverrides::default());
    let store = PatientStore::open(&args.csv, options).context(LOAD_FAILURE)?;
    let table = store.table();

    match args.format {
        OutputFormatArg::Table => println!("{}", patients_table(table)),
        OutputFormatArg::Json => {
            let listing: Vec<PatientListing<'_>> = table
                .first_records()
                .into_iter()
                .map(|record| PatientListing {
                    id: &record.id,
                    sex: &record.labels.gender,
                    birth_status: &record.labels.prematurity,
                    race: &record.labels.race,
                    ethnicity: &record.labels.ethnicity,
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&listing).context("serialize patient list")?
            );
        }
    }
    Ok(())
}

pub fn run_show(args: &ShowArgs, config: &DashboardConfig) -> Result<()> {
    let overrides = OptionOverrides {
        variant: args.variant.map(variant_from_arg),
        scatter_mode: args.scatter.map(scatter_from_arg),
        reject_duplicates: args.reject_duplicates,
    };
    let options = config.options(overrides);
    let risk = RiskScore::from_labels(config.risk_factor_labels(&args.risk_factors))
        .context("parse risk factors")?;

    let store = PatientStore::open(&args.csv, options).context(LOAD_FAILURE)?;
    let table = store.table();

    let span = info_span!("show", patient = redact_value(&args.patient));
    let _guard = span.enter();
    let start = Instant::now();

    let record = table
        .select(args.patient.as_str())
        .with_context(|| format!("select patient {}", args.patient))?;
    let model = build(record, table, options).context("build dashboard")?;

    info!(
        variant = %options.variant,
        notification_count = model.notification_count(),
        scatter_points = model.shunt_scatter.len(),
        risk_score = risk.score,
        duration_ms = start.elapsed().as_millis(),
        "dashboard built"
    );

    match args.format {
        OutputFormatArg::Table => print!("{}", render_model(&model, &risk)),
        OutputFormatArg::Json => {
            let report = ShowReport {
                model: &model,
                risk_score: &risk,
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("serialize dashboard")?
            );
        }
    }
    Ok(())
}

pub fn run_score(args: &ScoreArgs, config: &DashboardConfig) -> Result<()> {
    let risk = RiskScore::from_labels(config.risk_factor_labels(&args.risk_factors))
        .context("parse risk factors")?;
    match args.format {
        OutputFormatArg::Table => println!("{}", risk_table(&risk)),
        OutputFormatArg::Json => println!(
            "{}",
            serde_json::to_string_pretty(&risk).context("serialize risk score")?
        ),
    }
    Ok(())
}

fn variant_from_arg(arg: VariantArg) -> DashboardVariant {
    match arg {
        VariantArg::Overview => DashboardVariant::Overview,
        VariantArg::Pediatric => DashboardVariant::Pediatric,
    }
}

fn scatter_from_arg(arg: ScatterArg) -> ScatterMode {
    match arg {
        ScatterArg::Ratio => ScatterMode::Ratio,
        ScatterArg::Size => ScatterMode::Size,
    }
}
