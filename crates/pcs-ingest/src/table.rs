//! Typed patient table built from a source frame.

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::path::Path;
use std::time::Instant;

use polars::prelude::{AnyValue, Column, DataFrame};
use tracing::{debug, info, info_span, warn};

use pcs_model::labels::SYNDROME_COLUMN_MISSING_TERM;
use pcs_model::{
    Companion, DashboardOptions, DashboardVariant, DemographicCodes, DerivedLabels,
    DuplicateIdPolicy, Flag, PatientId, PatientRecord,
};

use crate::columns::{self, normalize_header, required_columns};
use crate::error::{IngestError, Result};
use crate::polars_utils::{any_to_text, parse_code, parse_f64};
use crate::reader::read_patient_frame;

/// Column lookup keyed by normalized header.
struct FrameColumns<'a> {
    columns: HashMap<String, &'a Column>,
}

impl<'a> FrameColumns<'a> {
    fn new(df: &'a DataFrame) -> Self {
        let columns = df
            .get_columns()
            .iter()
            .map(|column| (normalize_header(column.name().as_str()), column))
            .collect();
        Self { columns }
    }

    fn has(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    fn text(&self, name: &str, row: usize) -> Option<String> {
        let column = self.columns.get(name)?;
        any_to_text(column.get(row).unwrap_or(AnyValue::Null))
    }

    fn number(&self, name: &str, row: usize) -> Option<f64> {
        self.text(name, row).as_deref().and_then(parse_f64)
    }

    fn code(&self, name: &str, row: usize) -> Option<i64> {
        self.text(name, row).as_deref().and_then(parse_code)
    }

    /// A flag is set only when its value is numerically 1.
    fn flag(&self, name: &str, row: usize) -> bool {
        self.number(name, row) == Some(1.0)
    }
}

/// The loaded source table: one typed record per row, in source order.
#[derive(Debug, Clone)]
pub struct PatientTable {
    records: Vec<PatientRecord>,
    index: BTreeMap<PatientId, Vec<usize>>,
    syndrome_column_present: bool,
    skipped_rows: Vec<usize>,
    options: DashboardOptions,
}

impl PatientTable {
    /// Builds a table from already-typed records.
    pub fn new(
        records: Vec<PatientRecord>,
        syndrome_column_present: bool,
        options: DashboardOptions,
    ) -> Self {
        let mut index: BTreeMap<PatientId, Vec<usize>> = BTreeMap::new();
        for (position, record) in records.iter().enumerate() {
            index.entry(record.id.clone()).or_default().push(position);
        }
        Self {
            records,
            index,
            syndrome_column_present,
            skipped_rows: Vec::new(),
            options,
        }
    }

    /// Builds a table from a frame whose columns follow the source inventory.
    pub fn from_frame(df: &DataFrame, options: DashboardOptions) -> Result<Self> {
        let columns = FrameColumns::new(df);
        for column in required_columns() {
            if !columns.has(column) {
                return Err(IngestError::MissingColumn {
                    column: column.to_string(),
                });
            }
        }
        let syndrome_column_present = columns.has(columns::SYNDROME_TERM);
        if !syndrome_column_present {
            warn!(
                column = columns::SYNDROME_TERM,
                "column not found; using default syndrome values"
            );
        }

        let mut records = Vec::with_capacity(df.height());
        let mut skipped_rows = Vec::new();
        for row in 0..df.height() {
            match build_record(&columns, row, syndrome_column_present, options.variant) {
                Ok(record) => records.push(record),
                Err(IngestError::EmptyIdentifier { row }) => {
                    warn!(row, "row has an empty patient identifier; skipped");
                    skipped_rows.push(row);
                }
                Err(error) => return Err(error),
            }
        }

        let mut table = Self::new(records, syndrome_column_present, options);
        table.skipped_rows = skipped_rows;
        let duplicates = table.duplicate_ids();
        if !duplicates.is_empty() {
            warn!(
                duplicate_count = duplicates.len(),
                policy = ?options.duplicate_ids,
                "duplicate patient identifiers in source"
            );
        }
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[PatientRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> {
        self.records.iter()
    }

    pub fn options(&self) -> DashboardOptions {
        self.options
    }

    pub fn variant(&self) -> DashboardVariant {
        self.options.variant
    }

    /// False when the source had no `SyndromeTerm` column and defaults were used.
    pub fn syndrome_column_present(&self) -> bool {
        self.syndrome_column_present
    }

    /// The first record of each identifier, in source order.
    pub fn first_records(&self) -> Vec<&PatientRecord> {
        let mut seen = BTreeSet::new();
        self.records
            .iter()
            .filter(|record| seen.insert(&record.id))
            .collect()
    }

    /// Distinct identifiers in first-seen order.
    pub fn patient_ids(&self) -> Vec<&PatientId> {
        self.first_records()
            .into_iter()
            .map(|record| &record.id)
            .collect()
    }

    /// Source rows left out of the table because their identifier was empty.
    pub fn skipped_rows(&self) -> &[usize] {
        &self.skipped_rows
    }

    /// Identifiers occurring on more than one row, with their row counts.
    pub fn duplicate_ids(&self) -> Vec<(&PatientId, usize)> {
        self.index
            .iter()
            .filter(|(_, rows)| rows.len() > 1)
            .map(|(id, rows)| (id, rows.len()))
            .collect()
    }

    /// Selects the record for an identifier using the table's duplicate policy.
    ///
    /// The key is canonicalized first, so `"1023"`, `1023` and `1023.0` find
    /// the same record.
    pub fn select(&self, key: impl Into<PatientId>) -> Result<&PatientRecord> {
        self.select_with_policy(key, self.options.duplicate_ids)
    }

    pub fn select_with_policy(
        &self,
        key: impl Into<PatientId>,
        policy: DuplicateIdPolicy,
    ) -> Result<&PatientRecord> {
        let id: PatientId = key.into();
        let rows = self
            .index
            .get(&id)
            .filter(|rows| !rows.is_empty())
            .ok_or_else(|| IngestError::PatientNotFound { id: id.clone() })?;
        if rows.len() > 1 {
            match policy {
                DuplicateIdPolicy::FirstMatch => {
                    debug!(match_count = rows.len(), "identifier matches several rows; using first");
                }
                DuplicateIdPolicy::Reject => {
                    return Err(IngestError::DuplicatePatient {
                        id,
                        count: rows.len(),
                    });
                }
            }
        }
        Ok(&self.records[rows[0]])
    }
}

impl<'a> IntoIterator for &'a PatientTable {
    type Item = &'a PatientRecord;
    type IntoIter = std::slice::Iter<'a, PatientRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

fn build_record(
    columns: &FrameColumns<'_>,
    row: usize,
    syndrome_column_present: bool,
    variant: DashboardVariant,
) -> Result<PatientRecord> {
    let raw_id = columns
        .text(columns::PATIENT_ID, row)
        .ok_or(IngestError::EmptyIdentifier { row })?;
    let id = PatientId::new(&raw_id).map_err(|_| IngestError::EmptyIdentifier { row })?;

    let codes = DemographicCodes {
        gender: columns.code(columns::GENDER, row),
        premature: columns.code(columns::PREMATURE, row),
        race: columns.code(columns::RACE, row),
        ethnicity: columns.code(columns::ETHNICITY, row),
    };
    let syndrome_term = if syndrome_column_present {
        columns.text(columns::SYNDROME_TERM, row)
    } else {
        Some(SYNDROME_COLUMN_MISSING_TERM.to_string())
    };
    let labels = DerivedLabels::derive(
        codes,
        syndrome_term.as_deref(),
        syndrome_column_present,
        variant,
    );

    let flags = Flag::ALL
        .into_iter()
        .filter(|flag| columns.flag(flag.column(), row))
        .collect();
    let companions = Companion::ALL
        .into_iter()
        .filter_map(|companion| {
            columns
                .text(companion.column(), row)
                .map(|value| (companion, value))
        })
        .collect();
    let noncardiac_anomalies = columns::NONCARDIAC_ANOMALIES
        .iter()
        .filter_map(|name| columns.text(name, row))
        .collect();

    Ok(PatientRecord {
        id,
        row,
        codes,
        syndrome_term,
        chrom_ab_term: columns.text(columns::CHROM_AB_TERM, row),
        age_at_surgery_months: columns.number(columns::AGE_AT_SURGERY_MONTHS, row),
        birth_weight_kg: columns.number(columns::BIRTH_WEIGHT_KG, row),
        surgical_weight_kg: columns.number(columns::SURGICAL_WEIGHT_KG, row),
        shunt_size_mm: columns.number(columns::SHUNT_SIZE, row),
        cpb_minutes: columns.number(columns::CPB_TIME, row),
        cross_clamp_minutes: columns.number(columns::CROSS_CLAMP_TIME, row),
        date_of_birth: columns.text(columns::DATE_OF_BIRTH, row),
        surgery_date: columns.text(columns::SURGERY_DATE, row),
        discharge_date: columns.text(columns::DISCHARGE, row),
        cardiac_anatomy_notes: columns.text(columns::CARDIAC_ANATOMY_NOTES, row),
        noncardiac_anomalies,
        flags,
        companions,
        labels,
    })
}

/// Reads the CSV at `path` and builds the typed table.
///
/// A failure here means the dashboard is unavailable; callers report it and
/// do not retry.
pub fn load(path: &Path, options: DashboardOptions) -> Result<PatientTable> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let df = read_patient_frame(path)?;
    let table = PatientTable::from_frame(&df, options)?;

    info!(
        patient_count = table.len(),
        column_count = df.width(),
        variant = %options.variant,
        duration_ms = start.elapsed().as_millis(),
        "load complete"
    );
    Ok(table)
}
