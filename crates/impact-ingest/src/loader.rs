//! CSV panel loading.
//!
//! The input contract is a CSV with named columns `region`, `time`,
//! `treatment`, `outcome` in any order. Headers are matched
//! case-insensitively after trimming and BOM stripping. The numeric columns
//! are coerced to `f64`; the treatment flag must be exactly 0 or 1 and is
//! stored as a `bool` on the typed record.

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, debug_span};

use impact_model::{Panel, PanelRecord};

use crate::error::{IngestError, Result};

pub const REGION_COLUMN: &str = "region";
pub const TIME_COLUMN: &str = "time";
pub const TREATMENT_COLUMN: &str = "treatment";
pub const OUTCOME_COLUMN: &str = "outcome";

#[derive(Debug, Clone, Copy)]
struct ColumnIndices {
    region: usize,
    time: usize,
    treatment: usize,
    outcome: usize,
}

fn normalize_cell(raw: &str) -> &str {
    raw.trim().trim_matches('\u{feff}')
}

fn locate_column(headers: &StringRecord, column: &'static str) -> Result<usize> {
    headers
        .iter()
        .position(|header| normalize_cell(header).eq_ignore_ascii_case(column))
        .ok_or(IngestError::MissingColumn { column })
}

fn locate_columns(headers: &StringRecord) -> Result<ColumnIndices> {
    Ok(ColumnIndices {
        region: locate_column(headers, REGION_COLUMN)?,
        time: locate_column(headers, TIME_COLUMN)?,
        treatment: locate_column(headers, TREATMENT_COLUMN)?,
        outcome: locate_column(headers, OUTCOME_COLUMN)?,
    })
}

fn required_cell<'a>(
    record: &'a StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
) -> Result<&'a str> {
    let value = record.get(index).map(normalize_cell).unwrap_or_default();
    if value.is_empty() {
        return Err(IngestError::MissingValue { row, column });
    }
    Ok(value)
}

fn numeric_cell(
    record: &StringRecord,
    index: usize,
    column: &'static str,
    row: usize,
) -> Result<f64> {
    let value = required_cell(record, index, column, row)?;
    value.parse().map_err(|_| IngestError::InvalidNumber {
        row,
        column,
        value: value.to_string(),
    })
}

fn treatment_flag(record: &StringRecord, index: usize, row: usize) -> Result<bool> {
    let value = numeric_cell(record, index, TREATMENT_COLUMN, row)?;
    if value == 1.0 {
        Ok(true)
    } else if value == 0.0 {
        Ok(false)
    } else {
        Err(IngestError::InvalidTreatmentFlag { row, value })
    }
}

/// Read a panel from any CSV source.
pub fn read_panel_from_reader<R: Read>(reader: R) -> Result<Panel> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let columns = locate_columns(csv_reader.headers()?)?;

    let mut records = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        // 1-based data row numbers, header excluded.
        let row = index + 1;
        if record.iter().all(|cell| normalize_cell(cell).is_empty()) {
            continue;
        }
        records.push(PanelRecord {
            region: required_cell(&record, columns.region, REGION_COLUMN, row)?.to_string(),
            time: numeric_cell(&record, columns.time, TIME_COLUMN, row)?,
            treated: treatment_flag(&record, columns.treatment, row)?,
            outcome: numeric_cell(&record, columns.outcome, OUTCOME_COLUMN, row)?,
        });
    }
    Ok(Panel::new(records)?)
}

/// Read a panel dataset from a CSV file on disk.
pub fn read_panel(path: &Path) -> Result<Panel> {
    let span = debug_span!("read_panel", dataset = %path.display());
    let _guard = span.enter();
    let start = Instant::now();

    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    let panel = read_panel_from_reader(file)?;

    debug!(
        dataset = %path.display(),
        record_count = panel.len(),
        region_count = panel.regions().len(),
        duration_ms = start.elapsed().as_millis(),
        "panel loaded"
    );
    Ok(panel)
}
