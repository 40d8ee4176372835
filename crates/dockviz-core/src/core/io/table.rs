use super::columns::{ColumnRole, ResolvedColumn, ResolvedColumns, TableLayout, resolve_column};
use super::traits::ScoreTable;
use crate::core::models::record::DockingRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::io::{self, Read};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Malformed table: {0}")]
    Csv(#[from] csv::Error),

    #[error("Table has no header row")]
    MissingHeader,

    #[error("Required {role} column '{column}' not found (available columns: {available})")]
    MissingColumn {
        role: ColumnRole,
        column: String,
        available: String,
    },

    #[error("Invalid {column} value '{value}' on line {line}: {reason}")]
    InvalidValue {
        line: u64,
        column: String,
        value: String,
        reason: &'static str,
    },
}

/// What a table read saw besides the records it returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableMetadata {
    /// Data rows read, including skipped ones.
    pub rows_read: usize,
    /// Rows dropped because their mode or affinity cell was blank.
    pub rows_skipped: usize,
    pub columns: ResolvedColumns,
}

/// Header-first delimited text table (CSV, TSV, ...) of docking poses.
///
/// Rows with a blank mode or affinity cell are skipped and counted in
/// [`TableMetadata::rows_skipped`]. A blank ligand identifier, or any other
/// malformed cell, aborts the read.
pub struct DelimitedTable;

impl ScoreTable for DelimitedTable {
    type Metadata = TableMetadata;
    type Error = TableError;

    fn read_from(
        reader: &mut impl Read,
        layout: &TableLayout,
    ) -> Result<(Vec<DockingRecord>, Self::Metadata), Self::Error> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(layout.delimiter)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        if headers.is_empty() {
            return Err(TableError::MissingHeader);
        }
        let columns = resolve_columns(&headers, layout)?;
        debug!(
            "Resolved columns: ligand='{}', mode='{}', affinity='{}'",
            columns.ligand.name, columns.mode.name, columns.affinity.name
        );

        let mut records = Vec::new();
        let mut rows_read = 0usize;
        let mut rows_skipped = 0usize;

        for row in csv_reader.records() {
            let row = row?;
            rows_read += 1;
            match parse_row(&row, &columns)? {
                Some(record) => records.push(record),
                None => rows_skipped += 1,
            }
        }

        if rows_skipped > 0 {
            warn!(
                "Skipped {} of {} row(s) with a blank mode or affinity cell.",
                rows_skipped, rows_read
            );
        }

        Ok((
            records,
            TableMetadata {
                rows_read,
                rows_skipped,
                columns,
            },
        ))
    }
}

fn resolve_columns(
    headers: &StringRecord,
    layout: &TableLayout,
) -> Result<ResolvedColumns, TableError> {
    let find = |role: ColumnRole| -> Result<ResolvedColumn, TableError> {
        resolve_column(headers.iter(), role, layout).ok_or_else(|| TableError::MissingColumn {
            role,
            column: layout
                .column(role)
                .unwrap_or(role.canonical_name())
                .to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })
    };

    Ok(ResolvedColumns {
        ligand: find(ColumnRole::Ligand)?,
        mode: find(ColumnRole::Mode)?,
        affinity: find(ColumnRole::Affinity)?,
    })
}

fn parse_row(
    row: &StringRecord,
    columns: &ResolvedColumns,
) -> Result<Option<DockingRecord>, TableError> {
    let line = row.position().map_or(0, |p| p.line());
    let cell = |column: &ResolvedColumn| row.get(column.index).unwrap_or("");

    let (ligand, mode, affinity) = (
        cell(&columns.ligand),
        cell(&columns.mode),
        cell(&columns.affinity),
    );

    let invalid = |column: &ResolvedColumn, value: &str, reason| TableError::InvalidValue {
        line,
        column: column.name.clone(),
        value: value.to_string(),
        reason,
    };

    if ligand.is_empty() {
        return Err(invalid(&columns.ligand, ligand, "ligand identifier is blank"));
    }
    if mode.is_empty() || affinity.is_empty() {
        debug!("Line {}: blank mode or affinity cell, row skipped.", line);
        return Ok(None);
    }

    let mode = parse_mode(mode).ok_or_else(|| {
        invalid(&columns.mode, mode, "expected a non-negative integer pose rank")
    })?;

    let affinity = affinity
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or_else(|| invalid(&columns.affinity, affinity, "expected a finite number"))?;

    Ok(Some(DockingRecord::new(ligand, mode, affinity)))
}

/// Accepts integral floats such as `1.0`, which spreadsheet exports commonly produce.
fn parse_mode(value: &str) -> Option<u32> {
    if let Ok(mode) = value.parse::<u32>() {
        return Some(mode);
    }
    let float = value.parse::<f64>().ok()?;
    (float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float <= u32::MAX as f64)
        .then_some(float as u32)
}
