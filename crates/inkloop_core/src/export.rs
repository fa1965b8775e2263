//! Delimited-text export of dashboard tables.
//!
//! Tables are statically shaped: each row type declares its columns through
//! [`Tabular`]. Free-form records are accepted through
//! [`Table::from_records`], which validates that every record has the same
//! keys as the first.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ExportError;
use crate::metrics::PartnerRow;
use crate::model::{MonthRecord, ProjectMonth};
use crate::sample::DEFAULT_EXPORT_FILENAME;

/// Plain number text; NaN and infinity export as the `N/A` sentinel
fn number_cell(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        crate::format::NOT_AVAILABLE.to_string()
    }
}

/// A row type with a fixed, ordered column list
pub trait Tabular {
    const COLUMNS: &'static [&'static str];

    /// Cell text in `COLUMNS` order
    fn cells(&self) -> Vec<String>;
}

impl Tabular for PartnerRow {
    const COLUMNS: &'static [&'static str] = &["Partner", "Hours", "Revenue", "AvgRate", "Share"];

    fn cells(&self) -> Vec<String> {
        let average_rate = match &self.average_rate {
            Ok(rate) => format!("{}", rate.round()),
            Err(_) => crate::format::NOT_AVAILABLE.to_string(),
        };
        vec![
            self.partner.clone(),
            number_cell(self.hours),
            number_cell(self.revenue),
            average_rate,
            crate::format::percent_or_na(&self.share),
        ]
    }
}

impl Tabular for MonthRecord {
    const COLUMNS: &'static [&'static str] = &["month", "revenue", "expenses", "profit"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.month.clone(),
            number_cell(self.revenue),
            number_cell(self.expenses),
            number_cell(self.profit),
        ]
    }
}

impl Tabular for ProjectMonth {
    const COLUMNS: &'static [&'static str] = &["month", "completed", "started"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.month.clone(),
            self.completed.to_string(),
            self.started.to_string(),
        ]
    }
}

/// An ordered mapping of column name to stringified value
pub type Record = Vec<(String, String)>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn from_rows<T: Tabular>(rows: &[T]) -> Result<Self, ExportError> {
        if rows.is_empty() {
            return Err(ExportError::EmptyInput);
        }
        Ok(Self {
            header: T::COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(T::cells).collect(),
        })
    }

    /// Build a table from free-form records, taking the header from the first one.
    ///
    /// Values are emitted in header order, so records may list the same keys
    /// in a different order. A record with a different key set, or with a
    /// key repeated, is rejected.
    pub fn from_records(records: &[Record]) -> Result<Self, ExportError> {
        let first = records.first().ok_or(ExportError::EmptyInput)?;
        let header = unique_keys(first);
        let expected = sorted_keys(first);

        let mut rows = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let found = sorted_keys(record);
            let repeats_key = found.windows(2).any(|pair| pair[0] == pair[1]);
            if repeats_key || found != expected {
                return Err(ExportError::ShapeMismatch {
                    row: index,
                    expected: header.clone(),
                    found: record.iter().map(|(key, _)| key.clone()).collect(),
                });
            }
            let values: BTreeMap<&str, &str> = record
                .iter()
                .map(|(key, value)| (key.as_str(), value.as_str()))
                .collect();
            rows.push(
                header
                    .iter()
                    .map(|key| values.get(key.as_str()).copied().unwrap_or_default().to_string())
                    .collect(),
            );
        }

        Ok(Self { header, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Keys of `record` in order, first occurrence only
fn unique_keys(record: &Record) -> Vec<String> {
    let mut seen = HashSet::new();
    record
        .iter()
        .filter(|(key, _)| seen.insert(key.as_str()))
        .map(|(key, _)| key.clone())
        .collect()
}

fn sorted_keys(record: &Record) -> Vec<&str> {
    let mut keys: Vec<&str> = record.iter().map(|(key, _)| key.as_str()).collect();
    keys.sort_unstable();
    keys
}

/// How cell text is protected against embedded delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quoting {
    /// Cells are joined verbatim; embedded commas or quotes break the layout
    #[default]
    #[serde(rename = "none")]
    Plain,
    /// Quote cells that need it, doubling embedded quotes
    Rfc4180,
}

/// Serialize `table` as comma-separated lines joined by `\n`, header first,
/// without a trailing newline.
pub fn to_delimited(table: &Table, quoting: Quoting) -> Result<String, ExportError> {
    match quoting {
        Quoting::Plain => {
            let lines: Vec<String> = std::iter::once(table.header.join(","))
                .chain(table.rows.iter().map(|row| row.join(",")))
                .collect();
            Ok(lines.join("\n"))
        }
        Quoting::Rfc4180 => {
            let mut writer = csv::WriterBuilder::new()
                .terminator(csv::Terminator::Any(b'\n'))
                .from_writer(Vec::new());
            writer.write_record(&table.header).map_err(csv_failure)?;
            for row in &table.rows {
                writer.write_record(row).map_err(csv_failure)?;
            }
            let bytes = writer
                .into_inner()
                .map_err(|e| ExportError::ExportFailed(e.to_string()))?;
            let text =
                String::from_utf8(bytes).map_err(|e| ExportError::ExportFailed(e.to_string()))?;
            Ok(text.strip_suffix('\n').unwrap_or(&text).to_string())
        }
    }
}

fn csv_failure(err: csv::Error) -> ExportError {
    ExportError::ExportFailed(err.to_string())
}

pub type SaveResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

/// The host's way of persisting an exported file (download, disk, ...)
pub trait SaveTarget {
    fn save(&self, filename: &str, contents: &str) -> SaveResult;
}

/// What an export wrote
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReceipt {
    pub filename: String,
    pub rows: usize,
    pub bytes: usize,
}

/// Serialize `table` and hand it to `target` under `filename`
/// (or [`DEFAULT_EXPORT_FILENAME`]).
pub fn export_csv(
    table: &Table,
    filename: Option<&str>,
    target: &dyn SaveTarget,
    quoting: Quoting,
) -> Result<ExportReceipt, ExportError> {
    if table.is_empty() {
        return Err(ExportError::EmptyInput);
    }

    let filename = filename.unwrap_or(DEFAULT_EXPORT_FILENAME);
    let text = to_delimited(table, quoting)?;

    target.save(filename, &text).map_err(|e| {
        tracing::warn!(filename, error = %e, "export save failed");
        ExportError::ExportFailed(e.to_string())
    })?;

    tracing::info!(filename, rows = table.len(), "exported table");
    Ok(ExportReceipt {
        filename: filename.to_string(),
        rows: table.len(),
        bytes: text.len(),
    })
}

/// Keeps exported files in memory; for hosts without a filesystem and for tests
#[derive(Debug, Default)]
pub struct MemorySaveTarget {
    files: RefCell<Vec<(String, String)>>,
}

impl MemorySaveTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Saved `(filename, contents)` pairs in save order
    pub fn files(&self) -> Vec<(String, String)> {
        self.files.borrow().clone()
    }

    pub fn last(&self) -> Option<(String, String)> {
        self.files.borrow().last().cloned()
    }
}

impl SaveTarget for MemorySaveTarget {
    fn save(&self, filename: &str, contents: &str) -> SaveResult {
        self.files
            .borrow_mut()
            .push((filename.to_string(), contents.to_string()));
        Ok(())
    }
}
