//! Process list loading.
//!
//! Two formats are accepted:
//!
//! - **CSV**: one record per line, `id,burst,arrival[,priority]`, no header.
//!   Blank lines and lines starting with `#` are skipped, fields may be
//!   quoted and are trimmed, and a missing priority means 0.
//! - **JSON**: an array of `{"id", "burst", "arrival", "priority"?}` objects.
//!
//! Loading only checks syntax. Semantic checks (unique IDs, positive
//! bursts) belong to [`validation`](crate::validation).

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use thiserror::Error;
use tracing::debug;

use crate::models::Process;

/// Errors raised while loading a process list.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The input could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The CSV input is malformed.
    #[error("invalid CSV process list: {0}")]
    Csv(#[from] csv::Error),

    /// The JSON input is malformed.
    #[error("invalid JSON process list: {0}")]
    Json(#[from] serde_json::Error),

    /// A CSV record has the wrong number of fields.
    #[error("line {line}: expected 3 or 4 columns (id,burst,arrival[,priority]), found {found}")]
    ColumnCount {
        /// 1-based line number.
        line: usize,
        /// Number of fields found.
        found: usize,
    },

    /// A CSV field is not an integer.
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidField {
        /// 1-based line number.
        line: usize,
        /// Column name.
        field: &'static str,
        /// Offending text.
        value: String,
    },
}

/// Input file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Comma-separated records.
    Csv,
    /// JSON array of process objects.
    Json,
}

impl InputFormat {
    /// Picks JSON for a `.json` extension, CSV otherwise.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => InputFormat::Json,
            _ => InputFormat::Csv,
        }
    }
}

const COLUMNS: [&str; 4] = ["id", "burst", "arrival", "priority"];

/// Parses CSV records from a reader.
pub fn read_csv<R: Read>(reader: R) -> Result<Vec<Process>, LoadError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    reader
        .records()
        .map(|record| parse_record(&record?))
        .collect()
}

/// Parses CSV records from a string.
///
/// # Example
///
/// ```
/// use u_cpusched::loader::parse_csv;
///
/// let processes = parse_csv("1,5,0\n2,3,1,2\n").unwrap();
/// assert_eq!(processes[0].burst, 5);
/// assert_eq!(processes[1].priority, 2);
/// ```
pub fn parse_csv(input: &str) -> Result<Vec<Process>, LoadError> {
    read_csv(input.as_bytes())
}

/// Parses a JSON array of processes.
pub fn parse_json(input: &str) -> Result<Vec<Process>, LoadError> {
    Ok(serde_json::from_str(input)?)
}

/// Loads a process list from a file, picking the format from its extension.
pub fn load_path(path: &Path) -> Result<Vec<Process>, LoadError> {
    let format = InputFormat::from_path(path);
    let input = fs::read_to_string(path)?;
    let processes = match format {
        InputFormat::Csv => parse_csv(&input)?,
        InputFormat::Json => parse_json(&input)?,
    };

    debug!(
        path = %path.display(),
        ?format,
        processes = processes.len(),
        "loaded processes"
    );
    Ok(processes)
}

fn parse_record(record: &StringRecord) -> Result<Process, LoadError> {
    let line = record.position().map_or(0, |pos| pos.line() as usize);
    if !(3..=4).contains(&record.len()) {
        return Err(LoadError::ColumnCount {
            line,
            found: record.len(),
        });
    }

    let mut values = [0i64; 4];
    for (column, field) in record.iter().enumerate() {
        values[column] = field.parse().map_err(|_| LoadError::InvalidField {
            line,
            field: COLUMNS[column],
            value: field.to_string(),
        })?;
    }

    let [id, burst, arrival, priority] = values;
    Ok(Process::new(id, arrival, burst).with_priority(priority))
}
