// File: crates/tabplot-core/src/table.rs
// Summary: CSV table loader: header-keyed records with on-demand numeric and date coercion.

use std::path::Path;

use chrono::NaiveDate;
use thiserror::Error;

/// Fatal load failures. Surfaced once to the caller; there are no retries.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open '{path}': {source}")]
    Open { path: String, source: csv::Error },
    #[error("malformed csv in '{path}': {source}")]
    Parse { path: String, source: csv::Error },
    #[error("'{path}' contains no data rows")]
    Empty { path: String },
    #[error("row {row} has {got} fields, expected {expected}")]
    Ragged { row: usize, got: usize, expected: usize },
}

/// Column-name lookups that fail the schema check captured at load time.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("unknown column '{0}'")]
    UnknownColumn(String),
    #[error("bubble charts require a size field")]
    MissingSizeField,
}

/// An ordered, immutable table of string cells keyed by the header row.
/// Invariants: at least one data row, and every row has the same width as
/// the header. Row order is preserved from the source and is meaningful
/// (prefix slices like "first 10 rows" depend on it).
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    /// Read a comma-separated UTF-8 file with a header row. The header is
    /// trusted as-is; no per-cell validation happens here (numeric coercion
    /// is deferred to [`Table::numeric`]).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let shown = path.as_ref().display().to_string();
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path.as_ref())
            .map_err(|source| LoadError::Open { path: shown.clone(), source })?;

        let headers = rdr
            .headers()
            .map_err(|source| LoadError::Parse { path: shown.clone(), source })?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for rec in rdr.records() {
            let rec = rec.map_err(|source| LoadError::Parse { path: shown.clone(), source })?;
            rows.push(rec.iter().map(|s| s.to_string()).collect());
        }

        if headers.is_empty() || rows.is_empty() {
            return Err(LoadError::Empty { path: shown });
        }
        Ok(Self { headers, rows })
    }

    /// Build a table from already-parsed cells (tests, synthetic data),
    /// enforcing the non-empty and homogeneous-width invariants.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, LoadError> {
        if headers.is_empty() || rows.is_empty() {
            return Err(LoadError::Empty { path: "<memory>".to_string() });
        }
        let expected = headers.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != expected {
                return Err(LoadError::Ragged { row, got: cells.len(), expected });
            }
        }
        Ok(Self { headers, rows })
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (excludes the header).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of `name` in the header row, or a schema error.
    pub fn column_index(&self, name: &str) -> Result<usize, SchemaError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| SchemaError::UnknownColumn(name.to_string()))
    }

    /// Borrowed view of one row keyed by column name.
    pub fn record(&self, row: usize) -> Record<'_> {
        Record { headers: &self.headers, cells: &self.rows[row] }
    }

    pub fn records(&self) -> impl Iterator<Item = Record<'_>> {
        self.rows.iter().map(move |cells| Record { headers: &self.headers, cells })
    }

    /// Raw string cells of one column, in row order.
    pub fn strings(&self, name: &str) -> Result<Vec<&str>, SchemaError> {
        let i = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| r[i].as_str()).collect())
    }

    /// Numeric projection of one column. Non-numeric cells coerce to the
    /// NaN sentinel, which propagates through extents and scales instead of
    /// halting the computation.
    pub fn numeric(&self, name: &str) -> Result<Vec<f64>, SchemaError> {
        let i = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| coerce_number(&r[i])).collect())
    }

    /// Temporal projection of one column, as epoch seconds. Unparseable
    /// cells coerce to the NaN sentinel like any other bad numeric cell.
    pub fn dates(&self, name: &str) -> Result<Vec<f64>, SchemaError> {
        let i = self.column_index(name)?;
        Ok(self.rows.iter().map(|r| parse_date_seconds(&r[i])).collect())
    }
}

/// One row viewed as a mapping from column name to raw cell.
#[derive(Clone, Copy, Debug)]
pub struct Record<'a> {
    headers: &'a [String],
    cells: &'a [String],
}

impl<'a> Record<'a> {
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == name)
            .map(|i| self.cells[i].as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &'a str)> {
        self.headers
            .iter()
            .zip(self.cells.iter())
            .map(|(h, c)| (h.as_str(), c.as_str()))
    }
}

fn coerce_number(cell: &str) -> f64 {
    cell.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Parse a calendar date or epoch timestamp into seconds.
/// Integers above ~1e12 are treated as epoch milliseconds, otherwise as
/// already-numeric time; calendar strings try a few common layouts.
fn parse_date_seconds(cell: &str) -> f64 {
    let s = cell.trim();
    if s.is_empty() {
        return f64::NAN;
    }
    if let Ok(n) = s.parse::<i64>() {
        if n > 10_i64.pow(12) {
            return n as f64 / 1000.0; // epoch ms -> sec
        }
        return n as f64;
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%d-%m-%Y"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d
                .and_hms_opt(0, 0, 0)
                .map(|t| t.and_utc().timestamp() as f64)
                .unwrap_or(f64::NAN);
        }
    }
    f64::NAN
}
