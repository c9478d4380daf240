#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! In-memory tabular data for the fixture dataset and submission results.
//!
//! This is deliberately a small surface: just enough for the fifteen
//! required functions to be implementable from a submission script. All
//! operations return new values; the shared fixture frame is never mutated.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors specific to frame operations.
#[derive(Error, Debug)]
pub enum FrameError {
    /// A named column does not exist in the frame.
    #[error("column `{0}` not found")]
    MissingColumn(String),

    /// The identifier column contains a repeated value.
    #[error("duplicate identifier `{0}` in index column")]
    DuplicateId(String),

    /// A column's length does not match the frame's row count.
    #[error("column `{name}` has {actual} values but the frame has {expected} rows")]
    LengthMismatch {
        /// Name of the offending column.
        name:     String,
        /// Number of values supplied.
        actual:   usize,
        /// Number of rows in the frame.
        expected: usize,
    },

    /// A column holds no numeric values where a numeric operation needs one.
    #[error("column `{0}` has no numeric values")]
    NotNumeric(String),

    /// Two frames with different column sets cannot be concatenated.
    #[error("cannot concatenate frames with mismatched columns")]
    ColumnMismatch,

    /// The CSV input could not be parsed.
    #[error("failed to parse dataset: {0}")]
    Csv(#[from] csv::Error),
}

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// An integer cell.
    Int(i64),
    /// A floating-point cell.
    Float(f64),
    /// A text cell.
    Str(String),
    /// A missing cell.
    Null,
}

impl Value {
    /// Parses a CSV field, trying integer, then float, then falling back to
    /// text. Empty fields become null.
    fn parse(field: &str) -> Value {
        let field = field.trim();
        if field.is_empty() {
            return Value::Null;
        }
        if let Ok(n) = field.parse::<i64>() {
            return Value::Int(n);
        }
        if let Ok(x) = field.parse::<f64>() {
            return Value::Float(x);
        }
        Value::Str(field.to_string())
    }

    /// Numeric view of the value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(x) => Some(*x),
            _ => None,
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Str(s) => write!(f, "{s}"),
            Value::Null => write!(f, ""),
        }
    }
}

/// A named, 1-dimensional labeled column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    /// Column label.
    name:   String,
    /// Cell values, one per row.
    values: Vec<Value>,
}

impl Series {
    /// Creates a series from a label and its values.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column label.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The cell values.
    pub fn values(&self) -> &[Value] {
        &self.values
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of the numeric values, treating non-numeric cells as missing.
    pub fn sum(&self) -> f64 {
        self.values.iter().filter_map(Value::as_f64).sum()
    }

    /// Mean of the numeric values.
    ///
    /// Errors when the series holds no numeric values at all, since there is
    /// nothing meaningful to average.
    pub fn mean(&self) -> Result<f64, FrameError> {
        let numeric: Vec<f64> = self.values.iter().filter_map(Value::as_f64).collect();
        if numeric.is_empty() {
            return Err(FrameError::NotNumeric(self.name.clone()));
        }
        Ok(numeric.iter().sum::<f64>() / numeric.len() as f64)
    }

    /// Number of cells equal to the given value.
    pub fn count_eq(&self, needle: &Value) -> usize {
        self.values.iter().filter(|v| *v == needle).count()
    }
}

/// An immutable tabular structure with named columns and a unique-identifier
/// index.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataFrame {
    /// Name of the index column, if the frame was loaded with one.
    index_name: Option<String>,
    /// Unique row identifiers, parallel to every column.
    index:      Vec<Value>,
    /// Columns in declaration order.
    columns:    Vec<Series>,
}

impl DataFrame {
    /// Creates an empty frame with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a frame from CSV text, using `index_col` as the unique row
    /// identifier. The identifier column is validated for uniqueness and
    /// kept out of the regular column set.
    pub fn from_csv_str(data: &str, index_col: &str) -> Result<Self, FrameError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(data.as_bytes());

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.to_string())
            .collect();

        let index_pos = headers
            .iter()
            .position(|h| h == index_col)
            .ok_or_else(|| FrameError::MissingColumn(index_col.to_string()))?;

        let mut index = Vec::new();
        let mut columns: Vec<Series> = headers
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != index_pos)
            .map(|(_, h)| Series::new(h.clone(), Vec::new()))
            .collect();

        for record in reader.records() {
            let record = record?;
            let mut column_cursor = 0;
            for (i, field) in record.iter().enumerate() {
                let value = Value::parse(field);
                if i == index_pos {
                    if index.contains(&value) {
                        return Err(FrameError::DuplicateId(value.to_string()));
                    }
                    index.push(value);
                } else {
                    columns[column_cursor].values.push(value);
                    column_cursor += 1;
                }
            }
        }

        Ok(Self {
            index_name: Some(index_col.to_string()),
            index,
            columns,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        if !self.index.is_empty() {
            return self.index.len();
        }
        self.columns.first().map(Series::len).unwrap_or_default()
    }

    /// Whether the frame holds no columns and no rows.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty() && self.index.is_empty()
    }

    /// Column labels, in declaration order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Series::name).collect()
    }

    /// Whether a column with the given label exists.
    pub fn contains_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// The column with the given label.
    pub fn column(&self, name: &str) -> Result<&Series, FrameError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| FrameError::MissingColumn(name.to_string()))
    }

    /// Returns a new frame with the column added, replacing any existing
    /// column with the same label. The value count must match the row count
    /// unless the frame is empty.
    pub fn with_column(&self, name: &str, values: Vec<Value>) -> Result<Self, FrameError> {
        if !self.is_empty() && values.len() != self.rows() {
            return Err(FrameError::LengthMismatch {
                name:     name.to_string(),
                actual:   values.len(),
                expected: self.rows(),
            });
        }

        let mut next = self.clone();
        next.columns.retain(|c| c.name != name);
        next.columns.push(Series::new(name, values));
        Ok(next)
    }

    /// Returns a new frame without the named column.
    pub fn without_column(&self, name: &str) -> Result<Self, FrameError> {
        if !self.contains_column(name) {
            return Err(FrameError::MissingColumn(name.to_string()));
        }
        let mut next = self.clone();
        next.columns.retain(|c| c.name != name);
        Ok(next)
    }

    /// Row-wise concatenation. Column sets must match unless one side is
    /// empty, in which case the other side is returned unchanged.
    pub fn append(&self, other: &DataFrame) -> Result<Self, FrameError> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.column_names() != other.column_names() {
            return Err(FrameError::ColumnMismatch);
        }

        let mut next = self.clone();
        next.index.extend(other.index.iter().cloned());
        for (ours, theirs) in next.columns.iter_mut().zip(other.columns.iter()) {
            ours.values.extend(theirs.values.iter().cloned());
        }
        Ok(next)
    }

    /// Returns a new frame keeping only rows whose value in `name` is
    /// numeric and at least `min`.
    pub fn filter_at_least(&self, name: &str, min: f64) -> Result<Self, FrameError> {
        let target = self.column(name)?;
        let keep: Vec<bool> = target
            .values()
            .iter()
            .map(|v| v.as_f64().map(|x| x >= min).unwrap_or(false))
            .collect();

        let mut next = DataFrame {
            index_name: self.index_name.clone(),
            index: Vec::new(),
            columns: self
                .columns
                .iter()
                .map(|c| Series::new(c.name.clone(), Vec::new()))
                .collect(),
        };

        for (row, keep_row) in keep.iter().enumerate() {
            if !keep_row {
                continue;
            }
            if let Some(id) = self.index.get(row) {
                next.index.push(id.clone());
            }
            for (src, dst) in self.columns.iter().zip(next.columns.iter_mut()) {
                dst.values.push(src.values[row].clone());
            }
        }

        Ok(next)
    }
}
