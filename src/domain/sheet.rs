//! Tabular data produced by an export
//!
//! A [`Sheet`] is the unit handed to writers: an optional title, an optional
//! heading row and the body rows.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single cell value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    /// Blank cell
    #[default]
    Empty,
    /// Boolean cell
    Bool(bool),
    /// Numeric cell
    Number(f64),
    /// Text cell
    Text(String),
}

impl CellValue {
    /// Returns true for blank cells
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// A worksheet of tabular data
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Sheet {
    /// Worksheet title (XLSX only)
    #[serde(default)]
    pub title: Option<String>,

    /// Heading row written before the body
    #[serde(default)]
    pub headings: Vec<String>,

    /// Body rows
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    /// Creates an empty sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the worksheet title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the heading row
    pub fn with_headings<I, S>(mut self, headings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headings = headings.into_iter().map(Into::into).collect();
        self
    }

    /// Appends a body row
    pub fn push_row<I, V>(&mut self, row: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    /// Builder variant of [`Sheet::push_row`]
    pub fn with_row<I, V>(mut self, row: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.push_row(row);
        self
    }

    /// True when there is neither a heading row nor body rows
    pub fn is_empty(&self) -> bool {
        self.headings.is_empty() && self.rows.is_empty()
    }

    /// Widest row, headings included
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headings.len()))
            .max()
            .unwrap_or(0)
    }
}
