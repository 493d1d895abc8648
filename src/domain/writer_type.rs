//! Writer type enumeration
//!
//! A writer type selects the output file format. It can be given explicitly,
//! declared on the export object, or detected from a file extension.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// Output file format
///
/// # Examples
///
/// ```
/// use folio::domain::WriterType;
/// use std::str::FromStr;
///
/// assert_eq!(WriterType::from_str("CSV").unwrap(), WriterType::Csv);
/// assert_eq!(WriterType::from_path("reports/q1.xlsx"), Some(WriterType::Xlsx));
/// assert_eq!(WriterType::from_path("notes.txt"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriterType {
    /// Office Open XML workbook
    Xlsx,
    /// Comma separated values
    Csv,
    /// Tab separated values
    Tsv,
}

impl WriterType {
    /// All supported writer types
    pub const ALL: [WriterType; 3] = [WriterType::Xlsx, WriterType::Csv, WriterType::Tsv];

    /// Canonical lowercase name, also used as the file extension
    pub fn as_str(&self) -> &'static str {
        match self {
            WriterType::Xlsx => "xlsx",
            WriterType::Csv => "csv",
            WriterType::Tsv => "tsv",
        }
    }

    /// MIME type sent as `Content-Type` for downloads
    pub fn content_type(&self) -> &'static str {
        match self {
            WriterType::Xlsx => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            WriterType::Csv => "text/csv; charset=UTF-8",
            WriterType::Tsv => "text/tab-separated-values; charset=UTF-8",
        }
    }

    /// Detect the writer type from a file name or path extension
    pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?;
        Self::from_str(ext).ok()
    }
}

impl fmt::Display for WriterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_str().to_uppercase())
    }
}

impl FromStr for WriterType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(WriterType::Xlsx),
            "csv" => Ok(WriterType::Csv),
            "tsv" => Ok(WriterType::Tsv),
            other => Err(format!(
                "Unsupported writer type '{other}'. Must be one of: xlsx, csv, tsv"
            )),
        }
    }
}
