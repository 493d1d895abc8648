//! Spreadsheet writers
//!
//! This module turns a [`Sheet`](crate::domain::Sheet) into file bytes:
//!
//! - [`xlsx`] - Office Open XML workbooks via `rust_xlsxwriter`
//! - [`delimited`] - CSV and TSV via the `csv` crate
//! - [`factory`] - selection by [`WriterType`](crate::domain::WriterType)

pub mod delimited;
pub mod factory;
pub mod traits;
pub mod xlsx;

pub use delimited::CsvSheetWriter;
pub use factory::WriterFactory;
pub use traits::SheetWriter;
pub use xlsx::{sanitize_sheet_name, XlsxSheetWriter};
