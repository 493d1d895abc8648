//! XLSX writer backed by `rust_xlsxwriter`

use super::traits::SheetWriter;
use crate::domain::{CellValue, Result, Sheet, WriterError, WriterType};
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

/// Excel worksheet maximum row count.
pub const MAX_ROWS: usize = 1_048_576;
/// Excel worksheet maximum column count.
pub const MAX_COLUMNS: usize = 16_384;
/// Excel sheet name maximum length.
pub const MAX_SHEET_NAME_LEN: usize = 31;
/// Characters not allowed in sheet names.
const ILLEGAL_SHEET_NAME_CHARS: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

const DEFAULT_SHEET_NAME: &str = "Worksheet";

/// Single-worksheet XLSX writer with a bold heading row
#[derive(Debug, Clone, Default)]
pub struct XlsxSheetWriter;

impl XlsxSheetWriter {
    pub fn new() -> Self {
        Self
    }

    fn fill(&self, worksheet: &mut Worksheet, sheet: &Sheet) -> std::result::Result<(), XlsxError> {
        let heading_format = Format::new().set_bold();

        let mut row_idx: u32 = 0;
        if !sheet.headings.is_empty() {
            for (col_idx, heading) in sheet.headings.iter().enumerate() {
                worksheet.write_string_with_format(row_idx, col_idx as u16, heading, &heading_format)?;
            }
            row_idx += 1;
        }

        for row in &sheet.rows {
            for (col_idx, cell) in row.iter().enumerate() {
                let col_idx = col_idx as u16;
                match cell {
                    CellValue::Empty => {}
                    CellValue::Bool(b) => {
                        worksheet.write_boolean(row_idx, col_idx, *b)?;
                    }
                    CellValue::Number(n) => {
                        worksheet.write_number(row_idx, col_idx, *n)?;
                    }
                    CellValue::Text(s) => {
                        worksheet.write_string(row_idx, col_idx, s)?;
                    }
                }
            }
            row_idx += 1;
        }

        Ok(())
    }
}

impl SheetWriter for XlsxSheetWriter {
    fn writer_type(&self) -> WriterType {
        WriterType::Xlsx
    }

    fn write(&self, sheet: &Sheet) -> Result<Vec<u8>> {
        let height = sheet.rows.len() + usize::from(!sheet.headings.is_empty());
        if height > MAX_ROWS {
            return Err(WriterError::InvalidOptions(format!(
                "{height} rows exceed the worksheet limit of {MAX_ROWS}"
            ))
            .into());
        }
        if sheet.width() > MAX_COLUMNS {
            return Err(WriterError::InvalidOptions(format!(
                "{} columns exceed the worksheet limit of {MAX_COLUMNS}",
                sheet.width()
            ))
            .into());
        }

        let name = sanitize_sheet_name(sheet.title.as_deref().unwrap_or(DEFAULT_SHEET_NAME));

        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(&name)
            .map_err(|e| WriterError::Xlsx(e.to_string()))?;
        self.fill(worksheet, sheet)
            .map_err(|e| WriterError::Xlsx(e.to_string()))?;

        let bytes = workbook
            .save_to_buffer()
            .map_err(|e| WriterError::Xlsx(e.to_string()))?;

        tracing::trace!(sheet = %name, rows = sheet.rows.len(), bytes = bytes.len(), "XLSX encoded");
        Ok(bytes)
    }
}

/// Make a title usable as a worksheet name
///
/// Illegal characters become `_` and the result is cut to 31 characters.
/// Surrounding whitespace and apostrophes are stripped before and after the
/// cut. Blank titles fall back to `Worksheet`.
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| {
            if ILLEGAL_SHEET_NAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect();

    let truncated: String = trim_sheet_name(&replaced)
        .chars()
        .take(MAX_SHEET_NAME_LEN)
        .collect();

    let trimmed = trim_sheet_name(&truncated);
    if trimmed.is_empty() {
        return DEFAULT_SHEET_NAME.to_string();
    }
    trimmed.to_string()
}

fn trim_sheet_name(name: &str) -> &str {
    name.trim_matches(|c: char| c.is_whitespace() || c == '\'')
}
