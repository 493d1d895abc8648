//! Delimited text writer for CSV and TSV

use super::traits::SheetWriter;
use crate::config::CsvConfig;
use crate::domain::{Result, Sheet, WriterError, WriterType};
use csv::{Terminator, WriterBuilder};

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Delimited text writer backed by the `csv` crate
#[derive(Debug, Clone)]
pub struct CsvSheetWriter {
    writer_type: WriterType,
    delimiter: u8,
    enclosure: u8,
    crlf: bool,
    use_bom: bool,
}

impl CsvSheetWriter {
    /// CSV writer using the configured delimiter
    pub fn csv(config: &CsvConfig) -> Self {
        Self::with_delimiter(WriterType::Csv, config.delimiter_byte(), config)
    }

    /// TSV writer; only the delimiter differs from the CSV settings
    pub fn tsv(config: &CsvConfig) -> Self {
        Self::with_delimiter(WriterType::Tsv, b'\t', config)
    }

    fn with_delimiter(writer_type: WriterType, delimiter: u8, config: &CsvConfig) -> Self {
        Self {
            writer_type,
            delimiter,
            enclosure: config.enclosure_byte(),
            crlf: config.line_ending == "\r\n",
            use_bom: config.use_bom,
        }
    }
}

impl SheetWriter for CsvSheetWriter {
    fn writer_type(&self) -> WriterType {
        self.writer_type
    }

    fn write(&self, sheet: &Sheet) -> Result<Vec<u8>> {
        let buffer = if self.use_bom {
            UTF8_BOM.to_vec()
        } else {
            Vec::new()
        };

        let terminator = if self.crlf {
            Terminator::CRLF
        } else {
            Terminator::Any(b'\n')
        };

        let mut writer = WriterBuilder::new()
            .delimiter(self.delimiter)
            .quote(self.enclosure)
            .terminator(terminator)
            .flexible(true)
            .from_writer(buffer);

        if !sheet.headings.is_empty() {
            writer
                .write_record(&sheet.headings)
                .map_err(|e| WriterError::Csv(e.to_string()))?;
        }

        for row in &sheet.rows {
            writer
                .write_record(row.iter().map(|cell| cell.to_string()))
                .map_err(|e| WriterError::Csv(e.to_string()))?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| WriterError::Csv(e.to_string()))?;

        Ok(bytes)
    }
}
