//! Writer factory
//!
//! Maps a [`WriterType`] to the [`SheetWriter`] that produces it.

use super::delimited::CsvSheetWriter;
use super::traits::SheetWriter;
use super::xlsx::XlsxSheetWriter;
use crate::config::CsvConfig;
use crate::domain::{Result, Sheet, WriterType};

/// Creates sheet writers keyed by writer type
#[derive(Debug, Clone, Default)]
pub struct WriterFactory {
    csv: CsvConfig,
}

impl WriterFactory {
    /// Factory using the given CSV settings
    pub fn new(csv: CsvConfig) -> Self {
        Self { csv }
    }

    /// Create the writer for `writer_type`
    pub fn make(&self, writer_type: WriterType) -> Box<dyn SheetWriter> {
        match writer_type {
            WriterType::Xlsx => Box::new(XlsxSheetWriter::new()),
            WriterType::Csv => Box::new(CsvSheetWriter::csv(&self.csv)),
            WriterType::Tsv => Box::new(CsvSheetWriter::tsv(&self.csv)),
        }
    }

    /// Encode `sheet` as `writer_type`
    pub fn write(&self, writer_type: WriterType, sheet: &Sheet) -> Result<Vec<u8>> {
        self.make(writer_type).write(sheet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_returns_matching_writer() {
        let factory = WriterFactory::default();
        for writer_type in WriterType::ALL {
            assert_eq!(factory.make(writer_type).writer_type(), writer_type);
        }
    }

    #[test]
    fn test_write_csv() {
        let factory = WriterFactory::default();
        let sheet = Sheet::new().with_headings(["a", "b"]);
        assert_eq!(factory.write(WriterType::Csv, &sheet).unwrap(), b"a,b\n");
    }
}
