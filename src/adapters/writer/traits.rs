//! Sheet writer trait

use crate::domain::{Result, Sheet, WriterType};

/// Encodes a [`Sheet`] into file bytes of one writer type
///
/// Implementations are pure: they read the sheet and return the encoded
/// bytes without touching the filesystem.
pub trait SheetWriter: Send + Sync {
    /// Writer type produced by this writer
    fn writer_type(&self) -> WriterType;

    /// Encode the sheet
    ///
    /// # Errors
    ///
    /// Returns a writer error if the sheet cannot be encoded.
    fn write(&self, sheet: &Sheet) -> Result<Vec<u8>>;
}
