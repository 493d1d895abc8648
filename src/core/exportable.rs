//! Export capability
//!
//! Any type that can produce a [`Sheet`] is an export. Types declare their
//! own defaults (file name, writer type, disk, options, headers) through
//! [`Exportable::defaults`] instead of carrying optional fields that are
//! probed at runtime.

use crate::adapters::storage::{QueueHandle, StoredFile};
use crate::core::dispatch::ExportDispatcher;
use crate::core::response::DownloadResponse;
use crate::core::responsable::ResponsableExport;
use crate::domain::{ExportDefaults, ExportRequest, Result, Sheet, WriterType};
use async_trait::async_trait;
use bytes::Bytes;
use std::sync::Arc;

/// A tabular data producer that can be delivered as a file
///
/// # Examples
///
/// ```
/// use folio::core::Exportable;
/// use folio::domain::{ExportDefaults, Result, Sheet, WriterType};
///
/// struct UsersExport;
///
/// impl Exportable for UsersExport {
///     fn sheet(&self) -> Result<Sheet> {
///         Ok(Sheet::new().with_headings(["id", "email"]).with_row(["1", "a@example.com"]))
///     }
///
///     fn defaults(&self) -> ExportDefaults {
///         ExportDefaults::new().file_name("users.csv").writer_type(WriterType::Csv)
///     }
/// }
/// ```
pub trait Exportable: Send + Sync {
    /// Produce the data to write
    ///
    /// # Errors
    ///
    /// Returns an error if the data cannot be produced.
    fn sheet(&self) -> Result<Sheet>;

    /// Attributes declared on the export itself
    fn defaults(&self) -> ExportDefaults {
        ExportDefaults::default()
    }

    /// Computed download file name, consulted after [`Exportable::defaults`]
    fn file_name(&self) -> Option<String> {
        None
    }
}

impl<T: Exportable + ?Sized> Exportable for Arc<T> {
    fn sheet(&self) -> Result<Sheet> {
        (**self).sheet()
    }

    fn defaults(&self) -> ExportDefaults {
        (**self).defaults()
    }

    fn file_name(&self) -> Option<String> {
        (**self).file_name()
    }
}

/// In-memory export wrapping a ready [`Sheet`]
#[derive(Debug, Clone, Default)]
pub struct SheetExport {
    sheet: Sheet,
    defaults: ExportDefaults,
}

impl SheetExport {
    /// Export of `sheet` with no defaults
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            defaults: ExportDefaults::default(),
        }
    }

    /// Attach object-level defaults
    pub fn with_defaults(mut self, defaults: ExportDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

impl Exportable for SheetExport {
    fn sheet(&self) -> Result<Sheet> {
        Ok(self.sheet.clone())
    }

    fn defaults(&self) -> ExportDefaults {
        self.defaults.clone()
    }
}

/// Delivery shorthands available on every export
#[async_trait]
pub trait ExportableExt: Exportable + Sized + 'static {
    /// Same as [`ExportDispatcher::download`]
    fn download(&self, dispatcher: &ExportDispatcher, request: ExportRequest) -> Result<DownloadResponse> {
        dispatcher.download(self, request)
    }

    /// Same as [`ExportDispatcher::raw`]
    fn raw(&self, dispatcher: &ExportDispatcher, writer_type: Option<WriterType>) -> Result<Bytes> {
        dispatcher.raw(self, writer_type)
    }

    /// Same as [`ExportDispatcher::store`]
    async fn store(self: Arc<Self>, dispatcher: &ExportDispatcher, request: ExportRequest) -> Result<StoredFile> {
        dispatcher.store(self, request).await
    }

    /// Same as [`ExportDispatcher::queue`]
    async fn queue(self: Arc<Self>, dispatcher: &ExportDispatcher, request: ExportRequest) -> Result<QueueHandle> {
        dispatcher.queue(self, request).await
    }

    /// Pair the export with a dispatcher so it can be returned as a response
    fn into_responsable(self, dispatcher: Arc<ExportDispatcher>) -> ResponsableExport<Self> {
        ResponsableExport::new(self, dispatcher)
    }
}

impl<T: Exportable + Sized + 'static> ExportableExt for T {}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl Exportable for Bare {
        fn sheet(&self) -> Result<Sheet> {
            Ok(Sheet::new())
        }
    }

    #[test]
    fn test_default_attributes_are_unset() {
        assert_eq!(Bare.defaults(), ExportDefaults::default());
        assert!(Bare.file_name().is_none());
    }

    #[test]
    fn test_sheet_export() {
        let export = SheetExport::new(Sheet::new().with_headings(["a"]))
            .with_defaults(ExportDefaults::new().file_name("a.csv"));

        assert_eq!(export.sheet().unwrap().headings, vec!["a"]);
        assert_eq!(export.defaults().file_name.as_deref(), Some("a.csv"));
    }

    #[test]
    fn test_arc_delegates() {
        let export = Arc::new(SheetExport::new(Sheet::new()).with_defaults(
            ExportDefaults::new().disk("s3"),
        ));
        assert_eq!(export.defaults().disk.as_deref(), Some("s3"));
    }
}
