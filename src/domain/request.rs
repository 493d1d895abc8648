//! Per-call export arguments and object-level defaults
//!
//! [`ExportRequest`] carries what the caller passed, [`ExportDefaults`] what the
//! export object declares about itself. Both use `None` for "not given" so the
//! resolver can tell an explicit empty option set from an absent one.

use super::writer_type::WriterType;
use std::collections::BTreeMap;

/// Backend-specific disk settings such as `visibility`
pub type DiskOptions = BTreeMap<String, String>;

/// Response headers keyed by header name
pub type HeaderMapping = BTreeMap<String, String>;

/// Arguments given at the call site
///
/// # Examples
///
/// ```
/// use folio::domain::{ExportRequest, WriterType};
///
/// let request = ExportRequest::new("name.csv")
///     .disk("s3")
///     .writer_type(WriterType::Csv)
///     .disk_option("visibility", "private");
///
/// assert_eq!(request.file_name.as_deref(), Some("name.csv"));
/// assert_eq!(request.disk_options.unwrap()["visibility"], "private");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    /// File name (download) or file path (store, queue)
    pub file_name: Option<String>,

    /// Output format
    pub writer_type: Option<WriterType>,

    /// Named disk
    pub disk: Option<String>,

    /// Disk options; `Some(empty)` is an explicit empty set
    pub disk_options: Option<DiskOptions>,

    /// Extra response headers (download only)
    pub headers: Option<HeaderMapping>,
}

impl ExportRequest {
    /// Request with an explicit file name or path
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: Some(file_name.into()),
            ..Default::default()
        }
    }

    /// Request with no arguments at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sets the writer type
    pub fn writer_type(mut self, writer_type: WriterType) -> Self {
        self.writer_type = Some(writer_type);
        self
    }

    /// Sets the disk name
    pub fn disk(mut self, disk: impl Into<String>) -> Self {
        self.disk = Some(disk.into());
        self
    }

    /// Replaces the disk options with `options`
    pub fn disk_options(mut self, options: DiskOptions) -> Self {
        self.disk_options = Some(options);
        self
    }

    /// Adds a single disk option
    pub fn disk_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.disk_options
            .get_or_insert_with(DiskOptions::new)
            .insert(key.into(), value.into());
        self
    }

    /// Replaces the response headers with `headers`
    pub fn headers(mut self, headers: HeaderMapping) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Adds a single response header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HeaderMapping::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Attributes an export object may declare about itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportDefaults {
    /// Default file name or path
    pub file_name: Option<String>,

    /// Default output format
    pub writer_type: Option<WriterType>,

    /// Default disk
    pub disk: Option<String>,

    /// Default disk options
    pub disk_options: Option<DiskOptions>,

    /// Default response headers
    pub headers: Option<HeaderMapping>,
}

impl ExportDefaults {
    /// Defaults with every attribute unset
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default file name
    pub fn file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = Some(file_name.into());
        self
    }

    /// Sets the default writer type
    pub fn writer_type(mut self, writer_type: WriterType) -> Self {
        self.writer_type = Some(writer_type);
        self
    }

    /// Sets the default disk
    pub fn disk(mut self, disk: impl Into<String>) -> Self {
        self.disk = Some(disk.into());
        self
    }

    /// Adds a default disk option
    pub fn disk_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.disk_options
            .get_or_insert_with(DiskOptions::new)
            .insert(key.into(), value.into());
        self
    }

    /// Adds a default response header
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HeaderMapping::new)
            .insert(name.into(), value.into());
        self
    }
}

/// Call-site arguments merged over object defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfiguration {
    /// File name (download) or path (store, queue)
    pub file_name: String,

    /// Output format; `None` lets the collaborator infer it from the extension
    pub writer_type: Option<WriterType>,

    /// Disk; `None` selects the default disk
    pub disk: Option<String>,

    /// Disk options, empty when nothing was given
    pub disk_options: DiskOptions,

    /// Custom response headers, empty when nothing was given
    pub headers: HeaderMapping,
}
