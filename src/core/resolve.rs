//! Configuration resolution
//!
//! Merges call-site arguments ([`ExportRequest`]) over the export object's
//! declared attributes ([`ExportDefaults`]). Precedence for every field is
//! explicit argument, then object default, then unset. Disk options are
//! taken as a whole from the first source that has them; an explicit empty
//! set wins over object defaults.
//!
//! Resolution is pure: no bytes are generated and no collaborator is called,
//! so the missing-name errors always surface before any I/O.

use crate::domain::{
    DiskOptions, ExportDefaults, ExportRequest, FolioError, HeaderMapping, ResolvedConfiguration,
    Result,
};

/// Resolve the arguments of a download
///
/// The file name comes from the request, then the object default, then
/// `file_name_method` (the export's computed name). Headers come from the
/// request, then the object default.
///
/// # Errors
///
/// Returns [`FolioError::MissingFileName`] if no source yields a name.
pub fn resolve_download<F>(
    request: &ExportRequest,
    defaults: &ExportDefaults,
    file_name_method: F,
) -> Result<ResolvedConfiguration>
where
    F: FnOnce() -> Option<String>,
{
    let file_name = non_blank(request.file_name.as_deref())
        .or_else(|| non_blank(defaults.file_name.as_deref()))
        .or_else(|| file_name_method().filter(|name| !name.trim().is_empty()))
        .ok_or(FolioError::MissingFileName)?;

    let headers: HeaderMapping = request
        .headers
        .clone()
        .or_else(|| defaults.headers.clone())
        .unwrap_or_default();

    let resolved = ResolvedConfiguration {
        file_name,
        writer_type: request.writer_type.or(defaults.writer_type),
        disk: None,
        disk_options: DiskOptions::new(),
        headers,
    };

    tracing::debug!(
        file_name = %resolved.file_name,
        writer_type = ?resolved.writer_type,
        header_count = resolved.headers.len(),
        "Resolved download configuration"
    );

    Ok(resolved)
}

/// Resolve the arguments of a store or queue call
///
/// # Errors
///
/// Returns [`FolioError::MissingFilePath`] if neither the request nor the
/// object default yields a path.
pub fn resolve_store(
    request: &ExportRequest,
    defaults: &ExportDefaults,
) -> Result<ResolvedConfiguration> {
    let file_name = non_blank(request.file_name.as_deref())
        .or_else(|| non_blank(defaults.file_name.as_deref()))
        .ok_or(FolioError::MissingFilePath)?;

    let resolved = ResolvedConfiguration {
        file_name,
        writer_type: request.writer_type.or(defaults.writer_type),
        disk: non_blank(request.disk.as_deref()).or_else(|| non_blank(defaults.disk.as_deref())),
        disk_options: request
            .disk_options
            .clone()
            .or_else(|| defaults.disk_options.clone())
            .unwrap_or_default(),
        headers: HeaderMapping::new(),
    };

    tracing::debug!(
        path = %resolved.file_name,
        disk = ?resolved.disk,
        writer_type = ?resolved.writer_type,
        options = ?resolved.disk_options,
        "Resolved store configuration"
    );

    Ok(resolved)
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}
