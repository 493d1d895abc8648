//! Result type alias for Folio

use super::errors::FolioError;

/// Result type alias for Folio operations
///
/// # Examples
///
/// ```
/// use folio::domain::result::Result;
/// use folio::domain::errors::FolioError;
///
/// fn resolve_name(name: Option<&str>) -> Result<String> {
///     name.map(str::to_string).ok_or(FolioError::MissingFileName)
/// }
///
/// assert!(resolve_name(None).is_err());
/// ```
pub type Result<T> = std::result::Result<T, FolioError>;
