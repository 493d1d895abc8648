//! Download response adapter
//!
//! Wraps generated bytes (or a file on disk) into a binary attachment
//! response. Computed headers are set first; custom headers are applied
//! last and replace computed ones with the same (case-insensitive) name.

use crate::domain::{FolioError, HeaderMapping, Result, WriterType};
use axum::body::Body;
use axum::response::{IntoResponse, Response};
use bytes::Bytes;
use http::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_DISPOSITION, CONTENT_LENGTH, CONTENT_TYPE};
use http::StatusCode;
use std::path::Path;

const OCTET_STREAM: &str = "application/octet-stream";

/// A binary file download
#[derive(Debug, Clone)]
pub struct DownloadResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
    file_name: String,
}

impl DownloadResponse {
    /// Build a download from generated bytes
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::InvalidHeader`] if the file name or a custom
    /// header cannot be represented as an HTTP header.
    pub fn from_bytes(
        body: impl Into<Bytes>,
        file_name: &str,
        writer_type: Option<WriterType>,
        custom_headers: &HeaderMapping,
    ) -> Result<Self> {
        let body = body.into();
        let mut headers = HeaderMap::new();

        let content_type = writer_type.map(|t| t.content_type()).unwrap_or(OCTET_STREAM);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
        headers.insert(CONTENT_LENGTH, HeaderValue::from(body.len()));
        headers.insert(CONTENT_DISPOSITION, content_disposition(file_name)?);

        for (name, value) in custom_headers {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| FolioError::InvalidHeader(format!("{name}: {e}")))?;
            let header_value = HeaderValue::from_bytes(value.as_bytes())
                .map_err(|e| FolioError::InvalidHeader(format!("{name}: {e}")))?;
            headers.insert(header_name, header_value);
        }

        Ok(Self {
            status: StatusCode::OK,
            headers,
            body,
            file_name: file_name.to_string(),
        })
    }

    /// Build a download from a file on disk
    ///
    /// The attachment name defaults to the file's own name and the content
    /// type is detected from its extension.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or
    /// [`FolioError::InvalidHeader`] as for [`DownloadResponse::from_bytes`].
    pub async fn from_file(
        path: impl AsRef<Path>,
        file_name: Option<&str>,
        custom_headers: &HeaderMapping,
    ) -> Result<Self> {
        let path = path.as_ref();
        let name = match file_name {
            Some(name) => name.to_string(),
            None => path
                .file_name()
                .and_then(|n| n.to_str())
                .map(str::to_string)
                .ok_or(FolioError::MissingFileName)?,
        };

        let body = tokio::fs::read(path).await?;
        Self::from_bytes(body, &name, WriterType::from_path(&name), custom_headers)
    }

    /// Response status
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// All response headers
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// A single header as text
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Response body
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Attachment file name
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Convert into a plain `http` response
    pub fn into_http(self) -> http::Response<Bytes> {
        let mut response = http::Response::new(self.body);
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

impl IntoResponse for DownloadResponse {
    fn into_response(self) -> Response {
        let mut response = Response::new(Body::from(self.body));
        *response.status_mut() = self.status;
        *response.headers_mut() = self.headers;
        response
    }
}

fn content_disposition(file_name: &str) -> Result<HeaderValue> {
    HeaderValue::from_bytes(format!("attachment; filename={file_name}").as_bytes())
        .map_err(|e| FolioError::InvalidHeader(format!("Content-Disposition: {e}")))
}
