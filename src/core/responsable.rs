//! Exports that can be returned directly as a response
//!
//! Converting a [`ResponsableExport`] into a response is the same as calling
//! [`ExportDispatcher::download`] with no arguments: the file name and
//! headers must be declared on the export itself.

use crate::core::dispatch::ExportDispatcher;
use crate::core::exportable::Exportable;
use crate::core::response::DownloadResponse;
use crate::domain::{ExportRequest, Result};
use crate::log_error_with_context;
use axum::response::{IntoResponse, Response};
use http::request::Parts;
use http::StatusCode;
use std::sync::Arc;

/// A value convertible into a response given the inbound request
pub trait Responsable {
    /// Build the response for `request`
    ///
    /// # Errors
    ///
    /// Returns the error that prevented the response from being built.
    fn to_response(&self, request: &Parts) -> Result<DownloadResponse>;
}

/// An export paired with the dispatcher that delivers it
pub struct ResponsableExport<E> {
    export: E,
    dispatcher: Arc<ExportDispatcher>,
}

impl<E: Exportable> ResponsableExport<E> {
    /// Pair `export` with `dispatcher`
    pub fn new(export: E, dispatcher: Arc<ExportDispatcher>) -> Self {
        Self { export, dispatcher }
    }

    /// The wrapped export
    pub fn export(&self) -> &E {
        &self.export
    }
}

impl<E: Exportable> Responsable for ResponsableExport<E> {
    fn to_response(&self, request: &Parts) -> Result<DownloadResponse> {
        tracing::debug!(method = %request.method, uri = %request.uri, "Responding with export download");
        self.dispatcher.download(&self.export, ExportRequest::empty())
    }
}

impl<E: Exportable> IntoResponse for ResponsableExport<E> {
    fn into_response(self) -> Response {
        match self.dispatcher.download(&self.export, ExportRequest::empty()) {
            Ok(download) => download.into_response(),
            Err(e) => {
                log_error_with_context!(&e, "Failed to build export response");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}
