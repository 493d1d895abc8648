//! Integration tests for export resolution and delivery
//!
//! Storage calls are captured by a recording storage service so the
//! resolved arguments can be checked exactly.

use async_trait::async_trait;
use folio::adapters::storage::{QueueHandle, StorageService, StoredFile};
use folio::adapters::writer::WriterFactory;
use folio::config::Visibility;
use folio::core::{ExportDispatcher, Exportable, ExportableExt, Responsable, SheetExport};
use folio::domain::{
    DiskOptions, ExportDefaults, ExportRequest, FolioError, Result, Sheet, WriterType,
};
use http::Request;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use test_case::test_case;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Store,
    Queue,
}

struct Call {
    mode: Mode,
    export: Arc<dyn Exportable>,
    path: String,
    disk: Option<String>,
    writer_type: Option<WriterType>,
    options: DiskOptions,
}

#[derive(Default)]
struct RecordingStorage {
    calls: Mutex<Vec<Call>>,
}

impl RecordingStorage {
    fn record(
        &self,
        mode: Mode,
        export: Arc<dyn Exportable>,
        path: &str,
        disk: Option<&str>,
        writer_type: Option<WriterType>,
        options: &DiskOptions,
    ) {
        self.calls.lock().unwrap().push(Call {
            mode,
            export,
            path: path.to_string(),
            disk: disk.map(str::to_string),
            writer_type,
            options: options.clone(),
        });
    }

    fn single_call(&self) -> Call {
        let mut calls = self.calls.lock().unwrap();
        assert_eq!(calls.len(), 1, "expected exactly one storage call");
        calls.remove(0)
    }

    fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl StorageService for RecordingStorage {
    async fn store(
        &self,
        export: Arc<dyn Exportable>,
        path: &str,
        disk: Option<&str>,
        writer_type: Option<WriterType>,
        options: &DiskOptions,
    ) -> Result<StoredFile> {
        self.record(Mode::Store, export, path, disk, writer_type, options);
        Ok(StoredFile {
            disk: disk.unwrap_or("local").to_string(),
            path: path.to_string(),
            absolute_path: PathBuf::from(path),
            writer_type: writer_type.unwrap_or(WriterType::Xlsx),
            bytes: 0,
            checksum: String::new(),
            visibility: Visibility::Private,
        })
    }

    async fn queue(
        &self,
        export: Arc<dyn Exportable>,
        path: &str,
        disk: Option<&str>,
        writer_type: Option<WriterType>,
        options: &DiskOptions,
    ) -> Result<QueueHandle> {
        self.record(Mode::Queue, export, path, disk, writer_type, options);
        Ok(QueueHandle::detached(path, disk.map(str::to_string)))
    }
}

fn setup() -> (Arc<RecordingStorage>, ExportDispatcher) {
    let storage = Arc::new(RecordingStorage::default());
    let dispatcher = ExportDispatcher::new(storage.clone(), WriterFactory::default());
    (storage, dispatcher)
}

fn same_export(a: &Arc<dyn Exportable>, b: &Arc<SheetExport>) -> bool {
    std::ptr::eq(
        Arc::as_ptr(a) as *const (),
        Arc::as_ptr(b) as *const (),
    )
}

async fn deliver(
    mode: Mode,
    dispatcher: &ExportDispatcher,
    export: Arc<SheetExport>,
    request: ExportRequest,
) -> Result<()> {
    match mode {
        Mode::Store => export.store(dispatcher, request).await.map(|_| ()),
        Mode::Queue => export.queue(dispatcher, request).await.map(|_| ()),
    }
}

fn empty_export() -> SheetExport {
    SheetExport::new(Sheet::new())
}

struct NamedByMethod;

impl Exportable for NamedByMethod {
    fn sheet(&self) -> Result<Sheet> {
        Ok(Sheet::new().with_headings(["id"]))
    }

    fn file_name(&self) -> Option<String> {
        Some("name.csv".to_string())
    }
}

struct FailingExport;

impl Exportable for FailingExport {
    fn sheet(&self) -> Result<Sheet> {
        Err(FolioError::Export("query failed".to_string()))
    }
}

#[test]
fn test_needs_a_file_name_when_downloading() {
    let (_, dispatcher) = setup();

    let err = empty_export()
        .download(&dispatcher, ExportRequest::empty())
        .unwrap_err();

    assert!(matches!(err, FolioError::MissingFileName));
    assert_eq!(
        err.to_string(),
        "A filename needs to be passed in order to download the export"
    );
}

#[test]
fn test_missing_file_name_is_reported_before_generation() {
    let (_, dispatcher) = setup();

    let err = FailingExport
        .download(&dispatcher, ExportRequest::empty())
        .unwrap_err();

    assert!(matches!(err, FolioError::MissingFileName));
}

#[test_case(Mode::Store ; "store")]
#[test_case(Mode::Queue ; "queue")]
#[tokio::test]
async fn test_needs_a_file_path(mode: Mode) {
    let (storage, dispatcher) = setup();

    let err = deliver(mode, &dispatcher, Arc::new(empty_export()), ExportRequest::empty())
        .await
        .unwrap_err();

    assert!(matches!(err, FolioError::MissingFilePath));
    assert_eq!(
        err.to_string(),
        "A filepath needs to be passed in order to store the export"
    );
    assert_eq!(storage.call_count(), 0);
}

#[test]
fn test_responsable_needs_a_file_name_on_the_export() {
    let (_, dispatcher) = setup();
    let (parts, _) = Request::new(()).into_parts();

    let responsable = empty_export().into_responsable(Arc::new(dispatcher));
    let err = responsable.to_response(&parts).unwrap_err();

    assert!(matches!(err, FolioError::MissingFileName));
}

#[test]
fn test_is_responsable() {
    let (_, dispatcher) = setup();
    let (parts, _) = Request::new(()).into_parts();

    let export = empty_export().with_defaults(ExportDefaults::new().file_name("export.xlsx"));
    let response = export
        .into_responsable(Arc::new(dispatcher))
        .to_response(&parts)
        .unwrap();

    assert_eq!(response.status(), http::StatusCode::OK);
    assert_eq!(
        response.header("Content-Disposition"),
        Some("attachment; filename=export.xlsx")
    );
    assert!(!response.body().is_empty());
}

#[test]
fn test_into_response() {
    use axum::response::IntoResponse;

    let (_, dispatcher) = setup();
    let dispatcher = Arc::new(dispatcher);

    let ok = empty_export()
        .with_defaults(ExportDefaults::new().file_name("export.csv"))
        .into_responsable(dispatcher.clone())
        .into_response();
    assert_eq!(ok.status(), http::StatusCode::OK);
    assert_eq!(ok.headers()["content-disposition"], "attachment; filename=export.csv");

    let failed = empty_export().into_responsable(dispatcher).into_response();
    assert_eq!(failed.status(), http::StatusCode::INTERNAL_SERVER_ERROR);
}

#[test]
fn test_can_set_file_name_via_method() {
    let (_, dispatcher) = setup();

    let response = NamedByMethod
        .download(&dispatcher, ExportRequest::empty())
        .unwrap();

    assert_eq!(
        response.header("Content-Disposition"),
        Some("attachment; filename=name.csv")
    );
}

#[test]
fn test_can_have_customized_header() {
    let (_, dispatcher) = setup();

    let request = ExportRequest::new("name.csv")
        .writer_type(WriterType::Csv)
        .header("Content-Type", "text/csv");
    let response = empty_export().download(&dispatcher, request).unwrap();

    assert_eq!(response.header("Content-Type"), Some("text/csv"));
}

#[test]
fn test_can_set_custom_headers_in_export() {
    let (_, dispatcher) = setup();
    let (parts, _) = Request::new(()).into_parts();

    let export = empty_export().with_defaults(
        ExportDefaults::new()
            .file_name("name.csv")
            .writer_type(WriterType::Csv)
            .header("Content-Type", "text/csv"),
    );
    let response = export
        .into_responsable(Arc::new(dispatcher))
        .to_response(&parts)
        .unwrap();

    assert_eq!(response.header("Content-Type"), Some("text/csv"));
}

#[test]
fn test_can_get_raw_export_contents() {
    let (_, dispatcher) = setup();

    let contents = empty_export().raw(&dispatcher, Some(WriterType::Xlsx)).unwrap();

    assert!(!contents.is_empty());
}

#[test]
fn test_raw_uses_export_writer_type_when_not_passed() {
    let (_, dispatcher) = setup();
    let export = SheetExport::new(Sheet::new().with_headings(["id"]).with_row(["7"]))
        .with_defaults(ExportDefaults::new().writer_type(WriterType::Csv));

    assert_eq!(export.raw(&dispatcher, None).unwrap().as_ref(), b"id\n7\n");
    assert!(export
        .raw(&dispatcher, Some(WriterType::Xlsx))
        .unwrap()
        .starts_with(b"PK"));
}

#[test]
fn test_raw_requires_a_writer_type() {
    let (_, dispatcher) = setup();

    let err = empty_export().raw(&dispatcher, None).unwrap_err();

    assert_eq!(
        err.to_string(),
        "A writer type needs to be passed in order to export raw contents"
    );
}

#[test]
fn test_raw_surfaces_export_errors() {
    let (_, dispatcher) = setup();

    let err = FailingExport.raw(&dispatcher, Some(WriterType::Csv)).unwrap_err();

    assert!(matches!(err, FolioError::Export(_)));
}

#[test_case(Mode::Store ; "store")]
#[test_case(Mode::Queue ; "queue")]
#[tokio::test]
async fn test_can_have_customized_disk_options(mode: Mode) {
    let (storage, dispatcher) = setup();
    let export = Arc::new(empty_export());

    let request = ExportRequest::new("name.csv")
        .disk("s3")
        .writer_type(WriterType::Csv)
        .disk_option("visibility", "private");
    deliver(mode, &dispatcher, export.clone(), request).await.unwrap();

    let call = storage.single_call();
    assert_eq!(call.mode, mode);
    assert!(same_export(&call.export, &export));
    assert_eq!(call.path, "name.csv");
    assert_eq!(call.disk.as_deref(), Some("s3"));
    assert_eq!(call.writer_type, Some(WriterType::Csv));
    assert_eq!(call.options, DiskOptions::from([("visibility".to_string(), "private".to_string())]));
}

#[test_case(Mode::Store ; "store")]
#[test_case(Mode::Queue ; "queue")]
#[tokio::test]
async fn test_can_set_disk_options_in_export(mode: Mode) {
    let (storage, dispatcher) = setup();
    let export = Arc::new(
        empty_export().with_defaults(
            ExportDefaults::new()
                .disk("s3")
                .writer_type(WriterType::Csv)
                .disk_option("visibility", "private"),
        ),
    );

    deliver(mode, &dispatcher, export.clone(), ExportRequest::new("name.csv"))
        .await
        .unwrap();

    let call = storage.single_call();
    assert!(same_export(&call.export, &export));
    assert_eq!(call.path, "name.csv");
    assert_eq!(call.disk.as_deref(), Some("s3"));
    assert_eq!(call.writer_type, Some(WriterType::Csv));
    assert_eq!(call.options["visibility"], "private");
}

#[test_case(Mode::Store ; "store")]
#[test_case(Mode::Queue ; "queue")]
#[tokio::test]
async fn test_can_override_export_disk_options(mode: Mode) {
    let (storage, dispatcher) = setup();
    let export = Arc::new(
        empty_export().with_defaults(ExportDefaults::new().disk_option("visibility", "public")),
    );

    let request = ExportRequest::new("name.csv")
        .disk("s3")
        .writer_type(WriterType::Csv)
        .disk_option("visibility", "private");
    deliver(mode, &dispatcher, export, request).await.unwrap();

    let call = storage.single_call();
    assert_eq!(call.disk.as_deref(), Some("s3"));
    assert_eq!(call.writer_type, Some(WriterType::Csv));
    assert_eq!(call.options.len(), 1);
    assert_eq!(call.options["visibility"], "private");
}

#[test_case(Mode::Store ; "store")]
#[test_case(Mode::Queue ; "queue")]
#[tokio::test]
async fn test_can_have_empty_disk_options(mode: Mode) {
    let (storage, dispatcher) = setup();

    deliver(mode, &dispatcher, Arc::new(empty_export()), ExportRequest::new("name.csv"))
        .await
        .unwrap();

    let call = storage.single_call();
    assert_eq!(call.path, "name.csv");
    assert_eq!(call.disk, None);
    assert_eq!(call.writer_type, None);
    assert!(call.options.is_empty());
}

#[tokio::test]
async fn test_queue_returns_handle_immediately() {
    let (_, dispatcher) = setup();

    let handle = Arc::new(empty_export())
        .queue(&dispatcher, ExportRequest::new("name.csv").disk("s3"))
        .await
        .unwrap();

    assert_eq!(handle.path, "name.csv");
    assert_eq!(handle.disk.as_deref(), Some("s3"));
    assert!(!handle.is_awaitable());
}
