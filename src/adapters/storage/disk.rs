//! Local disk storage
//!
//! Each configured disk is a root directory. Paths are always relative to
//! the disk root and may not escape it. Files are written to a temporary
//! sibling first and renamed into place, so readers never observe a
//! partially written export.

use super::models::{QueueHandle, StoredFile};
use super::traits::StorageService;
use crate::adapters::writer::WriterFactory;
use crate::config::{DiskConfig, FilesystemConfig, FolioConfig, Visibility};
use crate::core::exportable::Exportable;
use crate::domain::{DiskOptions, FolioError, Result, StorageError, WriterType};
use async_trait::async_trait;
use sha2::{Digest, Sha256};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use uuid::Uuid;

const VISIBILITY_OPTION: &str = "visibility";

/// [`StorageService`] backed by named local directories
#[derive(Debug, Clone)]
pub struct DiskStorage {
    filesystem: FilesystemConfig,
    writers: WriterFactory,
}

impl DiskStorage {
    /// Storage over the given disks, encoding with `writers`
    pub fn new(filesystem: FilesystemConfig, writers: WriterFactory) -> Self {
        Self {
            filesystem,
            writers,
        }
    }

    /// Storage built from the full configuration
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(
            config.filesystem.clone(),
            WriterFactory::new(config.csv.clone()),
        )
    }

    /// Look up a disk by name, or the default disk when `name` is `None`
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::DiskNotFound`] if the disk is not configured.
    pub fn disk(&self, name: Option<&str>) -> Result<(&str, &DiskConfig)> {
        let name = name.unwrap_or(&self.filesystem.default_disk);
        self.filesystem
            .disks
            .get_key_value(name)
            .map(|(name, disk)| (name.as_str(), disk))
            .ok_or_else(|| StorageError::DiskNotFound(name.to_string()).into())
    }

    /// Join `path` onto `root`, refusing anything that would leave it
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::InvalidPath`] for empty or absolute paths and
    /// for paths containing `..`.
    pub fn resolve_path(root: &Path, path: &str) -> Result<PathBuf> {
        if path.trim().is_empty() {
            return Err(StorageError::InvalidPath("path is empty".to_string()).into());
        }

        let relative = Path::new(path);
        let mut resolved = root.to_path_buf();
        for component in relative.components() {
            match component {
                Component::Normal(part) => resolved.push(part),
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(StorageError::InvalidPath(format!(
                        "'{path}' must not contain '..'"
                    ))
                    .into())
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(StorageError::InvalidPath(format!(
                        "'{path}' must be relative to the disk root"
                    ))
                    .into())
                }
            }
        }

        if resolved == root {
            return Err(StorageError::InvalidPath(format!("'{path}' does not name a file")).into());
        }

        Ok(resolved)
    }

    fn visibility(disk: &DiskConfig, options: &DiskOptions) -> Result<Visibility> {
        for key in options.keys().filter(|k| k.as_str() != VISIBILITY_OPTION) {
            tracing::debug!(option = %key, "Ignoring disk option not supported by local disks");
        }

        match options.get(VISIBILITY_OPTION) {
            Some(value) => Visibility::parse(value).ok_or_else(|| {
                StorageError::InvalidOption {
                    key: VISIBILITY_OPTION.to_string(),
                    value: value.clone(),
                }
                .into()
            }),
            None => Ok(disk.visibility),
        }
    }

    async fn write_atomic(target: &Path, contents: &[u8], visibility: Visibility) -> Result<()> {
        let write_failed = |e: std::io::Error| -> FolioError {
            StorageError::WriteFailed {
                path: target.display().to_string(),
                message: e.to_string(),
            }
            .into()
        };

        let parent = target.parent().ok_or_else(|| {
            FolioError::from(StorageError::InvalidPath(format!(
                "'{}' has no parent directory",
                target.display()
            )))
        })?;
        tokio::fs::create_dir_all(parent).await.map_err(write_failed)?;

        let file_name = target
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let temp = parent.join(format!(".{file_name}.{}.tmp", Uuid::new_v4().simple()));

        tokio::fs::write(&temp, contents).await.map_err(write_failed)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let permissions = std::fs::Permissions::from_mode(visibility.file_mode());
            if let Err(e) = tokio::fs::set_permissions(&temp, permissions).await {
                let _ = tokio::fs::remove_file(&temp).await;
                return Err(write_failed(e));
            }
        }
        #[cfg(not(unix))]
        let _ = visibility;

        if let Err(e) = tokio::fs::rename(&temp, target).await {
            let _ = tokio::fs::remove_file(&temp).await;
            return Err(write_failed(e));
        }

        Ok(())
    }
}

#[async_trait]
impl StorageService for DiskStorage {
    async fn store(
        &self,
        export: Arc<dyn Exportable>,
        path: &str,
        disk: Option<&str>,
        writer_type: Option<WriterType>,
        options: &DiskOptions,
    ) -> Result<StoredFile> {
        let start = Instant::now();
        let (disk_name, disk_config) = self.disk(disk)?;
        let target = Self::resolve_path(Path::new(&disk_config.root), path)?;
        let writer_type = writer_type
            .or_else(|| WriterType::from_path(path))
            .ok_or_else(|| FolioError::NoTypeDetected(path.to_string()))?;
        let visibility = Self::visibility(disk_config, options)?;

        tracing::debug!(
            disk = disk_name,
            path,
            writer_type = %writer_type,
            "Generating export for disk"
        );

        let writers = self.writers.clone();
        let contents = tokio::task::spawn_blocking(move || {
            let sheet = export.sheet()?;
            writers.write(writer_type, &sheet)
        })
        .await
        .map_err(|e| FolioError::Export(format!("Export generation did not complete: {e}")))??;

        Self::write_atomic(&target, &contents, visibility).await?;

        let stored = StoredFile {
            disk: disk_name.to_string(),
            path: path.to_string(),
            absolute_path: target,
            writer_type,
            bytes: contents.len() as u64,
            checksum: format!("{:x}", Sha256::digest(&contents)),
            visibility,
        };

        tracing::info!(
            disk = %stored.disk,
            path = %stored.path,
            bytes = stored.bytes,
            duration_ms = start.elapsed().as_millis() as u64,
            "Stored export"
        );

        Ok(stored)
    }

    async fn queue(
        &self,
        export: Arc<dyn Exportable>,
        path: &str,
        disk: Option<&str>,
        writer_type: Option<WriterType>,
        options: &DiskOptions,
    ) -> Result<QueueHandle> {
        let storage = self.clone();
        let job_path = path.to_string();
        let job_disk = disk.map(str::to_string);
        let options = options.clone();

        let job = tokio::spawn(async move {
            storage
                .store(export, &job_path, job_disk.as_deref(), writer_type, &options)
                .await
        });

        let handle = QueueHandle::spawned(path, disk.map(str::to_string), job);
        tracing::info!(job_id = %handle.id, path, disk = ?disk, "Queued export");
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_at(root: &Path) -> DiskStorage {
        let mut filesystem = FilesystemConfig::default();
        filesystem.disks.insert(
            "local".to_string(),
            DiskConfig {
                root: root.display().to_string(),
                visibility: Visibility::Private,
            },
        );
        DiskStorage::new(filesystem, WriterFactory::default())
    }

    #[test]
    fn test_resolve_path_rejects_traversal() {
        let root = Path::new("/srv/exports");
        assert!(DiskStorage::resolve_path(root, "../etc/passwd").is_err());
        assert!(DiskStorage::resolve_path(root, "a/../../b.csv").is_err());
        assert!(DiskStorage::resolve_path(root, "/etc/passwd").is_err());
        assert!(DiskStorage::resolve_path(root, "").is_err());
        assert!(DiskStorage::resolve_path(root, ".").is_err());
    }

    #[test]
    fn test_resolve_path_joins_relative() {
        let root = Path::new("/srv/exports");
        assert_eq!(
            DiskStorage::resolve_path(root, "./reports/users.csv").unwrap(),
            PathBuf::from("/srv/exports/reports/users.csv")
        );
    }

    #[test]
    fn test_unknown_disk() {
        let storage = storage_at(Path::new("/tmp"));
        let err = storage.disk(Some("s3")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Storage error: Disk [s3] does not have a configured driver"
        );
    }

    #[test]
    fn test_default_disk() {
        let storage = storage_at(Path::new("/tmp"));
        let (name, _) = storage.disk(None).unwrap();
        assert_eq!(name, "local");
    }

    #[test]
    fn test_visibility_option() {
        let disk = DiskConfig {
            root: "/tmp".to_string(),
            visibility: Visibility::Private,
        };

        let mut options = DiskOptions::new();
        assert_eq!(DiskStorage::visibility(&disk, &options).unwrap(), Visibility::Private);

        options.insert("visibility".to_string(), "public".to_string());
        assert_eq!(DiskStorage::visibility(&disk, &options).unwrap(), Visibility::Public);

        options.insert("visibility".to_string(), "hidden".to_string());
        assert!(matches!(
            DiskStorage::visibility(&disk, &options).unwrap_err(),
            FolioError::Storage(StorageError::InvalidOption { .. })
        ));
    }

    #[tokio::test]
    async fn test_write_atomic_leaves_no_temp_files() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join("nested/out.csv");

        DiskStorage::write_atomic(&target, b"a,b\n", Visibility::Public)
            .await
            .unwrap();

        assert_eq!(std::fs::read(&target).unwrap(), b"a,b\n");
        let entries: Vec<_> = std::fs::read_dir(target.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries.len(), 1);
    }
}
