//! JSON-file implementation of the `ResourceRepository` and `PluginRepository`
//! traits.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tracing::debug;

use plugdex_core::{
    Collection, PluginData, PluginRepository, PluginSnapshot, RepositoryError, Resource,
    ResourceList, ResourceRepository,
};

use crate::paths::SnapshotFile;
use crate::wire::{
    MarkdownFile, MarkdownFileRef, PluginFile, PluginFileRef, ResourceFile, ResourceFileRef,
};

/// Output layout of a snapshot file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Two-space indented; for files people read and diff.
    Pretty,
    /// Single line; the README store is large and never read by hand.
    Compact,
}

/// Snapshot store rooted at a data directory.
///
/// The directory is created on first write.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    data_dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Full path of a snapshot file.
    pub fn path(&self, collection: Collection, file: SnapshotFile) -> PathBuf {
        self.data_dir.join(file.file_name(collection))
    }

    /// Read and decode a file, `None` if it does not exist.
    async fn read_optional<T: DeserializeOwned>(
        &self,
        path: &Path,
    ) -> Result<Option<T>, RepositoryError> {
        let text = match fs::read_to_string(path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(RepositoryError::Storage(format!(
                    "Failed to read {}: {e}",
                    path.display()
                )));
            }
        };

        serde_json::from_str(&text).map(Some).map_err(|e| {
            RepositoryError::Serialization(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Encode and write a file via temp file + rename.
    async fn write<T: Serialize + Sync>(
        &self,
        path: &Path,
        value: &T,
        layout: Layout,
    ) -> Result<(), RepositoryError> {
        let json = match layout {
            Layout::Pretty => serde_json::to_string_pretty(value),
            Layout::Compact => serde_json::to_string(value),
        }
        .map_err(|e| {
            RepositoryError::Serialization(format!("Failed to encode {}: {e}", path.display()))
        })?;

        let storage = |e: std::io::Error| {
            RepositoryError::Storage(format!("Failed to write {}: {e}", path.display()))
        };

        fs::create_dir_all(&self.data_dir).await.map_err(storage)?;
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, json).await.map_err(storage)?;
        fs::rename(&temp_path, path).await.map_err(storage)?;

        debug!(path = %path.display(), "Wrote snapshot");
        Ok(())
    }
}

#[async_trait]
impl ResourceRepository for JsonFileStore {
    async fn load(
        &self,
        collection: Collection,
        list: ResourceList,
    ) -> Result<Vec<Resource>, RepositoryError> {
        let path = self.path(collection, SnapshotFile::Resources(list));
        match self.read_optional::<ResourceFile>(&path).await? {
            Some(file) => Ok(file.resources),
            None if list == ResourceList::Reconciled => Err(RepositoryError::NotFound(format!(
                "{} (run `plugdex patch` first)",
                path.display()
            ))),
            None => Ok(Vec::new()),
        }
    }

    async fn save(
        &self,
        collection: Collection,
        list: ResourceList,
        resources: &[Resource],
    ) -> Result<(), RepositoryError> {
        let path = self.path(collection, SnapshotFile::Resources(list));
        self.write(&path, &ResourceFileRef { resources }, Layout::Pretty)
            .await
    }
}

#[async_trait]
impl PluginRepository for JsonFileStore {
    async fn load(&self, collection: Collection) -> Result<PluginSnapshot, RepositoryError> {
        let plugins: PluginFile = self
            .read_optional(&self.path(collection, SnapshotFile::Plugins))
            .await?
            .unwrap_or_default();
        let markdown: MarkdownFile = self
            .read_optional(&self.path(collection, SnapshotFile::Markdown))
            .await?
            .unwrap_or_default();

        Ok(PluginSnapshot {
            plugins: plugins.plugins,
            markdown: markdown.markdown,
        })
    }

    /// Writes `db.json` then the Markdown file. Each file is replaced
    /// atomically, the pair is not.
    async fn save(
        &self,
        collection: Collection,
        snapshot: &PluginSnapshot,
    ) -> Result<(), RepositoryError> {
        self.write(
            &self.path(collection, SnapshotFile::Plugins),
            &PluginFileRef {
                plugins: &snapshot.plugins,
            },
            Layout::Pretty,
        )
        .await?;
        self.write(
            &self.path(collection, SnapshotFile::Markdown),
            &MarkdownFileRef {
                markdown: &snapshot.markdown,
            },
            Layout::Compact,
        )
        .await
    }

    async fn save_plugin_data(
        &self,
        collection: Collection,
        data: &PluginData,
    ) -> Result<(), RepositoryError> {
        self.write(
            &self.path(collection, SnapshotFile::PluginData),
            data,
            Layout::Compact,
        )
        .await
    }
}
