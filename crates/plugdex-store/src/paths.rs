//! Snapshot file naming.

use plugdex_core::{Collection, ResourceList};

/// The files kept for each collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotFile {
    Resources(ResourceList),
    /// Plugin map (`db.json`).
    Plugins,
    Markdown,
    /// Ranked plugins and tag counts for the renderer.
    PluginData,
}

impl SnapshotFile {
    const fn stem(self) -> &'static str {
        match self {
            Self::Resources(ResourceList::Scraped) => "scrape",
            Self::Resources(ResourceList::Manual) => "manual",
            Self::Resources(ResourceList::Reconciled) => "resources",
            Self::Plugins => "db",
            Self::Markdown => "markdown",
            Self::PluginData => "plugin-data",
        }
    }

    /// File name within the data directory; config files get a `-config` suffix.
    pub fn file_name(self, collection: Collection) -> String {
        match collection {
            Collection::Plugin => format!("{}.json", self.stem()),
            Collection::Config => format!("{}-config.json", self.stem()),
        }
    }
}
