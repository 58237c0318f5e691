//! On-disk envelopes: every snapshot is a single-key JSON object.

use plugdex_core::{MarkdownMap, PluginMap, Resource};
use serde::{Deserialize, Serialize};

/// `{"resources": [...]}`
#[derive(Debug, Default, Deserialize)]
pub struct ResourceFile {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

#[derive(Debug, Serialize)]
pub struct ResourceFileRef<'a> {
    pub resources: &'a [Resource],
}

/// `{"plugins": {"user/repo": {...}}}`
#[derive(Debug, Default, Deserialize)]
pub struct PluginFile {
    #[serde(default)]
    pub plugins: PluginMap,
}

#[derive(Debug, Serialize)]
pub struct PluginFileRef<'a> {
    pub plugins: &'a PluginMap,
}

/// `{"markdown": {"user/repo": "..."}}`
#[derive(Debug, Default, Deserialize)]
pub struct MarkdownFile {
    #[serde(default)]
    pub markdown: MarkdownMap,
}

#[derive(Debug, Serialize)]
pub struct MarkdownFileRef<'a> {
    pub markdown: &'a MarkdownMap,
}
