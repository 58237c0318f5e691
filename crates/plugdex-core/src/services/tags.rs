//! Tag derivation and plugin ranking.

use std::cmp::Reverse;

use crate::domain::{Plugin, PluginData, PluginMap, Tag, TagMap};

/// Rank plugins by stars and count how many plugins carry each tag.
///
/// Pure recomputation over the whole map; nothing is cached between calls.
/// Equal star counts fall back to identity key order and equal tag counts to
/// tag id order, so the output is fully determined by the input.
pub fn derive_plugin_data(plugins: &PluginMap) -> PluginData {
    let mut ranked: Vec<Plugin> = plugins.values().cloned().collect();
    ranked.sort_by(|a, b| b.stars.cmp(&a.stars).then_with(|| a.id.cmp(&b.id)));

    let tag_db = count_tags(&ranked);

    let mut tags: Vec<Tag> = tag_db.values().cloned().collect();
    tags.sort_by_key(|tag| (Reverse(tag.count), tag.id.clone()));

    PluginData {
        plugins: ranked,
        tags,
        tag_db,
    }
}

fn count_tags(plugins: &[Plugin]) -> TagMap {
    let mut tag_db = TagMap::new();
    for tag in plugins.iter().flat_map(|plugin| &plugin.tags) {
        tag_db
            .entry(tag.clone())
            .or_insert_with(|| Tag {
                id: tag.clone(),
                count: 0,
            })
            .count += 1;
    }
    tag_db
}
