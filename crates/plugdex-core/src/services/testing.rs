//! In-memory repository fakes shared by service tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::{Collection, PluginData, PluginSnapshot, Resource};
use crate::ports::{PluginRepository, RepositoryError, ResourceList, ResourceRepository};

#[derive(Default)]
pub struct InMemoryResources {
    lists: Mutex<HashMap<(Collection, ResourceList), Vec<Resource>>>,
}

impl InMemoryResources {
    pub fn with_list(self, collection: Collection, list: ResourceList, resources: Vec<Resource>) -> Self {
        self.lists
            .lock()
            .unwrap()
            .insert((collection, list), resources);
        self
    }
}

#[async_trait]
impl ResourceRepository for InMemoryResources {
    async fn load(
        &self,
        collection: Collection,
        list: ResourceList,
    ) -> Result<Vec<Resource>, RepositoryError> {
        let lists = self.lists.lock().unwrap();
        match (lists.get(&(collection, list)), list) {
            (Some(resources), _) => Ok(resources.clone()),
            (None, ResourceList::Reconciled) => {
                Err(RepositoryError::NotFound(format!("{collection} resources")))
            }
            (None, _) => Ok(Vec::new()),
        }
    }

    async fn save(
        &self,
        collection: Collection,
        list: ResourceList,
        resources: &[Resource],
    ) -> Result<(), RepositoryError> {
        self.lists
            .lock()
            .unwrap()
            .insert((collection, list), resources.to_vec());
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPlugins {
    pub snapshots: Mutex<HashMap<Collection, PluginSnapshot>>,
    pub derived: Mutex<HashMap<Collection, PluginData>>,
}

#[async_trait]
impl PluginRepository for InMemoryPlugins {
    async fn load(&self, collection: Collection) -> Result<PluginSnapshot, RepositoryError> {
        Ok(self
            .snapshots
            .lock()
            .unwrap()
            .get(&collection)
            .cloned()
            .unwrap_or_default())
    }

    async fn save(
        &self,
        collection: Collection,
        snapshot: &PluginSnapshot,
    ) -> Result<(), RepositoryError> {
        self.snapshots
            .lock()
            .unwrap()
            .insert(collection, snapshot.clone());
        Ok(())
    }

    async fn save_plugin_data(
        &self,
        collection: Collection,
        data: &PluginData,
    ) -> Result<(), RepositoryError> {
        self.derived
            .lock()
            .unwrap()
            .insert(collection, data.clone());
        Ok(())
    }
}
