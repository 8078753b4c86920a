use anyhow::Result;
use indexmap::IndexMap;
use tokio::sync::RwLock;

use crate::common::entity::{Entity, matches_filter};
use crate::common::error::CrudError;
use crate::common::search_criteria::SearchCriteria;
use crate::traits::crud_service::CrudService;

/// Process-local store keyed by entity id, in insertion order.
pub struct MemoryCrudService<T> {
    items: RwLock<IndexMap<String, T>>,
}

impl<T: Entity> MemoryCrudService<T> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<T>) -> Self {
        let items = items.into_iter().map(|item| (item.id(), item)).collect();
        Self {
            items: RwLock::new(items),
        }
    }

    pub async fn len(&self) -> usize {
        self.items.read().await.len()
    }
}

impl<T: Entity> Default for MemoryCrudService<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found(id: &str) -> anyhow::Error {
    CrudError::NotFound { id: id.to_string() }.into()
}

impl<T: Entity> CrudService<T> for MemoryCrudService<T> {
    async fn get(&self, id: &str) -> Result<T> {
        let items = self.items.read().await;
        items.get(id).cloned().ok_or_else(|| not_found(id))
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut items = self.items.write().await;
        items.shift_remove(id).map(|_| ()).ok_or_else(|| not_found(id))
    }

    async fn insert(&self, id: &str, item: &T) -> Result<T> {
        let mut items = self.items.write().await;
        items.insert(id.to_string(), item.clone());
        log::debug!("Stored entity {}", id);
        Ok(item.clone())
    }

    async fn update(&self, id: &str, item: &T) -> Result<T> {
        let mut items = self.items.write().await;
        match items.get_mut(id) {
            Some(existing) => {
                *existing = item.clone();
                Ok(item.clone())
            }
            None => Err(not_found(id)),
        }
    }

    async fn search(&self, criteria: Option<&SearchCriteria>) -> Result<Vec<T>> {
        let items = self.items.read().await;
        let Some(criteria) = criteria else {
            return Ok(items.values().cloned().collect());
        };
        let page_size = criteria.page_size.max(1) as usize;
        Ok(items
            .values()
            .filter(|item| matches_filter(*item, &criteria.keyword))
            .skip(criteria.page_index as usize * page_size)
            .take(page_size)
            .cloned()
            .collect())
    }
}
