pub mod job_service;
pub mod topic_service;

use std::sync::Arc;

use anyhow::Result;

use crate::common::config::FilterMode;
use crate::common::entity::Entity;
use crate::common::search_criteria::SearchCriteria;
use crate::datasource::DataSource;
use crate::storage::crud_service_impl::CrudServiceImpl;
use crate::traits::crud_service::CrudService;

/// A CRUD backend bound to one entity type and endpoint.
pub struct EntityService<T: Entity> {
    crud: Arc<CrudServiceImpl<T>>,
    endpoint: String,
    filter_mode: FilterMode,
    page_size: u32,
}

impl<T: Entity> EntityService<T> {
    pub fn new(
        crud: CrudServiceImpl<T>,
        endpoint: impl Into<String>,
        filter_mode: FilterMode,
        page_size: u32,
    ) -> Self {
        Self {
            crud: Arc::new(crud),
            endpoint: endpoint.into(),
            filter_mode,
            page_size,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub async fn get(&self, id: &str) -> Result<T> {
        log::debug!("get {}/{}", self.endpoint, id);
        self.crud.get(id).await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        log::debug!("delete {}/{}", self.endpoint, id);
        self.crud.delete(id).await
    }

    /// Creates or replaces the entity under its own id.
    pub async fn insert(&self, item: &T) -> Result<T> {
        let id = item.id();
        log::debug!("insert {}/{}", self.endpoint, id);
        self.crud.insert(&id, item).await
    }

    pub async fn update(&self, item: &T) -> Result<T> {
        let id = item.id();
        log::debug!("update {}/{}", self.endpoint, id);
        self.crud.update(&id, item).await
    }

    pub async fn search(&self, criteria: Option<&SearchCriteria>) -> Result<Vec<T>> {
        log::debug!("search {} {:?}", self.endpoint, criteria);
        self.crud.search(criteria).await
    }

    pub fn data_source(&self) -> DataSource<T> {
        DataSource::new(Arc::clone(&self.crud), self.filter_mode, self.page_size)
    }
}
