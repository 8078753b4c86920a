use crate::common::entity::Entity;
use crate::common::search_criteria::SearchCriteria;
use crate::rest::rest_crud_service::RestCrudService;
use crate::storage::memory::memory_crud_service::MemoryCrudService;
use crate::traits::crud_service::CrudService;
use anyhow::Result;

pub enum CrudServiceImpl<T> {
    Rest(RestCrudService<T>),
    Memory(MemoryCrudService<T>),
}

impl<T: Entity> CrudService<T> for CrudServiceImpl<T> {
    async fn get(&self, id: &str) -> Result<T> {
        match self {
            CrudServiceImpl::Rest(r) => r.get(id).await,
            CrudServiceImpl::Memory(m) => m.get(id).await,
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        match self {
            CrudServiceImpl::Rest(r) => r.delete(id).await,
            CrudServiceImpl::Memory(m) => m.delete(id).await,
        }
    }

    async fn insert(&self, id: &str, item: &T) -> Result<T> {
        match self {
            CrudServiceImpl::Rest(r) => r.insert(id, item).await,
            CrudServiceImpl::Memory(m) => m.insert(id, item).await,
        }
    }

    async fn update(&self, id: &str, item: &T) -> Result<T> {
        match self {
            CrudServiceImpl::Rest(r) => r.update(id, item).await,
            CrudServiceImpl::Memory(m) => m.update(id, item).await,
        }
    }

    async fn search(&self, criteria: Option<&SearchCriteria>) -> Result<Vec<T>> {
        match self {
            CrudServiceImpl::Rest(r) => r.search(criteria).await,
            CrudServiceImpl::Memory(m) => m.search(criteria).await,
        }
    }
}
