use crate::common::search_criteria::SearchCriteria;
use anyhow::Result;

#[trait_variant::make(CrudService: Send)]
pub trait UnsendCrudService<T> {
    async fn get(&self, id: &str) -> Result<T>;
    async fn delete(&self, id: &str) -> Result<()>;
    async fn insert(&self, id: &str, item: &T) -> Result<T>;
    async fn update(&self, id: &str, item: &T) -> Result<T>;
    /// `None` lists everything the backend returns without paging parameters.
    async fn search(&self, criteria: Option<&SearchCriteria>) -> Result<Vec<T>>;
}
