use std::marker::PhantomData;

use anyhow::Result;
use serde_json::Value;

use crate::common::entity::Entity;
use crate::common::error::RestError;
use crate::common::search_criteria::SearchCriteria;
use crate::rest::rest_service::{RestResponse, RestService};
use crate::traits::crud_service::CrudService;

pub struct RestCrudService<T> {
    rest: RestService,
    _entity: PhantomData<fn() -> T>,
}

impl<T: Entity> RestCrudService<T> {
    pub fn new(rest: RestService) -> Self {
        Self {
            rest,
            _entity: PhantomData,
        }
    }

    pub fn rest(&self) -> &RestService {
        &self.rest
    }

    fn item_or_echo(response: &RestResponse, item: &T) -> Result<T> {
        if response.is_empty() {
            Ok(item.clone())
        } else {
            response.json()
        }
    }

    fn decode_list(response: &RestResponse) -> Result<Vec<T>> {
        let value: Value = response.json()?;
        let list = match value {
            Value::Array(_) => value,
            Value::Object(mut map) => map.remove(T::collection_key()).ok_or_else(|| {
                RestError::InvalidResponse {
                    url: response.url.clone(),
                    reason: format!("missing '{}' collection", T::collection_key()),
                }
            })?,
            other => {
                return Err(RestError::InvalidResponse {
                    url: response.url.clone(),
                    reason: format!("expected a list, got {}", other),
                }
                .into());
            }
        };
        Ok(serde_json::from_value(list)?)
    }
}

impl<T: Entity> CrudService<T> for RestCrudService<T> {
    async fn get(&self, id: &str) -> Result<T> {
        self.rest.get(id).await?.json()
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.rest.delete(id).await?;
        Ok(())
    }

    async fn insert(&self, id: &str, item: &T) -> Result<T> {
        let response = self.rest.save(id, item).await?;
        Self::item_or_echo(&response, item)
    }

    async fn update(&self, id: &str, item: &T) -> Result<T> {
        let response = self.rest.update(id, item).await?;
        Self::item_or_echo(&response, item)
    }

    async fn search(&self, criteria: Option<&SearchCriteria>) -> Result<Vec<T>> {
        let response = self.rest.search(criteria).await?;
        Self::decode_list(&response)
    }
}
