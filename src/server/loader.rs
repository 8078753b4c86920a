use crate::common::config::{BackendType, ConsoleConfig};
use crate::common::entity::Entity;
use crate::rest::{rest_crud_service::RestCrudService, rest_service::RestService};
use crate::storage::{
    crud_service_impl::CrudServiceImpl,
    memory::memory_crud_service::MemoryCrudService,
};
use anyhow::Result;

/// Builds the configured backend for one entity endpoint.
///
/// `samples` seed the memory backend when `seed_sample_data` is set.
pub fn load_crud_service<T: Entity>(
    console_config: &ConsoleConfig,
    endpoint: &str,
    samples: Vec<T>,
) -> Result<CrudServiceImpl<T>> {
    let crud_service = match console_config.crud_backend {
        BackendType::Rest => {
            log::debug!("Using REST backend at {}", endpoint);
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(anyhow::anyhow!("Endpoint is not an http(s) URL: {}", endpoint));
            }
            CrudServiceImpl::Rest(RestCrudService::new(RestService::new(endpoint)))
        }
        BackendType::Memory => {
            log::debug!("Using memory backend for {}", endpoint);
            if console_config.seed_sample_data {
                CrudServiceImpl::Memory(MemoryCrudService::with_items(samples))
            } else {
                CrudServiceImpl::Memory(MemoryCrudService::new())
            }
        }
    };
    Ok(crud_service)
}
