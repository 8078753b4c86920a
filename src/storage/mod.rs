pub mod memory {
    pub mod memory_crud_service;
}
pub mod crud_service_impl;
