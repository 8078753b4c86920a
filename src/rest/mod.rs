pub mod rest_crud_service;
pub mod rest_service;
