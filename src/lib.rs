pub mod common;
pub mod datasource;
pub mod page;
pub mod rest;
pub mod server;
pub mod service;
pub mod storage;
pub mod traits;

pub use server::console::Console;
pub use server::context::ConsoleContext;
