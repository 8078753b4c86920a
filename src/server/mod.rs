pub mod console;
pub mod context;
pub mod loader;
