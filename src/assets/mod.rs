pub mod cache;
pub mod loader;
pub mod matcher;
pub mod resolver;
