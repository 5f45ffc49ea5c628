pub mod config;
pub mod constants;
pub mod driver;
pub mod error;
pub mod loader;
pub mod models;
pub mod plotting;
