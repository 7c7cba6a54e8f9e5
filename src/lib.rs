pub mod app;
pub mod config;
pub mod core;
pub mod features;

pub use config::BoardConfig;
pub use crate::core::models::{Task, TaskColumn};
