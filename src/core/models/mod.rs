pub mod task;

pub use task::{Task, TaskColumn};
