pub mod drag_transfer;
pub mod insertion;
pub mod task_operations;

pub use drag_transfer::*;
pub use insertion::*;
pub use task_operations::*;
