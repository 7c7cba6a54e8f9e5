pub mod add_card;
pub mod board;
pub mod burn_barrel;
pub mod column;
pub mod drop_indicator;
pub mod task_card;

pub use add_card::AddCard;
pub use board::KanbanBoard;
pub use burn_barrel::BurnBarrel;
pub use column::KanbanColumn;
pub use drop_indicator::DropIndicator;
pub use task_card::TaskCard;
