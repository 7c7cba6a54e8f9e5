use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The four fixed lanes of the board, in display order.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskColumn {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl TaskColumn {
    /// Tag used both in storage and in the `data-column` DOM attribute.
    pub fn tag(&self) -> &'static str {
        match self {
            TaskColumn::Backlog => "backlog",
            TaskColumn::Todo => "todo",
            TaskColumn::Doing => "doing",
            TaskColumn::Done => "done",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            TaskColumn::Backlog => "Backlog",
            TaskColumn::Todo => "To-Do",
            TaskColumn::Doing => "Doing",
            TaskColumn::Done => "Done",
        }
    }

    pub fn heading_class(&self) -> &'static str {
        match self {
            TaskColumn::Backlog => "column-heading backlog",
            TaskColumn::Todo => "column-heading todo",
            TaskColumn::Doing => "column-heading doing",
            TaskColumn::Done => "column-heading done",
        }
    }

    pub fn all() -> [TaskColumn; 4] {
        [
            TaskColumn::Backlog,
            TaskColumn::Todo,
            TaskColumn::Doing,
            TaskColumn::Done,
        ]
    }
}

impl fmt::Display for TaskColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for TaskColumn {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskColumn::all()
            .into_iter()
            .find(|column| column.tag() == s)
            .ok_or_else(|| format!("unknown column tag: {}", s))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub column: TaskColumn,
}

impl Task {
    pub fn new(title: impl Into<String>, column: TaskColumn) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            column,
        }
    }
}
