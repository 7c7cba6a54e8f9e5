use leptos::logging::warn;

use crate::core::models::{Task, TaskColumn};
use crate::features::kanban::services::DropTarget;

// Visible list of one column, in global sequence order
pub fn tasks_in_column(tasks: &[Task], column: TaskColumn) -> Vec<Task> {
    tasks.iter().filter(|t| t.column == column).cloned().collect()
}

pub fn count_in_column(tasks: &[Task], column: TaskColumn) -> usize {
    tasks.iter().filter(|t| t.column == column).count()
}

/// Build a task for `column` from raw form input.
///
/// Returns `None` when the trimmed title is empty. The id never collides with
/// one already present in `existing`.
pub fn new_task(title: &str, column: TaskColumn, existing: &[Task]) -> Option<Task> {
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let mut task = Task::new(title, column);
    while existing.iter().any(|t| t.id == task.id) {
        task = Task::new(title, column);
    }
    Some(task)
}

/// Relocate `task_id` into `column` at `target`.
///
/// Returns `false` and leaves `tasks` untouched when the drop is a no-op:
/// the task was dropped onto its own indicator, the dragged task is gone, or
/// the task it should precede is gone.
pub fn move_task(
    tasks: &mut Vec<Task>,
    task_id: &str,
    column: TaskColumn,
    target: &DropTarget,
) -> bool {
    if target.is_before(task_id) {
        return false;
    }

    let Some(from) = tasks.iter().position(|t| t.id == task_id) else {
        warn!("Dropped task {} is no longer on the board", task_id);
        return false;
    };

    if let DropTarget::Before(before_id) = target {
        if !tasks.iter().any(|t| &t.id == before_id) {
            warn!("Drop target {} is no longer on the board", before_id);
            return false;
        }
    }

    let mut task = tasks.remove(from);
    task.column = column;

    match target {
        DropTarget::End => tasks.push(task),
        DropTarget::Before(before_id) => {
            // Presence was checked above and removal cannot drop a different id
            let index = tasks
                .iter()
                .position(|t| &t.id == before_id)
                .unwrap_or(tasks.len());
            tasks.insert(index, task);
        }
    }
    true
}

// Remove a task; false when no task had that id
pub fn delete_task(tasks: &mut Vec<Task>, task_id: &str) -> bool {
    let before = tasks.len();
    tasks.retain(|t| t.id != task_id);
    tasks.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, column: TaskColumn) -> Task {
        Task {
            id: id.to_string(),
            title: format!("task {}", id),
            column,
        }
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    fn board() -> Vec<Task> {
        vec![
            task("1", TaskColumn::Backlog),
            task("2", TaskColumn::Todo),
            task("3", TaskColumn::Backlog),
            task("4", TaskColumn::Doing),
            task("5", TaskColumn::Todo),
        ]
    }

    #[test]
    fn column_view_keeps_global_order() {
        let tasks = board();
        assert_eq!(ids(&tasks_in_column(&tasks, TaskColumn::Backlog)), vec!["1", "3"]);
        assert_eq!(ids(&tasks_in_column(&tasks, TaskColumn::Todo)), vec!["2", "5"]);
        assert!(tasks_in_column(&tasks, TaskColumn::Done).is_empty());
        assert_eq!(count_in_column(&tasks, TaskColumn::Doing), 1);
    }

    #[test]
    fn move_to_end_appends_and_recolumns() {
        let mut tasks = board();
        assert!(move_task(&mut tasks, "1", TaskColumn::Done, &DropTarget::End));
        assert_eq!(ids(&tasks), vec!["2", "3", "4", "5", "1"]);
        assert_eq!(tasks[4].column, TaskColumn::Done);
    }

    #[test]
    fn move_before_inserts_ahead_of_target() {
        let mut tasks = board();
        let target = DropTarget::Before("2".to_string());
        assert!(move_task(&mut tasks, "4", TaskColumn::Todo, &target));
        assert_eq!(ids(&tasks), vec!["1", "4", "2", "3", "5"]);
        assert_eq!(tasks[1].column, TaskColumn::Todo);
    }

    #[test]
    fn move_downwards_lands_before_target() {
        let mut tasks = board();
        let target = DropTarget::Before("5".to_string());
        assert!(move_task(&mut tasks, "1", TaskColumn::Todo, &target));
        assert_eq!(ids(&tasks), vec!["2", "3", "4", "1", "5"]);
    }

    #[test]
    fn self_drop_is_noop() {
        let mut tasks = board();
        let target = DropTarget::Before("3".to_string());
        assert!(!move_task(&mut tasks, "3", TaskColumn::Done, &target));
        assert_eq!(tasks, board());
    }

    #[test]
    fn missing_target_leaves_sequence_unchanged() {
        let mut tasks = board();
        let target = DropTarget::Before("99".to_string());
        assert!(!move_task(&mut tasks, "1", TaskColumn::Done, &target));
        assert_eq!(tasks, board());
    }

    #[test]
    fn missing_dragged_task_is_noop() {
        let mut tasks = board();
        assert!(!move_task(&mut tasks, "99", TaskColumn::Done, &DropTarget::End));
        assert_eq!(tasks, board());
    }

    #[test]
    fn delete_removes_only_matching_task() {
        let mut tasks = board();
        assert!(delete_task(&mut tasks, "3"));
        assert_eq!(ids(&tasks), vec!["1", "2", "4", "5"]);
        assert!(!delete_task(&mut tasks, "3"));
        assert_eq!(tasks.len(), 4);
    }

    #[test]
    fn new_task_trims_title() {
        let task = new_task("  Write release notes \n", TaskColumn::Backlog, &board()).unwrap();
        assert_eq!(task.title, "Write release notes");
        assert_eq!(task.column, TaskColumn::Backlog);
    }

    #[test]
    fn blank_titles_are_rejected() {
        assert!(new_task("", TaskColumn::Todo, &[]).is_none());
        assert!(new_task("   \t\n", TaskColumn::Todo, &[]).is_none());
    }
}
