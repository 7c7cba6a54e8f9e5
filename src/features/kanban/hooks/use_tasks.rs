use gloo_timers::callback::Timeout;
use leptos::logging::error;
use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::core::models::{Task, TaskColumn};
use crate::core::services::{load_tasks_or_default, save_tasks};
use crate::features::kanban::services::{
    count_in_column, delete_task, move_task, new_task, tasks_in_column, DropTarget,
};

/// Handle to the board's single ordered task sequence.
///
/// Every write goes through [`TaskStore::replace`], which also rewrites the
/// whole array to localStorage.
#[derive(Clone, Copy)]
pub struct TaskStore {
    tasks: RwSignal<Vec<Task>>,
    loading: RwSignal<bool>,
    storage_key: StoredValue<String>,
}

impl TaskStore {
    pub fn tasks(&self) -> ReadSignal<Vec<Task>> {
        self.tasks.read_only()
    }

    pub fn loading(&self) -> ReadSignal<bool> {
        self.loading.read_only()
    }

    pub fn in_column(&self, column: TaskColumn) -> Vec<Task> {
        self.tasks.with(|tasks| tasks_in_column(tasks, column))
    }

    pub fn count(&self, column: TaskColumn) -> usize {
        self.tasks.with(|tasks| count_in_column(tasks, column))
    }

    pub fn replace(&self, next: Vec<Task>) {
        self.tasks.set(next);
        let key = self.storage_key.get_value();
        self.tasks.with_untracked(|tasks| {
            if let Err(e) = save_tasks(&key, tasks) {
                error!("Failed to save tasks: {}", e);
            }
        });
    }

    // Append a task built from form input; false when the title is blank
    pub fn create(&self, title: &str, column: TaskColumn) -> bool {
        let mut next = self.tasks.get_untracked();
        match new_task(title, column, &next) {
            Some(task) => {
                next.push(task);
                self.replace(next);
                true
            }
            None => false,
        }
    }

    pub fn move_to(&self, task_id: &str, column: TaskColumn, target: &DropTarget) {
        let mut next = self.tasks.get_untracked();
        if move_task(&mut next, task_id, column, target) {
            self.replace(next);
        }
    }

    pub fn delete(&self, task_id: &str) {
        let mut next = self.tasks.get_untracked();
        if delete_task(&mut next, task_id) {
            self.replace(next);
        }
    }
}

pub fn use_tasks(config: &BoardConfig) -> TaskStore {
    // Loaded once, before anything can write
    let tasks = RwSignal::new(load_tasks_or_default(&config.storage_key));
    let loading = RwSignal::new(true);

    let timer = StoredValue::new_local(Some(Timeout::new(config.loading_delay_ms, move || {
        loading.set(false);
    })));
    on_cleanup(move || {
        // Dropping a pending Timeout cancels it
        timer.update_value(|timer| drop(timer.take()));
    });

    TaskStore {
        tasks,
        loading,
        storage_key: StoredValue::new(config.storage_key.clone()),
    }
}
