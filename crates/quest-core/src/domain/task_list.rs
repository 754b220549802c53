//! Task List
//!
//! State of the basic widget: a flat, ordered list of tasks.

use serde::{Deserialize, Serialize};

use super::clock::Clock;
use super::entity::{DomainError, DomainResult};
use super::filter::Filter;
use super::item_list::ItemList;
use super::task::Task;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ItemList<Task>", into = "ItemList<Task>")]
pub struct TaskList {
    tasks: ItemList<Task>,
}

impl From<ItemList<Task>> for TaskList {
    fn from(mut tasks: ItemList<Task>) -> Self {
        tasks.dedup_ids();
        Self { tasks }
    }
}

impl From<TaskList> for ItemList<Task> {
    fn from(list: TaskList) -> Self {
        list.tasks
    }
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &ItemList<Task> {
        &self.tasks
    }

    /// Add a task with the given text (trimmed, must not be empty)
    pub fn add(&mut self, text: &str, clock: &impl Clock) -> DomainResult<&Task> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("task text is empty".to_string()));
        }
        let now = clock.now_millis();
        let id = self.tasks.next_id(now);
        self.tasks.insert(Task::new(id, text.to_string(), now))
    }

    pub fn toggle(&mut self, id: &str, clock: &impl Clock) -> Option<&Task> {
        self.tasks.toggle(id, clock.now_millis())
    }

    pub fn delete(&mut self, id: &str) -> Option<Task> {
        self.tasks.remove(id)
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Task> {
        self.tasks.filtered(filter)
    }

    pub fn clear_completed(&mut self) -> usize {
        self.tasks.clear_completed()
    }
}
