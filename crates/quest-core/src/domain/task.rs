//! Task Entity
//!
//! A plain to-do entry in the basic widget.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// A to-do task
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task text content
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Creation time (Unix ms)
    pub created_at: i64,
    /// Completion time (Unix ms), set while completed
    #[serde(default)]
    pub completed_at: Option<i64>,
}

impl Task {
    /// Create a new open task
    pub fn new(id: String, text: String, now: i64) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: now,
            completed_at: None,
        }
    }
}

impl Entity for Task {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool, now: i64) {
        self.completed = completed;
        self.completed_at = completed.then_some(now);
    }
}
