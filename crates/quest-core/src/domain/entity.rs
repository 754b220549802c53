//! Domain Layer - Core Entity Trait
//!
//! The contract shared by tasks and quests so list operations can be
//! written once.

use serde::{Deserialize, Serialize};

/// Core trait for list entries
pub trait Entity: Clone {
    /// Returns the entry's unique identifier
    fn id(&self) -> &str;

    /// Whether the entry is marked done
    fn is_completed(&self) -> bool;

    /// Set completion state, stamping or clearing the completion time
    fn set_completed(&mut self, completed: bool, now: i64);
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DomainError {
    InvalidInput(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
