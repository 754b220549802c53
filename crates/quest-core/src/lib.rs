//! Quest Todo Core
//!
//! Layered architecture:
//! - domain: Entities, list operations and the XP / streak / achievement rules
//! - repository: Storage abstraction and JSON persistence
//! - config: Fixed constants shared by the widgets

pub mod config;
pub mod domain;
pub mod repository;

pub use domain::{
    Achievement, Clock, Difficulty, DomainError, DomainResult, Entity, Filter, FixedClock,
    ItemList, PlayerState, Quest, QuestLog, QuestOutcome, Task, TaskList,
};
pub use repository::{load_or_default, save, MemoryStore, StateStore, StorageError, StoreResult};
