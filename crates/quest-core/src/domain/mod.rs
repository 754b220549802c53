//! Domain Layer
//!
//! Contains all domain entities and the pure rules applied to them.
//! This layer has NO storage or browser dependencies.

mod entity;
mod clock;
mod task;
mod quest;
mod player;
mod filter;
mod item_list;
mod task_list;
mod quest_log;
pub mod leveling;
pub mod streak;
pub mod achievement;

pub use entity::{Entity, DomainError, DomainResult};
pub use clock::{Clock, FixedClock};
pub use task::Task;
pub use quest::{Quest, Difficulty};
pub use player::PlayerState;
pub use filter::Filter;
pub use item_list::ItemList;
pub use task_list::TaskList;
pub use quest_log::{QuestLog, QuestOutcome};
pub use achievement::Achievement;
