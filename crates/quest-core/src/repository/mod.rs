//! Repository Layer
//!
//! Storage abstraction and JSON persistence of widget state.

mod traits;
mod memory;
mod persist;


pub use traits::{StateStore, StorageError, StoreResult};
pub use memory::MemoryStore;
pub use persist::{load_or_default, save};
