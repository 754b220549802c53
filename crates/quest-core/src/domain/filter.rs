//! List Filter

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Which entries a list view shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Active, Filter::Completed];

    pub fn matches<T: Entity>(self, item: &T) -> bool {
        match self {
            Filter::All => true,
            Filter::Active => !item.is_completed(),
            Filter::Completed => item.is_completed(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Active => "Active",
            Filter::Completed => "Completed",
        }
    }
}
