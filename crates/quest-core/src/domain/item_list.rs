//! Item List
//!
//! Ordered collection of entries with unique ids. Shared by the task
//! and quest widgets.

use serde::{Deserialize, Serialize};

use super::entity::{DomainError, DomainResult, Entity};
use super::filter::Filter;

/// Ordered list of entities, stored as a plain JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemList<T> {
    items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Entity> ItemList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.items.iter_mut().find(|item| item.id() == id)
    }

    /// Append an entry; ids must be unique
    pub fn insert(&mut self, item: T) -> DomainResult<&T> {
        if self.contains(item.id()) {
            return Err(DomainError::InvalidInput(format!("duplicate id {}", item.id())));
        }
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Flip completion of the entry with `id`
    pub fn toggle(&mut self, id: &str, now: i64) -> Option<&T> {
        let item = self.get_mut(id)?;
        let completed = !item.is_completed();
        item.set_completed(completed, now);
        Some(item)
    }

    /// Remove the entry with `id`; unknown ids leave the list unchanged
    pub fn remove(&mut self, id: &str) -> Option<T> {
        let index = self.items.iter().position(|item| item.id() == id)?;
        Some(self.items.remove(index))
    }

    /// Drop every completed entry, returning how many were removed
    pub fn clear_completed(&mut self) -> usize {
        let before = self.items.len();
        self.items.retain(|item| !item.is_completed());
        before - self.items.len()
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&T> {
        self.items.iter().filter(|item| filter.matches(*item)).collect()
    }

    pub fn active_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_completed()).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.active_count()
    }

    /// Fresh id derived from the current time, unique within the list
    pub fn next_id(&self, now: i64) -> String {
        let base = now.to_string();
        if !self.contains(&base) {
            return base;
        }
        let mut n = 1u32;
        loop {
            let candidate = format!("{}-{}", base, n);
            if !self.contains(&candidate) {
                return candidate;
            }
            n += 1;
        }
    }

    /// Drop later entries that reuse an earlier id
    pub(crate) fn dedup_ids(&mut self) -> usize {
        let before = self.items.len();
        let mut seen = std::collections::HashSet::new();
        self.items.retain(|item| seen.insert(item.id().to_string()));
        let dropped = before - self.items.len();
        if dropped > 0 {
            log::warn!("Dropped {} entries with duplicate ids", dropped);
        }
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Task;

    fn list_of(ids: &[&str]) -> ItemList<Task> {
        let mut list = ItemList::new();
        for id in ids {
            list.insert(Task::new(id.to_string(), format!("Task {}", id), 0)).unwrap();
        }
        list
    }

    #[test]
    fn test_insert_rejects_duplicate() {
        let mut list = list_of(&["a"]);
        let result = list.insert(Task::new("a".to_string(), "again".to_string(), 0));
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut list = list_of(&["a"]);
        assert!(list.toggle("a", 5).unwrap().completed);
        assert!(!list.toggle("a", 6).unwrap().completed);
        assert!(list.toggle("missing", 7).is_none());
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = list_of(&["a", "b"]);
        let before = list.clone();
        assert!(list.remove("zzz").is_none());
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_keeps_order() {
        let mut list = list_of(&["a", "b", "c"]);
        list.remove("b");
        let ids: Vec<&str> = list.iter().map(|t| t.id()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_filters_and_counts() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle("b", 1);
        assert_eq!(list.filtered(Filter::All).len(), 3);
        assert_eq!(list.filtered(Filter::Active).len(), 2);
        assert_eq!(list.filtered(Filter::Completed)[0].id, "b");
        assert_eq!(list.active_count(), 2);
        assert_eq!(list.completed_count(), 1);
    }

    #[test]
    fn test_clear_completed() {
        let mut list = list_of(&["a", "b", "c"]);
        list.toggle("a", 1);
        list.toggle("c", 1);
        assert_eq!(list.clear_completed(), 2);
        assert_eq!(list.len(), 1);
        assert!(list.contains("b"));
    }

    #[test]
    fn test_next_id_avoids_collision() {
        let list = list_of(&["100", "100-1"]);
        assert_eq!(list.next_id(100), "100-2");
        assert_eq!(list.next_id(101), "101");
    }

    #[test]
    fn test_dedup_ids() {
        let json = r#"[
            {"id":"a","text":"one","completed":false,"createdAt":0},
            {"id":"a","text":"two","completed":false,"createdAt":0}
        ]"#;
        let mut list: ItemList<Task> = serde_json::from_str(json).unwrap();
        assert_eq!(list.dedup_ids(), 1);
        assert_eq!(list.get("a").unwrap().text, "one");
    }
}
