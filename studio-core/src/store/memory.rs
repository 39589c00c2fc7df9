//! DashMap-backed repository
//!
//! The default single-process backing for the repository contract. Each
//! mutation is one atomic entry replacement; `list` clones out a snapshot
//! so readers never hold a lock across domain logic.

use dashmap::DashMap;

use super::{Entity, Repository};

#[derive(Debug)]
pub struct MemoryRepository<T: Entity> {
    items: DashMap<i64, T>,
}

impl<T: Entity> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self {
            items: DashMap::new(),
        }
    }
}

impl<T: Entity> MemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-load caller-supplied records, e.g. at startup.
    pub fn seed(&self, entities: impl IntoIterator<Item = T>) {
        for entity in entities {
            self.items.insert(entity.id(), entity);
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Entity> Repository<T> for MemoryRepository<T> {
    fn get(&self, id: i64) -> Option<T> {
        self.items.get(&id).map(|entry| entry.value().clone())
    }

    fn list(&self) -> Vec<T> {
        let mut all: Vec<T> = self.items.iter().map(|e| e.value().clone()).collect();
        all.sort_by_key(Entity::id);
        all
    }

    fn insert(&self, entity: T) {
        self.items.insert(entity.id(), entity);
    }

    fn update(&self, id: i64, apply: impl FnOnce(&mut T)) -> bool {
        match self.items.get_mut(&id) {
            Some(mut entry) => {
                apply(entry.value_mut());
                true
            }
            None => false,
        }
    }

    fn delete(&self, id: i64) -> bool {
        self.items.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Counter {
        id: i64,
        value: i32,
    }

    impl Entity for Counter {
        fn id(&self) -> i64 {
            self.id
        }
    }

    #[test]
    fn test_insert_get_roundtrip() {
        let repo = MemoryRepository::new();
        repo.insert(Counter { id: 1, value: 0 });
        assert_eq!(repo.get(1), Some(Counter { id: 1, value: 0 }));
        assert_eq!(repo.get(2), None);
    }

    #[test]
    fn test_list_is_ordered_by_id() {
        let repo = MemoryRepository::new();
        repo.seed([
            Counter { id: 3, value: 0 },
            Counter { id: 1, value: 0 },
            Counter { id: 2, value: 0 },
        ]);
        let ids: Vec<i64> = repo.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_update_missing_id_returns_false() {
        let repo: MemoryRepository<Counter> = MemoryRepository::new();
        assert!(!repo.update(9, |c| c.value += 1));
    }

    #[test]
    fn test_update_replaces_in_place() {
        let repo = MemoryRepository::new();
        repo.insert(Counter { id: 1, value: 0 });
        assert!(repo.update(1, |c| c.value = 42));
        assert_eq!(repo.get(1).unwrap().value, 42);
    }

    #[test]
    fn test_delete() {
        let repo = MemoryRepository::new();
        repo.insert(Counter { id: 1, value: 0 });
        assert!(repo.delete(1));
        assert!(!repo.delete(1));
        assert!(repo.is_empty());
    }
}
