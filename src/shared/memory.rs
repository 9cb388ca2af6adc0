use std::collections::BTreeMap;

use tokio::sync::RwLock;

/// An id-keyed table held in process memory.
///
/// Backs the in-memory repositories. Ids start at 1 and are never reused,
/// mirroring a `SERIAL` column. Every operation holds the lock for its whole
/// duration, so each call is atomic.
pub struct MemoryTable<T> {
    inner: RwLock<TableState<T>>,
}

struct TableState<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T: Clone> MemoryTable<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(TableState {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }

    /// Insert a row built from the freshly allocated id.
    pub async fn insert_with(&self, build: impl FnOnce(i32) -> T) -> T {
        let mut state = self.inner.write().await;
        let id = state.next_id;
        state.next_id += 1;
        let row = build(id);
        state.rows.insert(id, row.clone());
        row
    }

    /// Insert unless an existing row collides. Returns `None` on collision.
    pub async fn insert_unique_with(
        &self,
        collides: impl Fn(&T) -> bool,
        build: impl FnOnce(i32) -> T,
    ) -> Option<T> {
        let mut state = self.inner.write().await;
        if state.rows.values().any(collides) {
            return None;
        }
        let id = state.next_id;
        state.next_id += 1;
        let row = build(id);
        state.rows.insert(id, row.clone());
        Some(row)
    }

    pub async fn get(&self, id: i32) -> Option<T> {
        self.inner.read().await.rows.get(&id).cloned()
    }

    /// Rows satisfying `keep`, in id order.
    pub async fn select(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.inner
            .read()
            .await
            .rows
            .values()
            .filter(|row| keep(row))
            .cloned()
            .collect()
    }

    /// Apply `change` to the row with `id`, returning the updated row.
    pub async fn update_with(&self, id: i32, change: impl FnOnce(&mut T)) -> Option<T> {
        let mut state = self.inner.write().await;
        let row = state.rows.get_mut(&id)?;
        change(row);
        Some(row.clone())
    }

    /// Remove the row with `id`. Returns whether a row was removed.
    pub async fn remove(&self, id: i32) -> bool {
        self.inner.write().await.rows.remove(&id).is_some()
    }
}

impl<T: Clone> Default for MemoryTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_ids_are_sequential_and_not_reused() {
        let table = MemoryTable::<(i32, &str)>::new();
        let a = table.insert_with(|id| (id, "a")).await;
        let b = table.insert_with(|id| (id, "b")).await;
        assert_eq!((a.0, b.0), (1, 2));

        assert!(table.remove(2).await);
        let c = table.insert_with(|id| (id, "c")).await;
        assert_eq!(c.0, 3);
    }

    #[tokio::test]
    async fn test_insert_unique_rejects_collision() {
        let table = MemoryTable::<(i32, String)>::new();
        let first = table
            .insert_unique_with(|row| row.1 == "a@example.com", |id| (id, "a@example.com".into()))
            .await;
        assert!(first.is_some());

        let second = table
            .insert_unique_with(|row| row.1 == "a@example.com", |id| (id, "a@example.com".into()))
            .await;
        assert!(second.is_none());
        assert_eq!(table.select(|_| true).await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_and_remove_missing_rows() {
        let table = MemoryTable::<(i32, bool)>::new();
        assert!(table.select(|_| true).await.is_empty());
        assert!(table.update_with(7, |row| row.1 = true).await.is_none());
        assert!(!table.remove(7).await);

        table.insert_with(|id| (id, false)).await;
        let updated = table.update_with(1, |row| row.1 = true).await;
        assert_eq!(updated, Some((1, true)));
        assert_eq!(table.get(1).await, Some((1, true)));
    }
}
