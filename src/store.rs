use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::{Item, ItemSummary};

/// Shareable in-memory item list for use across async handlers
///
/// Items are kept in insertion order. Ids are caller-supplied and are not
/// checked for uniqueness, so lookups return the first match while deletes
/// remove every match.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<Vec<Item>>>,
}

impl ItemStore {
    pub fn new(items: Vec<Item>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(items)),
        }
    }

    /// Create a store holding the startup seed items
    pub fn seeded() -> Self {
        Self::new(seed_items())
    }

    /// Snapshot of every item, in insertion order
    pub async fn list(&self) -> Vec<Item> {
        self.inner.read().await.clone()
    }

    /// First item with the given id, if any
    pub async fn get(&self, id: i64) -> Option<Item> {
        self.inner.read().await.iter().find(|item| item.id == id).cloned()
    }

    /// Append an item verbatim and hand it back
    pub async fn create(&self, item: Item) -> Item {
        let mut items = self.inner.write().await;
        items.push(item.clone());
        tracing::debug!("Item store now holds {} items", items.len());
        item
    }

    /// Remove every item with the given id, returning how many were removed
    pub async fn delete(&self, id: i64) -> usize {
        let mut items = self.inner.write().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        before - items.len()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn summary(&self) -> ItemSummary {
        let items = self.inner.read().await;
        let count = items.len();
        let total_price = items.iter().fold(0.0, |acc, item| acc + item.price);

        ItemSummary {
            count,
            total_price,
            average_price: (count > 0).then(|| total_price / count as f64),
        }
    }
}

fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: 1,
            name: "Laptop".to_string(),
            description: Some("High-performance laptop".to_string()),
            price: 1299.99,
        },
        Item {
            id: 2,
            name: "Mouse".to_string(),
            description: Some("Wireless mouse".to_string()),
            price: 29.99,
        },
        Item {
            id: 3,
            name: "Keyboard".to_string(),
            description: None,
            price: 89.99,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, name: &str, price: f64) -> Item {
        Item {
            id,
            name: name.to_string(),
            description: None,
            price,
        }
    }

    #[tokio::test]
    async fn test_seeded_store() {
        let store = ItemStore::seeded();
        let items = store.list().await;

        assert_eq!(items.len(), 3);
        assert_eq!(
            items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 2, 3]
        );
    }

    #[tokio::test]
    async fn test_create_appends_at_end() {
        let store = ItemStore::seeded();
        let created = store.create(item(10, "Cable", 4.5)).await;

        assert_eq!(created, item(10, "Cable", 4.5));
        let items = store.list().await;
        assert_eq!(items.len(), 4);
        assert_eq!(items.last(), Some(&created));
        assert_eq!(items.iter().filter(|i| i.id == 10).count(), 1);
    }

    #[tokio::test]
    async fn test_get_returns_first_match() {
        let store = ItemStore::new(vec![item(7, "first", 1.0), item(7, "second", 2.0)]);

        assert_eq!(store.get(7).await.map(|i| i.name), Some("first".to_string()));
        assert_eq!(store.get(8).await, None);
    }

    #[tokio::test]
    async fn test_delete_single() {
        let store = ItemStore::seeded();

        assert_eq!(store.delete(2).await, 1);
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(2).await, None);
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_list_unchanged() {
        let store = ItemStore::seeded();
        let before = store.list().await;

        assert_eq!(store.delete(99).await, 0);
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_all_duplicates() {
        let store = ItemStore::new(vec![
            item(1, "a", 1.0),
            item(2, "b", 2.0),
            item(1, "c", 3.0),
        ]);

        assert_eq!(store.delete(1).await, 2);
        assert_eq!(store.list().await, vec![item(2, "b", 2.0)]);
    }

    #[tokio::test]
    async fn test_clones_share_items() {
        let store = ItemStore::default();
        let other = store.clone();

        other.create(item(1, "shared", 1.0)).await;
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_summary() {
        let store = ItemStore::new(vec![item(1, "a", 1.5), item(2, "b", 2.5)]);
        let summary = store.summary().await;

        assert_eq!(summary.count, 2);
        assert_eq!(summary.total_price, 4.0);
        assert_eq!(summary.average_price, Some(2.0));

        let empty = ItemStore::default().summary().await;
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average_price, None);
    }
}
