use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemData};

/// Repository trait for Item storage
///
/// Implementations own id assignment: ids start at 1, increase by one per
/// successful create and are never reused. Lookups for an absent id fail
/// with [`ItemError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Store a new item under the next id, defaulting stock to 0
    async fn create(&self, data: ItemData) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: i64) -> ItemResult<Item>;

    /// Snapshot of all items in insertion order
    async fn list(&self) -> ItemResult<Vec<Item>>;

    /// Number of items currently stored
    async fn count(&self) -> ItemResult<usize>;

    /// Overwrite an existing item in place
    async fn update(&self, id: i64, data: ItemData) -> ItemResult<Item>;

    /// Remove an item by ID
    async fn delete(&self, id: i64) -> ItemResult<()>;
}

/// Items and the id counter share one lock so id assignment is atomic
/// with respect to the collection.
#[derive(Debug)]
struct StoreState {
    items: Vec<Item>,
    next_id: i64,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

/// In-memory implementation of ItemRepository
///
/// Clones share the same underlying store.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    state: Arc<RwLock<StoreState>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, data), fields(item_name = %data.name))]
    async fn create(&self, data: ItemData) -> ItemResult<Item> {
        let mut state = self.state.write().await;

        let id = state.next_id;
        state.next_id += 1;

        let item = Item::new(id, data);
        state.items.push(item.clone());

        tracing::info!(
            item_id = item.id,
            name = %item.name,
            price = item.price,
            "Added new item"
        );
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> ItemResult<Item> {
        let state = self.state.read().await;

        match state.items.iter().find(|item| item.id == id) {
            Some(item) => {
                tracing::debug!(item_id = id, name = %item.name, "Found item");
                Ok(item.clone())
            }
            None => {
                tracing::warn!(item_id = id, "Item not found");
                Err(ItemError::NotFound(id))
            }
        }
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        let state = self.state.read().await;
        Ok(state.items.clone())
    }

    async fn count(&self) -> ItemResult<usize> {
        let state = self.state.read().await;
        Ok(state.items.len())
    }

    #[instrument(skip(self, data))]
    async fn update(&self, id: i64, data: ItemData) -> ItemResult<Item> {
        let mut state = self.state.write().await;

        let Some(item) = state.items.iter_mut().find(|item| item.id == id) else {
            tracing::warn!(item_id = id, "Item not found");
            return Err(ItemError::NotFound(id));
        };

        item.apply_update(data);

        tracing::info!(item_id = id, name = %item.name, "Updated item");
        Ok(item.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> ItemResult<()> {
        let mut state = self.state.write().await;

        let Some(position) = state.items.iter().position(|item| item.id == id) else {
            tracing::warn!(item_id = id, "Item not found");
            return Err(ItemError::NotFound(id));
        };

        let removed = state.items.remove(position);

        tracing::info!(item_id = id, name = %removed.name, "Deleted item");
        Ok(())
    }
}
