//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ItemData, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// Validates input before it reaches the repository, so the store never
/// observes blank names or non-positive prices.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        let data = ItemData::try_from(input)?;
        self.repository.create(data).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i64) -> ItemResult<Item> {
        self.repository.get_by_id(id).await
    }

    /// List all items in insertion order
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        let items = self.repository.list().await?;
        tracing::info!(count = items.len(), "Retrieved items");
        Ok(items)
    }

    /// Number of stored items
    #[instrument(skip(self))]
    pub async fn count_items(&self) -> ItemResult<usize> {
        self.repository.count().await
    }

    /// Update an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i64, input: UpdateItem) -> ItemResult<Item> {
        let data = ItemData::try_from(input)?;
        self.repository.update(id, data).await
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        self.repository.delete(id).await
    }

    /// Insert the demonstration catalogue. Returns how many items were added.
    #[instrument(skip(self))]
    pub async fn seed_sample_data(&self) -> ItemResult<usize> {
        let samples = sample_items();
        let total = samples.len();

        for input in samples {
            self.create_item(input).await?;
        }

        tracing::info!(count = total, "Seeded sample items");
        Ok(total)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

fn sample_items() -> Vec<CreateItem> {
    [
        ("Laptop", "High-performance gaming laptop", 1299.99, 15),
        ("Smartphone", "Latest model with 5G support", 899.99, 30),
        ("Headphones", "Wireless noise-cancelling headphones", 299.99, 50),
    ]
    .into_iter()
    .map(|(name, description, price, stock)| CreateItem {
        name: name.to_string(),
        description: description.to_string(),
        price: Some(price),
        category: "Electronics".to_string(),
        stock_quantity: Some(stock),
    })
    .collect()
}
