//! Application state management.
//!
//! The state is cloned into every router that needs it; the item service
//! shares one store across clones.

use domain_items::{InMemoryItemRepository, ItemService};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// Item service backed by the process-wide in-memory store
    pub items: ItemService<InMemoryItemRepository>,
}

impl AppState {
    pub fn new(config: crate::config::Config) -> Self {
        Self {
            config,
            items: ItemService::new(InMemoryItemRepository::new()),
        }
    }
}
