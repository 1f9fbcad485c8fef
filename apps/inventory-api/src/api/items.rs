//! Items API routes
//!
//! This module wires up the items domain to HTTP routes.

use axum::Router;
use domain_items::handlers;

use crate::state::AppState;

/// Create items router
pub fn router(state: &AppState) -> Router {
    // The domain router owns its own state; hand it a clone sharing the store
    handlers::router(state.items.clone())
}
