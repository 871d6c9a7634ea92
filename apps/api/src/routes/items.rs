//! # Item Routes
//!
//! ```text
//! POST   /items        ValidJson<NewItem>     → 200 Item
//! GET    /items        Page (skip, limit)     → 200 [Item]
//! GET    /items/{id}   ItemId                 → 200 Item       | 404
//! PUT    /items/{id}   ItemId + ItemUpdate    → 200 Item       | 404
//! DELETE /items/{id}   ItemId                 → 200 Item       | 404
//! ```
//!
//! Extractors run before the handler body, so malformed input is rejected
//! with 422 before a database session is checked out.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use tracing::info;

use portfolio_core::{CoreError, Item, ItemUpdate, NewItem};

use crate::error::ApiResult;
use crate::extract::{ItemId, Page, ValidJson};
use crate::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items).post(create_item))
        .route("/items/", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(read_item).put(update_item).delete(delete_item),
        )
}

async fn create_item(
    State(state): State<AppState>,
    ValidJson(new_item): ValidJson<NewItem>,
) -> ApiResult<Json<Item>> {
    let mut session = state.db.session().await?;
    let item = session.items().create(&new_item).await?;

    info!(id = item.id, "Item created");
    Ok(Json(item))
}

async fn list_items(
    State(state): State<AppState>,
    Page(page): Page,
) -> ApiResult<Json<Vec<Item>>> {
    let mut session = state.db.session().await?;
    let items = session.items().list(page.skip, page.limit).await?;
    Ok(Json(items))
}

async fn read_item(State(state): State<AppState>, ItemId(id): ItemId) -> ApiResult<Json<Item>> {
    let mut session = state.db.session().await?;
    let item = session
        .items()
        .get(id)
        .await?
        .ok_or(CoreError::ItemNotFound { id })?;
    Ok(Json(item))
}

async fn update_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
    ValidJson(changes): ValidJson<ItemUpdate>,
) -> ApiResult<Json<Item>> {
    let mut session = state.db.session().await?;
    let item = session
        .items()
        .update(id, changes)
        .await?
        .ok_or(CoreError::ItemNotFound { id })?;

    info!(id, "Item updated");
    Ok(Json(item))
}

async fn delete_item(
    State(state): State<AppState>,
    ItemId(id): ItemId,
) -> ApiResult<Json<Item>> {
    let mut session = state.db.session().await?;
    let item = session
        .items()
        .delete(id)
        .await?
        .ok_or(CoreError::ItemNotFound { id })?;

    info!(id, "Item deleted");
    Ok(Json(item))
}
