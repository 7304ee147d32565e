use crate::error::{ApiError, ErrorResponse};
use crate::models::{DeleteResponse, Item, ItemSummary};
use crate::routes;
use crate::state::AppState;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /api/items handler - List every item in insertion order
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = Vec<Item>)
    ),
    tag = "items"
)]
pub async fn list_items_handler(State(state): State<AppState>) -> (StatusCode, Json<Vec<Item>>) {
    let items = state.items.list().await;
    tracing::info!("Listed {} items", items.len());
    (StatusCode::OK, Json(items))
}

/// GET /api/items/{id} handler - Retrieve the first item with a given id
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 404, description = "Item not found", body = ErrorResponse)
    ),
    tag = "items"
)]
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    match state.items.get(id).await {
        Some(item) => Ok((StatusCode::OK, Json(item))),
        None => {
            tracing::warn!("Item not found with id: {}", id);
            Err(ApiError::ItemNotFound(id))
        }
    }
}

/// POST /api/items handler - Append an item
///
/// The item is stored exactly as submitted; duplicate ids are accepted.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = Item,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Malformed JSON body"),
        (status = 422, description = "Body does not describe an item")
    ),
    tag = "items"
)]
pub async fn create_item_handler(
    State(state): State<AppState>,
    Json(item): Json<Item>,
) -> (StatusCode, Json<Item>) {
    let created = state.items.create(item).await;
    tracing::info!("Created item with id: {}", created.id);
    (StatusCode::CREATED, Json(created))
}

/// DELETE /api/items/{id} handler - Remove every item with a given id
///
/// Succeeds even when no item matched; `deleted` reports how many went.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id")
    ),
    responses(
        (status = 200, description = "Delete completed", body = DeleteResponse)
    ),
    tag = "items"
)]
pub async fn delete_item_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> (StatusCode, Json<DeleteResponse>) {
    let deleted = state.items.delete(id).await;
    tracing::info!("Deleted {} item(s) with id: {}", deleted, id);
    (
        StatusCode::OK,
        Json(DeleteResponse {
            message: format!("Item {} deleted", id),
            deleted,
        }),
    )
}

/// GET /api/items/stats handler - Count and price totals for the store
#[utoipa::path(
    get,
    path = routes::ITEM_STATS,
    responses(
        (status = 200, description = "Item summary", body = ItemSummary)
    ),
    tag = "items"
)]
pub async fn item_stats_handler(State(state): State<AppState>) -> (StatusCode, Json<ItemSummary>) {
    (StatusCode::OK, Json(state.items.summary().await))
}
