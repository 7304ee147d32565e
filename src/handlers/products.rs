use crate::catalog::ProductStats;
use crate::models::ProductListResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/products handler - The static product catalog
#[utoipa::path(
    get,
    path = routes::PRODUCTS,
    responses(
        (status = 200, description = "All products", body = ProductListResponse)
    ),
    tag = "products"
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ProductListResponse>) {
    let products = state.products.as_ref().clone();
    (
        StatusCode::OK,
        Json(ProductListResponse {
            count: products.len(),
            products,
        }),
    )
}

/// GET /api/stats handler - Stock and value aggregates over the catalog
#[utoipa::path(
    get,
    path = routes::PRODUCT_STATS,
    responses(
        (status = 200, description = "Catalog statistics", body = ProductStats)
    ),
    tag = "products"
)]
pub async fn product_stats_handler(State(state): State<AppState>) -> (StatusCode, Json<ProductStats>) {
    let stats = ProductStats::from_products(&state.products);
    tracing::info!(
        "Computed stats over {} products (in stock: {}, out of stock: {})",
        stats.total_products,
        stats.in_stock,
        stats.out_of_stock
    );
    (StatusCode::OK, Json(stats))
}
