// Route path constants - single source of truth for all API paths

use axum::{routing::get, Router};
use tower_http::{services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api_doc::ApiDoc;
use crate::handlers;
use crate::state::AppState;

pub const HOME: &str = "/";
pub const INFO_PAGE: &str = "/info";
pub const HEALTH: &str = "/health";
pub const API_INFO: &str = "/api/info";
pub const ITEMS: &str = "/api/items";
pub const ITEM_STATS: &str = "/api/items/stats";
pub const ITEM: &str = "/api/items/{id}";
pub const CALCULATE: &str = "/api/calculate";
pub const PRODUCTS: &str = "/api/products";
pub const PRODUCT_STATS: &str = "/api/stats";
pub const STATIC: &str = "/static";
pub const SWAGGER_UI: &str = "/swagger-ui";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
pub fn app(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    let mut api_doc = ApiDoc::openapi();
    api_doc.info.version = state.deployment.version.clone();

    Router::new()
        .route(HOME, get(handlers::home_handler))
        .route(INFO_PAGE, get(handlers::info_page_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(API_INFO, get(handlers::api_info_handler))
        .route(ITEMS, get(handlers::list_items_handler).post(handlers::create_item_handler))
        .route(ITEM_STATS, get(handlers::item_stats_handler))
        .route(ITEM, get(handlers::get_item_handler).delete(handlers::delete_item_handler))
        .route(CALCULATE, get(handlers::calculate_handler))
        .route(PRODUCTS, get(handlers::list_products_handler))
        .route(PRODUCT_STATS, get(handlers::product_stats_handler))
        .nest_service(STATIC, static_files)
        .merge(SwaggerUi::new(SWAGGER_UI).url(OPENAPI_JSON, api_doc))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn get(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app(AppState::for_tests())
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    #[tokio::test]
    async fn test_openapi_json_served() {
        let (status, body) = get(OPENAPI_JSON).await;
        assert_eq!(status, StatusCode::OK);

        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(doc["paths"].get(ITEM).is_some());
        assert!(doc["paths"].get(CALCULATE).is_some());
    }

    #[tokio::test]
    async fn test_openapi_version_matches_deployment() {
        let (_, body) = get(OPENAPI_JSON).await;

        let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(doc["info"]["version"], crate::config::DEFAULT_APP_VERSION);
    }

    #[tokio::test]
    async fn test_swagger_ui_served() {
        let (status, body) = get("/swagger-ui/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(String::from_utf8_lossy(&body).contains("<html"));
    }
}
