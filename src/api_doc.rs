use utoipa::OpenApi;

use crate::calculator::CalcValue;
use crate::catalog::{Product, ProductStats};
use crate::error::{ErrorResponse, HealthResponse};
use crate::handlers;
use crate::models::{
    ApiInfoResponse, CalculateResponse, DeleteResponse, Item, ItemSummary, ProductListResponse,
};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "deploy-probe API",
        version = "1.0.0",
        description = "Demo service used to verify build, deploy and health-check pipelines"
    ),
    paths(
        handlers::health::health_handler,
        handlers::info::api_info_handler,
        handlers::items::list_items_handler,
        handlers::items::get_item_handler,
        handlers::items::create_item_handler,
        handlers::items::delete_item_handler,
        handlers::items::item_stats_handler,
        handlers::calculate::calculate_handler,
        handlers::products::list_products_handler,
        handlers::products::product_stats_handler
    ),
    components(
        schemas(
            Item,
            ItemSummary,
            DeleteResponse,
            CalculateResponse,
            CalcValue,
            Product,
            ProductStats,
            ProductListResponse,
            ApiInfoResponse,
            ErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "info", description = "Deployment metadata"),
        (name = "items", description = "In-memory item operations"),
        (name = "calculator", description = "Integer calculator"),
        (name = "products", description = "Static product catalog")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_every_route() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for path in [
            "/health",
            "/api/info",
            "/api/items",
            "/api/items/{id}",
            "/api/items/stats",
            "/api/calculate",
            "/api/products",
            "/api/stats",
        ] {
            assert!(paths.contains(&path), "missing {}", path);
        }
    }
}
