use serde::{Deserialize, Serialize};

use crate::calculator::CalcValue;
use crate::catalog::Product;

/// A single record in the in-memory item store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
}

/// Response type for DELETE /api/items/{id}
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DeleteResponse {
    pub message: String,
    pub deleted: usize,
}

/// Aggregates over the current contents of the item store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ItemSummary {
    pub count: usize,
    pub total_price: f64,
    /// Absent when the store is empty
    pub average_price: Option<f64>,
}

/// Query parameters for the calculator endpoint
#[derive(Deserialize)]
pub struct CalculateQuery {
    pub a: i64,
    pub b: i64,
    pub operation: String,
}

/// Response type for a successful calculation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct CalculateResponse {
    pub a: i64,
    pub b: i64,
    pub operation: String,
    pub result: CalcValue,
}

/// Response type for GET /api/products
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ProductListResponse {
    pub products: Vec<Product>,
    pub count: usize,
}

/// Response type for GET /api/info
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApiInfoResponse {
    pub app_name: String,
    pub version: String,
    pub build_number: String,
    pub build_timestamp: String,
    pub environment: String,
    pub server: String,
    pub deployed_at: String,
    pub item_count: usize,
}
