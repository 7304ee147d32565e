use crate::models::ApiInfoResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /api/info handler - Deployment metadata
///
/// Everything except `item_count` is fixed at startup.
#[utoipa::path(
    get,
    path = routes::API_INFO,
    responses(
        (status = 200, description = "Application and deployment metadata", body = ApiInfoResponse)
    ),
    tag = "info"
)]
pub async fn api_info_handler(State(state): State<AppState>) -> (StatusCode, Json<ApiInfoResponse>) {
    let info = &state.deployment;
    (
        StatusCode::OK,
        Json(ApiInfoResponse {
            app_name: info.app_name.clone(),
            version: info.version.clone(),
            build_number: info.build_number.clone(),
            build_timestamp: info.build_timestamp.clone(),
            environment: info.environment.clone(),
            server: info.server.clone(),
            deployed_at: info.deployed_at_rfc3339(),
            item_count: state.items.len().await,
        }),
    )
}
