use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};

/// GET /health handler - Health check endpoint
///
/// Used by the deployment pipeline after each rollout. The service has no
/// external dependencies, so it reports healthy whenever it can answer.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    tracing::debug!("Health check passed");
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            version: state.deployment.version.clone(),
            message: format!(
                "Application is running successfully on {}",
                state.deployment.server
            ),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use tower::ServiceExt;

    async fn get_health(app: Router) -> HealthResponse {
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_healthy() {
        let state = AppState::for_tests();
        let app = routes::app(state.clone());

        let response_json = get_health(app).await;
        assert_eq!(response_json.status, "healthy");
        assert_eq!(response_json.version, state.deployment.version);
        assert!(response_json.message.contains("webapp-server"));
    }

    #[tokio::test]
    async fn test_health_ignores_store_contents() {
        let state = AppState::for_tests();
        for id in 1..=3 {
            state.items.delete(id).await;
        }
        assert_eq!(state.items.len().await, 0);

        let response_json = get_health(routes::app(state)).await;
        assert_eq!(response_json.status, "healthy");
    }
}
