use crate::deployment::DeploymentInfo;
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, response::Html};
use minijinja::{context, Environment};

const HOME_PAGE: &str = include_str!("../../assets/index.html");
const INFO_TEMPLATE: &str = include_str!("../../assets/info.html");
const INFO_TEMPLATE_NAME: &str = "info.html";

/// GET / - Static landing page
pub async fn home_handler() -> Html<&'static str> {
    Html(HOME_PAGE)
}

/// GET /info - Deployment details rendered as HTML
pub async fn info_page_handler(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let page = render_info_page(&state.deployment).inspect_err(|e| {
        tracing::error!("Failed to render info page: {}", e);
    })?;
    Ok(Html(page))
}

fn render_info_page(info: &DeploymentInfo) -> Result<String, minijinja::Error> {
    // The .html suffix turns on autoescaping for the environment-sourced values
    let mut env = Environment::new();
    env.add_template(INFO_TEMPLATE_NAME, INFO_TEMPLATE)?;
    let template = env.get_template(INFO_TEMPLATE_NAME)?;
    template.render(context! {
        app_name => &info.app_name,
        version => &info.version,
        build_number => &info.build_number,
        build_timestamp => &info.build_timestamp,
        environment => &info.environment,
        server => &info.server,
        deployed_at => info.deployed_at_rfc3339(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::routes;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    async fn get_page(state: AppState, uri: &str) -> (StatusCode, String, String) {
        let response = routes::app(state)
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
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_home_page() {
        let (status, content_type, body) = get_page(AppState::for_tests(), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("href=\"/health\""));
    }

    #[tokio::test]
    async fn test_info_page_shows_deployment() {
        let state = AppState::for_tests();
        let version = state.deployment.version.clone();

        let (status, content_type, body) = get_page(state, "/info").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains(&version));
        assert!(body.contains("webapp-server"));
        assert!(body.contains("<a href=\"/health\">"));
    }

    #[tokio::test]
    async fn test_static_assets_served() {
        let (status, content_type, body) =
            get_page(AppState::for_tests(), "/static/style.css").await;

        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/css"));
        assert!(body.contains("font-family"));
    }

    #[test]
    fn test_info_page_escapes_values() {
        let config = Config::from_lookup(|key| match key {
            "BUILD_NUMBER" => Some("<script>alert(1)</script>".to_string()),
            _ => None,
        })
        .unwrap();
        let page = render_info_page(&DeploymentInfo::capture(&config)).unwrap();

        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
