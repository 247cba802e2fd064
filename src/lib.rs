rust_i18n::i18n!("locales", fallback = "en");

pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod nav;
pub mod rejections;
pub mod rubric;
pub mod services;
pub mod statics;
pub mod utils;
pub mod views;

use axum::{extract::DefaultBodyLimit, middleware, Router};

use rubric::FormStore;
use services::grading::{HttpGradingClient, RubricService};

#[derive(Clone)]
pub struct AppState {
    pub rubric: RubricService<HttpGradingClient>,
}

impl AppState {
    pub fn new(grading_url: String, max_forms: usize) -> Self {
        Self {
            rubric: RubricService::with_forms(
                HttpGradingClient::new(grading_url),
                FormStore::with_limit(max_forms),
            ),
        }
    }
}

pub fn router(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .merge(handlers::home::routes())
        .merge(handlers::rubric::routes())
        .layer(middleware::from_fn(csrf_check))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .nest("/static", statics::routes())
        .with_state(state)
}

async fn csrf_check(
    req: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> axum::response::Response {
    use axum::http::{Method, StatusCode};
    use axum::response::IntoResponse;

    let state_changing = [Method::POST, Method::PUT, Method::PATCH, Method::DELETE];

    if state_changing.contains(req.method()) {
        let has_hx_request = req
            .headers()
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");

        if !has_hx_request {
            tracing::warn!("rejected {} {} without HX-Request", req.method(), req.uri());
            return (StatusCode::FORBIDDEN, "CSRF check failed").into_response();
        }
    }

    next.run(req).await
}
