//! Shared helpers for integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so the
//! tests exercise the same middleware stack (CORS, request ID, timeout,
//! tracing, panic recovery) that production uses, with the upstream
//! transport replaced by a canned double.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderName, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use catalog_api::config::ServerConfig;
use catalog_api::state::AppState;
use catalog_api::{graphql, routes};
use catalog_rawg::{HttpFetch, RawgClient, RawgError};

/// Test transport replaying a fixed upstream response for every request.
pub struct CannedFetch {
    response: Result<String, u16>,
    pub urls: Mutex<Vec<String>>,
}

impl CannedFetch {
    /// Succeed every request with `body`.
    pub fn ok(body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: Ok(body.to_string()),
            urls: Mutex::new(Vec::new()),
        })
    }

    /// Fail every request with the given upstream status.
    pub fn failing(status: u16) -> Arc<Self> {
        Arc::new(Self {
            response: Err(status),
            urls: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl HttpFetch for CannedFetch {
    async fn get(&self, url: &str) -> Result<String, RawgError> {
        self.urls.lock().unwrap().push(url.to_string());
        match &self.response {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(RawgError::Status {
                status: *status,
                body: "upstream failure".to_string(),
            }),
        }
    }
}

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        rawg_api_key: "test-key".to_string(),
        rawg_base_url: "http://rawg.test/api".to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given upstream transport.
pub fn build_test_app(fetch: Arc<dyn HttpFetch>) -> Router {
    let config = test_config();

    let client = Arc::new(RawgClient::new(
        fetch,
        config.rawg_base_url.clone(),
        config.rawg_api_key.clone(),
    ));
    let schema = graphql::build_schema(client);

    let state = AppState {
        schema,
        config: Arc::new(config),
    };

    let cors = CorsLayer::new()
        .allow_origin(["http://localhost:5173".parse().unwrap()])
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    let request_id_header = HeaderName::from_static("x-request-id");

    Router::new()
        .merge(routes::health::router())
        .merge(graphql::router())
        .layer(CatchPanicLayer::new())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(30),
        ))
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// POST a GraphQL query to `/graphql`.
pub async fn post_graphql(app: Router, query: &str) -> Response {
    let body = serde_json::json!({ "query": query }).to_string();
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
