use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    extract::DefaultBodyLimit,
    http::header::{CONTENT_TYPE, HeaderName, HeaderValue},
    http::{Method, Request},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use clap::Parser;
use hr_common::logging::{init_tracing_subscriber, install_tracing_panic_hook};
use hr_common::matching::scoring::MatchingConfig;
use tower_http::{
    cors::CorsLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

pub mod config;
pub mod error;
pub mod handlers;
pub mod rate_limit;

pub use config::{AppConfig, Cli, ConfigError};
pub use rate_limit::RateLimitConfig;

use error::ApiError;
use handlers::{health, roster, teams};
use rate_limit::IpRateLimiter;

const REQUEST_ID_HEADER: &str = "x-request-id";
const SHUTDOWN_DRAIN_GRACE: Duration = Duration::from_millis(200);

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub matching: MatchingConfig,
    pub(crate) rate_limiter: Arc<IpRateLimiter>,
    /// Cleared when shutdown starts; `/readyz` reports 503 from then on.
    pub readiness: Arc<AtomicBool>,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    pub fn new(config: AppConfig, matching: MatchingConfig, rate_limit: &RateLimitConfig) -> Self {
        Self {
            config,
            matching,
            rate_limiter: rate_limit.build(),
            readiness: Arc::new(AtomicBool::new(true)),
        }
    }
}

pub fn test_state() -> SharedState {
    Arc::new(AppState::new(
        AppConfig::for_tests(),
        MatchingConfig::default(),
        &RateLimitConfig::default(),
    ))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
}

fn header_request_id<B>(request: &Request<B>) -> Option<&str> {
    request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
}

/// Makes the request id visible to `ApiError` responses.
async fn scope_request_id(req: Request<Body>, next: Next) -> Response {
    let request_id = header_request_id(&req).map(str::to_owned);
    error::with_request_id(request_id, next.run(req)).await
}

pub fn create_router(state: SharedState) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
        tracing::info_span!(
            "http_request",
            method = %request.method(),
            uri = %request.uri(),
            request_id = header_request_id(request).unwrap_or(""),
        )
    });

    let api = Router::new()
        .route("/teams", post(teams::form_team))
        .route("/roster/summary", post(roster::summary))
        .route("/attendance/toggle", post(roster::toggle_attendance));

    Router::new()
        .route("/livez", get(health::livez))
        .route("/readyz", get(health::readyz))
        .route("/health", get(health::readyz))
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::limit_by_client_ip,
        ))
        .layer(middleware::from_fn(scope_request_id))
        .layer(DefaultBodyLimit::max(state.config.body_limit_bytes))
        .layer(trace)
        .layer(PropagateRequestIdLayer::new(request_id.clone()))
        .layer(SetRequestIdLayer::new(request_id, MakeRequestUuid))
        .layer(cors_layer(&state.config.cors_origins))
        .with_state(state)
}

pub async fn run() -> Result<(), ApiError> {
    dotenvy::dotenv().ok();
    init_tracing_subscriber(env!("CARGO_PKG_NAME"));
    install_tracing_panic_hook(env!("CARGO_PKG_NAME"));

    let config = AppConfig::try_from(Cli::parse())?;
    let rate_limit = RateLimitConfig::from_env();
    let state = Arc::new(AppState::new(
        config.clone(),
        MatchingConfig::default(),
        &rate_limit,
    ));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|err| ApiError::Internal(format!("failed to bind {addr}: {err}")))?;

    info!(
        %addr,
        max_pool_size = config.max_pool_size,
        cors_origins = ?config.cors_origins,
        rate_limit_per_sec = rate_limit.per_sec,
        rate_limit_burst = rate_limit.burst,
        "hr-api listening"
    );

    let app = create_router(state.clone());
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown_signal(state))
        .await
        .map_err(|err| ApiError::Internal(err.to_string()))
}

async fn shutdown_signal(state: SharedState) {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(_) => std::future::pending::<()>().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    state.readiness.store(false, Ordering::SeqCst);
    info!("shutdown requested; readiness cleared");

    // load balancers need a moment to see /readyz fail before the listener closes
    tokio::time::sleep(SHUTDOWN_DRAIN_GRACE).await;
}
