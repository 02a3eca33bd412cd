use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryListingRepository};
use crate::routes::with_listing_routes;
use axum::http::{header, HeaderValue, Method, StatusCode};
use axum::routing::get;
use axum::{Extension, Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use rent_right::config::AppConfig;
use rent_right::error::AppError;
use rent_right::listings::{load_listings_or_empty, ListingRepository};
use rent_right::telemetry;
use serde_json::json;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::{info, warn};

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }
    if let Some(seed) = args.seed.take() {
        config.catalogue.seed_path = seed;
    }
    if let Some(static_dir) = args.static_dir.take() {
        config.catalogue.static_dir = static_dir;
    }

    telemetry::init(&config.telemetry)?;

    info!(path = %config.catalogue.seed_path.display(), "loading listing catalogue");
    let repository = Arc::new(InMemoryListingRepository::from_listings(
        load_listings_or_empty(&config.catalogue.seed_path),
    ));
    info!(listings = repository.len(), "listing catalogue ready");

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let app = build_router(repository, app_state, &config).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "rent-right listing service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

pub(crate) fn build_router<R>(repository: Arc<R>, state: AppState, config: &AppConfig) -> Router
where
    R: ListingRepository + 'static,
{
    let app = with_listing_routes(repository);
    with_frontend(app, &config.catalogue.static_dir)
        .layer(cors_layer(&config.server.allowed_origins))
        .layer(Extension(state))
}

fn with_frontend(app: Router, static_dir: &Path) -> Router {
    if static_dir.is_dir() {
        info!(path = %static_dir.display(), "serving frontend build");
        return app.fallback_service(ServeDir::new(static_dir));
    }

    warn!(
        path = %static_dir.display(),
        "frontend build directory not found; frontend will not be served"
    );
    let detail = format!(
        "Frontend not found. Please build the frontend. Expected at: {}",
        static_dir.display()
    );
    app.route(
        "/",
        get(move || async move {
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({ "detail": detail })),
            )
        }),
    )
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(%origin, "ignoring CORS origin that is not a valid header value");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
