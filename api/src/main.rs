//! Spots API Server
//!
//! Serves points of interest ("spots") lying within a radius of a coordinate.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tower::ServiceBuilder;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::StaticSpotRepository;
use app::SpotService;
use config::{Config, RateLimit};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub spot_service: Arc<SpotService<StaticSpotRepository>>,
    pub config: Config,
}

/// Build the application router.
///
/// `rate_limit` applies a per-client-IP quota to the spot routes; it relies on
/// connect info, so the router must be served with
/// `into_make_service_with_connect_info` when it is set.
pub fn build_router(state: AppState, rate_limit: Option<RateLimit>) -> anyhow::Result<Router> {
    let spot_routes: Router<AppState> =
        Router::new().route("/spots", get(handlers::list_spots_in_area));

    let spot_routes = match rate_limit {
        Some(limit) => {
            let governor_config = Arc::new(
                GovernorConfigBuilder::default()
                    .key_extractor(PeerIpKeyExtractor)
                    .period(limit.replenish_interval())
                    .burst_size(limit.burst_size)
                    .finish()
                    .context("Invalid rate limit configuration")?,
            );
            spot_routes.layer(GovernorLayer {
                config: governor_config,
            })
        }
        None => spot_routes,
    };

    let app = Router::new()
        // Health check
        .route("/health", get(handlers::health))
        .merge(spot_routes)
        // Middleware
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state);

    Ok(app)
}

fn load_spots(config: &Config) -> anyhow::Result<StaticSpotRepository> {
    match &config.spots_file {
        Some(path) => {
            tracing::info!("Loading spots from {}", path);
            StaticSpotRepository::from_json_file(path)
                .with_context(|| format!("Failed to load spots from {}", path))
        }
        None => {
            tracing::info!("SPOTS_FILE not set, serving reference spots");
            Ok(StaticSpotRepository::with_reference_spots())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,spots_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Spots API...");

    // Load configuration
    let config = Config::from_env();

    // Create adapters
    let spot_repo = Arc::new(load_spots(&config)?);
    tracing::info!(count = spot_repo.len(), "Spots loaded");

    // Create application services
    let spot_service = Arc::new(SpotService::new(spot_repo));

    let state = AppState {
        spot_service,
        config: config.clone(),
    };

    let rate_limit = config.rate_limit();
    match rate_limit {
        Some(limit) => tracing::info!(
            per_second = limit.per_second,
            burst = limit.burst_size,
            "Rate limiting enabled"
        ),
        None => tracing::info!("Rate limiting disabled"),
    }

    let app = build_router(state, rate_limit)?;

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("Invalid listen address {}:{}", config.host, config.port))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
