use axum::Router;
use busfare::config::Config;
use busfare::services::fare_calculator::FareCalculator;
use busfare::services::fare_policy::FarePolicy;
use busfare::services::location_resolver::LocationRegistry;
use busfare::AppState;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "busfare=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().map_err(|e| format!("Failed to load configuration: {}", e))?;

    tracing::info!("Starting busfare API server");
    tracing::info!(
        hub = %config.hub_location,
        policy = ?config.unknown_location_policy,
        "Configuration loaded successfully"
    );

    // Build the pricing tables once; handlers share them by reference
    let locations = LocationRegistry::new(&config.hub_location)?;
    let fare_calculator = FareCalculator::new(locations, FarePolicy::default());

    let state = Arc::new(AppState {
        fare_calculator,
        unknown_location_policy: config.unknown_location_policy.clone(),
        suggestion_limit: config.suggestion_limit,
    });

    // Build router with CORS and tracing
    let app = Router::new()
        .nest("/api/v1", busfare::routes::create_router(state))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr = config.server_address();
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
