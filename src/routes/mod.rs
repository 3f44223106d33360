pub mod buses;
pub mod fares;
pub mod health;
pub mod locations;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/fares/quote", post(fares::quote_fare))
        .route("/buses", get(buses::list_categories))
        .route("/buses/options", get(buses::list_options))
        .route("/buses/{category}/classes", get(buses::list_classes))
        .route("/locations", get(locations::list_locations))
        .route("/locations/suggest", get(locations::suggest_locations))
        .route("/locations/areas", get(locations::list_areas))
        .route("/health", get(health::health_check))
        .with_state(state)
}
