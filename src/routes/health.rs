use crate::models::BusCategory;
use crate::AppState;
use axum::{extract::State, Json};
use serde_json::{json, Value};
use std::sync::Arc;

/// GET /health - Check that the fare calculator answers
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<Value> {
    let registry = state.fare_calculator.locations();
    let hub = registry.hub_name().to_string();

    // A hub-to-hub quote must price at zero distance
    let hub_quote = state
        .fare_calculator
        .calculate(BusCategory::Local, &hub, &hub, "ordinary");

    let mut status = "ok";
    let calculator = if hub_quote.distance_km.as_km() == 0.0 && !hub_quote.used_fallback() {
        json!("ok")
    } else {
        status = "error";
        json!({"error": format!("unexpected hub quote: {:?}", hub_quote)})
    };

    Json(json!({
        "status": status,
        "checks": {
            "calculator": calculator,
            "hub": hub,
            "locations": registry.names().len(),
        }
    }))
}
