use crate::error::Result;
use crate::models::{FareQuote, QuoteRequest};
use crate::AppState;
use axum::{extract::State, Json};
use std::sync::Arc;

/// POST /fares/quote
/// Price a journey between two named locations
pub async fn quote_fare(
    State(state): State<Arc<AppState>>,
    Json(request): Json<QuoteRequest>,
) -> Result<Json<FareQuote>> {
    tracing::info!(
        category = %request.category,
        from = %request.from,
        to = %request.to,
        bus_class = %request.bus_class,
        "Fare quote request"
    );

    let quote = state
        .fare_calculator
        .quote(&request, &state.unknown_location_policy)?;

    if quote.used_fallback() {
        tracing::warn!(
            "Quote used hub fallback for unregistered locations: {:?}",
            quote.unresolved
        );
    }

    Ok(Json(quote))
}
