use crate::constants::MAX_SUGGESTION_LIMIT;
use crate::error::{AppError, Result};
use crate::services::suggestions::{self, StopArea, STOP_AREAS};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Query parameters for stop suggestions
#[derive(Debug, Deserialize)]
pub struct SuggestParams {
    /// Text typed so far
    #[serde(default)]
    pub q: String,
    /// Maximum number of suggestions (default from config, max: 50)
    pub limit: Option<usize>,
}

impl SuggestParams {
    pub fn validate(&self) -> Result<()> {
        if let Some(limit) = self.limit {
            if limit == 0 || limit > MAX_SUGGESTION_LIMIT {
                return Err(AppError::InvalidRequest(format!(
                    "limit must be between 1 and {}",
                    MAX_SUGGESTION_LIMIT
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestResponse {
    pub query: String,
    pub suggestions: Vec<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct AreasResponse {
    pub areas: &'static [StopArea],
}

#[derive(Debug, Serialize)]
pub struct LocationsResponse {
    pub hub: String,
    pub locations: Vec<String>,
}

/// GET /locations/suggest - Stops matching the typed text
pub async fn suggest_locations(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SuggestParams>,
) -> Result<Json<SuggestResponse>> {
    params.validate()?;

    let limit = params.limit.unwrap_or(state.suggestion_limit);
    let suggestions = suggestions::suggest(&params.q, limit);

    tracing::debug!("Suggest '{}' returned {} stops", params.q, suggestions.len());

    Ok(Json(SuggestResponse {
        query: params.q,
        suggestions,
    }))
}

/// GET /locations/areas - Suggestion stops grouped by area
pub async fn list_areas() -> Json<AreasResponse> {
    Json(AreasResponse { areas: &STOP_AREAS })
}

/// GET /locations - Places the fare calculator can measure between
pub async fn list_locations(State(state): State<Arc<AppState>>) -> Json<LocationsResponse> {
    let registry = state.fare_calculator.locations();
    Json(LocationsResponse {
        hub: registry.hub_name().to_string(),
        locations: registry.names().into_iter().map(str::to_string).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suggest_params_validation() {
        let params = SuggestParams {
            q: "koti".to_string(),
            limit: None,
        };
        assert!(params.validate().is_ok());

        let params = SuggestParams {
            q: "koti".to_string(),
            limit: Some(50),
        };
        assert!(params.validate().is_ok());

        let params = SuggestParams {
            q: "koti".to_string(),
            limit: Some(0),
        };
        assert!(params.validate().is_err());

        let params = SuggestParams {
            q: "koti".to_string(),
            limit: Some(51),
        };
        assert!(params.validate().is_err());
    }
}
