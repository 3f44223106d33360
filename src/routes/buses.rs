use crate::error::{AppError, Result};
use crate::models::{BusCategory, BusClass, BusClassInfo};
use crate::services::bus_options::{self, PricedBusOption};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Serialize)]
pub struct BusCategoryInfo {
    pub id: BusCategory,
    pub title: &'static str,
    pub description: &'static str,
    pub classes: Vec<BusClassInfo>,
}

impl From<BusCategory> for BusCategoryInfo {
    fn from(category: BusCategory) -> Self {
        BusCategoryInfo {
            id: category,
            title: category.title(),
            description: category.description(),
            classes: BusClass::catalog(category),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BusCatalogResponse {
    pub categories: Vec<BusCategoryInfo>,
}

/// GET /buses - All bus categories with their classes
pub async fn list_categories() -> Json<BusCatalogResponse> {
    Json(BusCatalogResponse {
        categories: BusCategory::ALL.into_iter().map(BusCategoryInfo::from).collect(),
    })
}

/// GET /buses/{category}/classes
pub async fn list_classes(Path(category): Path<String>) -> Result<Json<BusCategoryInfo>> {
    let category: BusCategory = category.parse().map_err(AppError::InvalidRequest)?;
    Ok(Json(category.into()))
}

/// Query parameters for the bus options list
#[derive(Debug, Deserialize)]
pub struct BusOptionsParams {
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub to: String,
    /// Fare rule-set used to price the options (default: local)
    pub category: Option<BusCategory>,
}

impl BusOptionsParams {
    pub fn validate(&self) -> Result<()> {
        if self.from.trim().is_empty() || self.to.trim().is_empty() {
            return Err(AppError::InvalidRequest(
                "Both 'from' and 'to' are required".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Serialize)]
pub struct BusOptionsResponse {
    pub from: String,
    pub to: String,
    pub category: BusCategory,
    pub buses: Vec<PricedBusOption>,
}

/// GET /buses/options - Buses serving a journey, each with its fare
pub async fn list_options(
    State(state): State<Arc<AppState>>,
    Query(params): Query<BusOptionsParams>,
) -> Result<Json<BusOptionsResponse>> {
    params.validate()?;

    let category = params.category.unwrap_or(BusCategory::Local);
    let buses =
        bus_options::priced_options(&state.fare_calculator, category, &params.from, &params.to);

    tracing::debug!(
        "Priced {} bus options for {} -> {} ({})",
        buses.len(),
        params.from,
        params.to,
        category
    );

    Ok(Json(BusOptionsResponse {
        from: params.from,
        to: params.to,
        category,
        buses,
    }))
}
