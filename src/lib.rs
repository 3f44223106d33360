// Library exports for testing and reusability

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use error::{AppError, Result};
pub use models::{BusCategory, FareQuote};
pub use services::fare_calculator::{calculate_fare, FareCalculator};

use config::UnknownLocationPolicy;

// App state for sharing across the application
pub struct AppState {
    pub fare_calculator: FareCalculator,
    pub unknown_location_policy: UnknownLocationPolicy,
    pub suggestion_limit: usize,
}
