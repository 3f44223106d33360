use busfare::config::{Config, UnknownLocationPolicy};
use busfare::services::fare_calculator::FareCalculator;
use busfare::services::fare_policy::FarePolicy;
use busfare::services::location_resolver::LocationRegistry;
use busfare::AppState;
use std::sync::Arc;

/// Get test configuration
#[allow(dead_code)]
pub fn get_test_config() -> Config {
    Config::default()
}

/// Build shared application state from a configuration
#[allow(dead_code)]
pub fn create_test_state(config: &Config) -> Arc<AppState> {
    let locations =
        LocationRegistry::new(&config.hub_location).expect("Test hub must be registered");

    Arc::new(AppState {
        fare_calculator: FareCalculator::new(locations, FarePolicy::default()),
        unknown_location_policy: config.unknown_location_policy.clone(),
        suggestion_limit: config.suggestion_limit,
    })
}

/// Router with the default (fallback) policy
#[allow(dead_code)]
pub fn setup_test_app() -> axum::Router {
    busfare::routes::create_router(create_test_state(&get_test_config()))
}

/// Router that rejects unregistered locations
#[allow(dead_code)]
pub fn setup_strict_test_app() -> axum::Router {
    let config = Config {
        unknown_location_policy: UnknownLocationPolicy::Reject,
        ..get_test_config()
    };
    busfare::routes::create_router(create_test_state(&config))
}
