pub mod bus_options;
pub mod fare_calculator;
pub mod fare_policy;
pub mod location_resolver;
pub mod suggestions;
