//! Stable application-wide constants.
//!
//! Server defaults and fallbacks for env-var-based configuration, plus the
//! structural constants of the distance and fare computations.

// --- Server defaults (used when HOST / PORT env vars are absent) ---

/// Default bind address for the HTTP server.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default port for the HTTP server.
pub const DEFAULT_PORT: u16 = 3000;

// --- Location resolution ---

/// Registered location used when a name is not found. Overridden by `HUB_LOCATION`.
pub const DEFAULT_HUB_LOCATION: &str = "hyderabad";

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Distances are reported (and priced) at this many decimal places.
pub const DISTANCE_DECIMAL_PLACES: u32 = 2;

// --- Suggestions ---

/// Default cap on the number of location suggestions returned per query.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 10;
/// Hard upper bound on suggestions, regardless of what the caller asks for.
pub const MAX_SUGGESTION_LIMIT: usize = 50;

// --- Fare display ---

/// Currency symbol prefixed to every displayed amount.
pub const CURRENCY_SYMBOL: &str = "₹";
