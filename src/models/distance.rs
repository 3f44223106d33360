use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Mul;

/// Distance in kilometers
/// Prevents mixing up units and provides type safety
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceKm(pub f64);

impl DistanceKm {
    pub fn new(km: f64) -> Result<Self, String> {
        if km < 0.0 {
            return Err("Distance cannot be negative".to_string());
        }
        if !km.is_finite() {
            return Err("Distance must be a finite number".to_string());
        }
        Ok(DistanceKm(km))
    }

    /// Get the raw kilometers value
    pub fn as_km(self) -> f64 {
        self.0
    }

    /// Create from raw value without validation (use carefully)
    pub fn from_raw(km: f64) -> Self {
        DistanceKm(km)
    }

    /// Round to the given number of decimal places, half away from zero.
    pub fn round(self, decimal_places: u32) -> Self {
        let multiplier = 10_f64.powi(decimal_places as i32);
        DistanceKm((self.0 * multiplier).round() / multiplier)
    }
}

impl fmt::Display for DistanceKm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}km", self.0)
    }
}

impl Mul<f64> for DistanceKm {
    type Output = f64;

    fn mul(self, scalar: f64) -> f64 {
        self.0 * scalar
    }
}
