use crate::constants::{DISTANCE_DECIMAL_PLACES, EARTH_RADIUS_KM};
use crate::models::DistanceKm;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&lat) {
            return Err(format!(
                "Invalid latitude: {} (must be between -90 and 90)",
                lat
            ));
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(format!(
                "Invalid longitude: {} (must be between -180 and 180)",
                lng
            ));
        }
        Ok(Coordinates { lat, lng })
    }

    /// Build coordinates from compiled-in constants that are known to be in range.
    pub(crate) const fn from_static(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    /// Calculate distance between two coordinates using Haversine formula
    /// Returns unrounded distance in kilometers
    pub fn distance_to(&self, other: &Coordinates) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS_KM * c
    }

    /// Great-circle distance rounded to two decimal places.
    ///
    /// This is the distance every fare band is evaluated against, so band
    /// edges compare the rounded value, not the raw haversine output.
    pub fn rounded_distance_to(&self, other: &Coordinates) -> DistanceKm {
        DistanceKm::from_raw(self.distance_to(other)).round(DISTANCE_DECIMAL_PLACES)
    }
}
