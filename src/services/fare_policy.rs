//! Pricing rules for every (category, class) pair.
//!
//! City routes (local and district) price on distance bands. State routes
//! consult a per-class table of fixed route fares first and fall back to a
//! linear distance formula.

use crate::models::{BusClass, CityClass, DistanceKm, Fare, StateClass};
use std::collections::HashMap;

/// Authored "Garuda" route fares.
const PREMIUM_ROUTE_FARES: [(&str, u32); 10] = [
    ("hyderabad-karimnagar", 231),
    ("hyderabad-khammam", 296),
    ("hyderabad-mancherial", 348),
    ("srisailam-hyderabad", 369),
    ("hyderabad-srisailam", 345),
    ("hyderabad-vijayawada", 363),
    ("hyderabad-bangalore", 631),
    ("bangalore-hyderabad", 674),
    ("hyderabad-kurnool", 278),
    ("hyderabad-ananthapur", 471),
];

/// Authored "Vajra" route fares.
const SEMI_PREMIUM_ROUTE_FARES: [(&str, u32); 6] = [
    ("hyderabad-karimnagar", 231),
    ("hyderabad-khammam", 296),
    ("hyderabad-mancherial", 348),
    ("hyderabad-vijayawada", 352),
    ("hyderabad-bangalore", 674),
    ("hyderabad-kurnool", 278),
];

const PREMIUM_RATE_PER_KM: f64 = 15.0;
const SEMI_PREMIUM_RATE_PER_KM: f64 = 12.0;
const STATE_GENERIC_LOW_RATE_PER_KM: f64 = 10.0;
const STATE_GENERIC_HIGH_RATE_PER_KM: f64 = 20.0;

/// Normalized route key: lower-cased names joined by a hyphen.
pub fn route_key(from: &str, to: &str) -> String {
    format!("{}-{}", from.to_lowercase(), to.to_lowercase())
}

/// Fixed per-route fares for one state class.
///
/// Fares are direction-agnostic, but the table is authored asymmetrically:
/// the forward key is tried first, then the reversed one.
#[derive(Debug, Clone, Default)]
pub struct RoutePricingTable {
    fares: HashMap<String, u32>,
}

impl RoutePricingTable {
    pub fn from_entries(entries: &[(&str, u32)]) -> Self {
        RoutePricingTable {
            fares: entries
                .iter()
                .map(|(key, fare)| (key.to_string(), *fare))
                .collect(),
        }
    }

    pub fn lookup(&self, from: &str, to: &str) -> Option<u32> {
        self.fares
            .get(&route_key(from, to))
            .or_else(|| self.fares.get(&route_key(to, from)))
            .copied()
    }

    pub fn len(&self) -> usize {
        self.fares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fares.is_empty()
    }
}

/// The complete fare policy. Built once and shared by reference.
#[derive(Debug, Clone)]
pub struct FarePolicy {
    premium: RoutePricingTable,
    semi_premium: RoutePricingTable,
}

impl Default for FarePolicy {
    fn default() -> Self {
        FarePolicy {
            premium: RoutePricingTable::from_entries(&PREMIUM_ROUTE_FARES),
            semi_premium: RoutePricingTable::from_entries(&SEMI_PREMIUM_ROUTE_FARES),
        }
    }
}

impl FarePolicy {
    /// Price a journey. `from` and `to` are the names as supplied by the
    /// caller; only state classes use them, for route table lookups.
    pub fn price(&self, class: BusClass, from: &str, to: &str, distance: DistanceKm) -> Fare {
        match class {
            BusClass::City(class) => city_fare(class, distance),
            BusClass::State(class) => self.state_fare(class, from, to, distance),
        }
    }

    fn state_fare(&self, class: StateClass, from: &str, to: &str, distance: DistanceKm) -> Fare {
        let (table, rate) = match class {
            StateClass::Premium => (&self.premium, PREMIUM_RATE_PER_KM),
            StateClass::SemiPremium => (&self.semi_premium, SEMI_PREMIUM_RATE_PER_KM),
            StateClass::Other => {
                return Fare::range(
                    distance * STATE_GENERIC_LOW_RATE_PER_KM,
                    distance * STATE_GENERIC_HIGH_RATE_PER_KM,
                );
            }
        };

        match table.lookup(from, to) {
            Some(fare) => {
                tracing::debug!("Route table hit for {}: ₹{}", route_key(from, to), fare);
                Fare::Amount(fare)
            }
            None => Fare::amount(distance * rate),
        }
    }
}

fn city_fare(class: CityClass, distance: DistanceKm) -> Fare {
    let d = distance.as_km();
    match class {
        CityClass::Ordinary => {
            if d <= 4.0 {
                Fare::Amount(10)
            } else if d <= 6.0 {
                Fare::Amount(15)
            } else {
                Fare::amount(10.0 + distance * 2.5)
            }
        }
        CityClass::Express => {
            if d <= 2.0 {
                Fare::Amount(10)
            } else if d <= 6.0 {
                Fare::Amount(20)
            } else {
                Fare::amount(10.0 + distance * 3.0)
            }
        }
        CityClass::MetroDeluxe => Fare::amount(15.0 + distance * 2.0),
        CityClass::Deluxe => {
            if d <= 6.0 {
                Fare::Range { low: 15, high: 20 }
            } else {
                Fare::range(15.0 + distance * 2.0, 20.0 + distance * 2.0)
            }
        }
        CityClass::SuperLuxury => {
            if d <= 15.0 {
                Fare::Range { low: 40, high: 70 }
            } else if d <= 30.0 {
                Fare::Range { low: 70, high: 100 }
            } else {
                Fare::at_least(70.0 + distance * 2.0)
            }
        }
        CityClass::Other => Fare::Range { low: 10, high: 20 },
    }
}
