use crate::constants::CURRENCY_SYMBOL;
use crate::models::{BusCategory, DistanceKm};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A priced fare, before display formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fare {
    /// A single amount, e.g. `₹35`
    Amount(u32),
    /// An inclusive range, e.g. `₹15 - ₹20`
    Range { low: u32, high: u32 },
    /// An open-ended amount, e.g. `₹170+`
    AtLeast(u32),
}

impl Fare {
    /// Amount from a computed value, rounded to the nearest rupee (half away from zero).
    pub fn amount(value: f64) -> Self {
        Fare::Amount(rupees(value))
    }

    pub fn range(low: f64, high: f64) -> Self {
        Fare::Range {
            low: rupees(low),
            high: rupees(high),
        }
    }

    pub fn at_least(value: f64) -> Self {
        Fare::AtLeast(rupees(value))
    }
}

/// Round to whole rupees. Negative or NaN inputs clamp to zero.
fn rupees(value: f64) -> u32 {
    value.round() as u32
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fare::Amount(v) => write!(f, "{}{}", CURRENCY_SYMBOL, v),
            Fare::Range { low, high } => write!(
                f,
                "{}{} - {}{}",
                CURRENCY_SYMBOL, low, CURRENCY_SYMBOL, high
            ),
            Fare::AtLeast(v) => write!(f, "{}{}+", CURRENCY_SYMBOL, v),
        }
    }
}

/// Request body for a fare quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub category: BusCategory,
    pub from: String,
    pub to: String,
    pub bus_class: String,
}

/// The result of pricing one journey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FareQuote {
    /// Display-ready fare, e.g. `₹231` or `₹40 - ₹70`
    pub fare: String,
    /// Great-circle distance, rounded to two decimals
    pub distance_km: DistanceKm,
    pub category: BusCategory,
    /// Slug of the class the name mapped to (`other` when unrecognized)
    pub bus_class: String,
    /// Input names that were not registered and fell back to the hub
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

impl FareQuote {
    pub fn used_fallback(&self) -> bool {
        !self.unresolved.is_empty()
    }
}
