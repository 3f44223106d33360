use crate::models::{BusCategory, DistanceKm};
use crate::services::fare_calculator::FareCalculator;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Capacity {
    Low,
    Medium,
    High,
}

/// A scheduled service offered between any two stops.
#[derive(Debug, Clone, Serialize)]
pub struct BusOption {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub service_type: &'static str,
    pub duration_minutes: u32,
    pub next_arrival_minutes: u32,
    pub capacity: Capacity,
    pub features: &'static [&'static str],
    /// Class name handed to the fare calculator
    pub bus_class: &'static str,
}

/// A bus option with its fare for one journey.
#[derive(Debug, Clone, Serialize)]
pub struct PricedBusOption {
    #[serde(flatten)]
    pub option: BusOption,
    pub price: String,
    pub distance_km: DistanceKm,
}

pub const BUS_OPTIONS: [BusOption; 5] = [
    BusOption {
        id: "bus-1",
        name: "Express Route 101",
        service_type: "AC Express",
        duration_minutes: 25,
        next_arrival_minutes: 5,
        capacity: Capacity::Medium,
        features: &["AC", "GPS Tracking", "WiFi"],
        bus_class: "express",
    },
    BusOption {
        id: "bus-2",
        name: "City Connect 205",
        service_type: "Regular",
        duration_minutes: 35,
        next_arrival_minutes: 12,
        capacity: Capacity::High,
        features: &["GPS Tracking", "Low Floor"],
        bus_class: "ordinary",
    },
    BusOption {
        id: "bus-3",
        name: "Metro Link 308",
        service_type: "Premium",
        duration_minutes: 20,
        next_arrival_minutes: 8,
        capacity: Capacity::Low,
        features: &["AC", "GPS Tracking", "WiFi", "USB Charging"],
        bus_class: "deluxe-eco",
    },
    BusOption {
        id: "bus-4",
        name: "Local Line 112",
        service_type: "Regular",
        duration_minutes: 40,
        next_arrival_minutes: 15,
        capacity: Capacity::High,
        features: &["GPS Tracking"],
        bus_class: "ordinary",
    },
    BusOption {
        id: "bus-5",
        name: "Rapid Transit 401",
        service_type: "Express",
        duration_minutes: 28,
        next_arrival_minutes: 6,
        capacity: Capacity::Medium,
        features: &["GPS Tracking", "Low Floor"],
        bus_class: "express",
    },
];

/// Every bus option, priced for the journey `from` -> `to`.
pub fn priced_options(
    calculator: &FareCalculator,
    category: BusCategory,
    from: &str,
    to: &str,
) -> Vec<PricedBusOption> {
    BUS_OPTIONS
        .iter()
        .map(|option| {
            let quote = calculator.calculate(category, from, to, option.bus_class);
            PricedBusOption {
                option: option.clone(),
                price: quote.fare,
                distance_km: quote.distance_km,
            }
        })
        .collect()
}
