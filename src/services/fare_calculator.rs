use crate::config::UnknownLocationPolicy;
use crate::error::{AppError, Result};
use crate::models::{BusCategory, BusClass, FareQuote, QuoteRequest};
use crate::services::fare_policy::FarePolicy;
use crate::services::location_resolver::LocationRegistry;
use std::sync::OnceLock;

/// Resolves locations, measures the journey and prices it.
#[derive(Debug, Clone, Default)]
pub struct FareCalculator {
    locations: LocationRegistry,
    policy: FarePolicy,
}

impl FareCalculator {
    pub fn new(locations: LocationRegistry, policy: FarePolicy) -> Self {
        FareCalculator { locations, policy }
    }

    pub fn locations(&self) -> &LocationRegistry {
        &self.locations
    }

    /// Quote a fare. Never fails: unregistered names fall back to the hub and
    /// unrecognized classes get the category's generic fare.
    pub fn calculate(
        &self,
        category: BusCategory,
        from: &str,
        to: &str,
        class_name: &str,
    ) -> FareQuote {
        let from_resolution = self.locations.resolve(from);
        let to_resolution = self.locations.resolve(to);

        let distance = from_resolution
            .coordinates()
            .rounded_distance_to(&to_resolution.coordinates());

        let class = BusClass::parse(category, class_name);
        if !class.is_recognized() {
            tracing::debug!(
                "Unrecognized {} bus class '{}', using generic fare",
                category,
                class_name
            );
        }

        let fare = self.policy.price(class, from, to, distance);

        let unresolved: Vec<String> = [(from, from_resolution), (to, to_resolution)]
            .into_iter()
            .filter(|(_, resolution)| resolution.is_fallback())
            .map(|(name, _)| name.to_string())
            .collect();

        tracing::debug!(
            category = %category,
            bus_class = %class,
            distance_km = distance.as_km(),
            fare = %fare,
            "Priced {} -> {}",
            from,
            to
        );

        FareQuote {
            fare: fare.to_string(),
            distance_km: distance,
            category,
            bus_class: class.slug().to_string(),
            unresolved,
        }
    }

    /// Like [`calculate`](Self::calculate), but an unregistered location is
    /// reported instead of silently replaced by the hub.
    pub fn calculate_strict(
        &self,
        category: BusCategory,
        from: &str,
        to: &str,
        class_name: &str,
    ) -> Result<FareQuote> {
        for name in [from, to] {
            if self.locations.lookup(name).is_none() {
                return Err(AppError::UnknownLocation(name.to_string()));
            }
        }
        Ok(self.calculate(category, from, to, class_name))
    }

    /// Quote a request under the given unknown-location policy.
    pub fn quote(
        &self,
        request: &QuoteRequest,
        policy: &UnknownLocationPolicy,
    ) -> Result<FareQuote> {
        match policy {
            UnknownLocationPolicy::Fallback => Ok(self.calculate(
                request.category,
                &request.from,
                &request.to,
                &request.bus_class,
            )),
            UnknownLocationPolicy::Reject => self.calculate_strict(
                request.category,
                &request.from,
                &request.to,
                &request.bus_class,
            ),
        }
    }
}

/// Process-wide calculator built from the compiled-in tables.
pub fn default_calculator() -> &'static FareCalculator {
    static CALCULATOR: OnceLock<FareCalculator> = OnceLock::new();
    CALCULATOR.get_or_init(FareCalculator::default)
}

/// Quote a fare with the default calculator.
pub fn calculate_fare(category: BusCategory, from: &str, to: &str, class_name: &str) -> FareQuote {
    default_calculator().calculate(category, from, to, class_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_premium_route_uses_table() {
        let calc = FareCalculator::default();
        let quote = calc.calculate(BusCategory::State, "hyderabad", "karimnagar", "premium");
        assert_eq!(quote.fare, "₹231");
        assert!((quote.distance_km.as_km() - 135.43).abs() < 0.01);
        assert_eq!(quote.bus_class, "premium");
        assert!(!quote.used_fallback());
    }

    #[test]
    fn test_unknown_locations_fall_back_to_hub() {
        let calc = FareCalculator::default();
        let quote = calc.calculate(
            BusCategory::State,
            "unknown-city-x",
            "unknown-city-y",
            "premium",
        );
        // Both ends resolve to the hub
        assert_eq!(quote.distance_km.as_km(), 0.0);
        assert_eq!(quote.fare, "₹0");
        assert_eq!(quote.unresolved, vec!["unknown-city-x", "unknown-city-y"]);
    }

    #[test]
    fn test_one_unknown_location_measures_from_hub() {
        let calc = FareCalculator::default();
        let fallback = calc.calculate(BusCategory::State, "nowhere", "karimnagar", "semi-premium");
        let direct = calc.calculate(BusCategory::State, "hyderabad", "karimnagar", "semi-premium");
        assert_eq!(fallback.distance_km, direct.distance_km);
        assert_eq!(fallback.unresolved, vec!["nowhere"]);
        // The route table is keyed on the supplied names, so the fallback misses it
        assert_eq!(direct.fare, "₹231");
        assert_ne!(fallback.fare, direct.fare);
    }

    #[test]
    fn test_strict_rejects_unknown() {
        let calc = FareCalculator::default();
        let err = calc
            .calculate_strict(BusCategory::Local, "hyderabad", "atlantis", "ordinary")
            .unwrap_err();
        assert!(matches!(err, AppError::UnknownLocation(ref name) if name == "atlantis"));

        assert!(calc
            .calculate_strict(BusCategory::Local, "Hyderabad", "Khammam", "ordinary")
            .is_ok());
    }

    #[test]
    fn test_quote_respects_policy() {
        let calc = FareCalculator::default();
        let request = QuoteRequest {
            category: BusCategory::District,
            from: "atlantis".to_string(),
            to: "hyderabad".to_string(),
            bus_class: "Deluxe".to_string(),
        };

        let quote = calc.quote(&request, &UnknownLocationPolicy::Fallback).unwrap();
        assert_eq!(quote.fare, "₹15 - ₹20");
        assert!(calc.quote(&request, &UnknownLocationPolicy::Reject).is_err());
    }

    #[test]
    fn test_idempotent() {
        let a = calculate_fare(BusCategory::Local, "kurnool", "ananthapur", "super-luxury");
        let b = calculate_fare(BusCategory::Local, "kurnool", "ananthapur", "super-luxury");
        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }
}
