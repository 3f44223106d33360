use busfare::calculate_fare;
use busfare::models::{BusCategory, Coordinates};
use busfare::services::fare_calculator::FareCalculator;
use busfare::services::fare_policy::FarePolicy;
use busfare::services::location_resolver::LocationRegistry;

const PLACES: [&str; 9] = [
    "hyderabad",
    "karimnagar",
    "khammam",
    "mancherial",
    "srisailam",
    "vijayawada",
    "bangalore",
    "kurnool",
    "ananthapur",
];

#[test]
fn test_reference_distance() {
    let a = Coordinates::new(17.3850, 78.4867).unwrap();
    let b = Coordinates::new(18.4386, 79.1288).unwrap();
    let d = a.rounded_distance_to(&b).as_km();
    assert!((d - 135.43).abs() < 0.01, "d={}", d);
}

#[test]
fn test_distance_symmetric_across_registry() {
    for from in PLACES {
        for to in PLACES {
            let forward = calculate_fare(BusCategory::Local, from, to, "ordinary");
            let backward = calculate_fare(BusCategory::Local, to, from, "ordinary");
            assert_eq!(forward.distance_km, backward.distance_km, "{} <-> {}", from, to);
            assert!(forward.distance_km.as_km() >= 0.0);
            assert!(!forward.fare.is_empty());
        }
    }
}

#[test]
fn test_same_place_is_zero_distance() {
    for place in PLACES {
        let quote = calculate_fare(BusCategory::State, place, place, "other");
        assert_eq!(quote.distance_km.as_km(), 0.0);
        assert_eq!(quote.fare, "₹0 - ₹0");
    }
}

#[test]
fn test_premium_table_is_direction_agnostic() {
    let forward = calculate_fare(BusCategory::State, "hyderabad", "karimnagar", "premium");
    let reverse = calculate_fare(BusCategory::State, "karimnagar", "hyderabad", "premium");
    assert_eq!(forward.fare, "₹231");
    assert_eq!(reverse.fare, "₹231");
}

#[test]
fn test_display_names_price_like_slugs() {
    let pairs = [
        (BusCategory::State, "Garuda", "premium"),
        (BusCategory::State, "Vajra", "semi-premium"),
        (BusCategory::Local, "Super-Luxury", "super-luxury"),
        (BusCategory::District, "Metro Deluxe", "deluxe-eco"),
    ];
    for (category, name, slug) in pairs {
        let by_name = calculate_fare(category, "hyderabad", "kurnool", name);
        let by_slug = calculate_fare(category, "hyderabad", "kurnool", slug);
        assert_eq!(by_name, by_slug, "{} vs {}", name, slug);
    }
}

#[test]
fn test_long_city_journey_prices_open_ended() {
    // Hyderabad to Karimnagar is far beyond the top super-luxury band
    let quote = calculate_fare(BusCategory::Local, "hyderabad", "karimnagar", "super-luxury");
    assert!(quote.fare.ends_with('+'), "fare={}", quote.fare);
}

#[test]
fn test_unknown_everything_never_panics() {
    let quote = calculate_fare(BusCategory::State, "unknown-city-x", "unknown-city-y", "premium");
    assert_eq!(quote.fare, "₹0");
    assert_eq!(quote.unresolved.len(), 2);

    let quote = calculate_fare(BusCategory::District, "", "", "");
    assert_eq!(quote.fare, "₹10 - ₹20");
    assert_eq!(quote.bus_class, "other");
}

#[test]
fn test_custom_hub_changes_fallback_distance() {
    let registry = LocationRegistry::new("khammam").unwrap();
    let calc = FareCalculator::new(registry, FarePolicy::default());
    let quote = calc.calculate(BusCategory::State, "nowhere", "khammam", "premium");
    assert_eq!(quote.distance_km.as_km(), 0.0);

    let quote = calc.calculate(BusCategory::State, "nowhere", "hyderabad", "premium");
    // Khammam to Hyderabad, priced linearly because "nowhere-hyderabad" is not a table route
    let expected = (quote.distance_km.as_km() * 15.0).round() as u32;
    assert_eq!(quote.fare, format!("₹{}", expected));
}
