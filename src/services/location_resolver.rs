use crate::constants::DEFAULT_HUB_LOCATION;
use crate::models::Coordinates;
use std::collections::HashMap;

/// Registered place names (lower-case) and their coordinates.
const REGISTERED_LOCATIONS: [(&str, Coordinates); 9] = [
    ("hyderabad", Coordinates::from_static(17.3850, 78.4867)),
    ("karimnagar", Coordinates::from_static(18.4386, 79.1288)),
    ("khammam", Coordinates::from_static(17.2473, 80.1514)),
    ("mancherial", Coordinates::from_static(18.8718, 79.4506)),
    ("srisailam", Coordinates::from_static(16.0739, 78.8682)),
    ("vijayawada", Coordinates::from_static(16.5062, 80.6480)),
    ("bangalore", Coordinates::from_static(12.9716, 77.5946)),
    ("kurnool", Coordinates::from_static(15.8281, 78.0373)),
    ("ananthapur", Coordinates::from_static(14.6819, 77.6006)),
];

/// Outcome of resolving a place name.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolution {
    /// The name is in the registry
    Registered(Coordinates),
    /// The name is unknown; these are the hub coordinates
    Fallback(Coordinates),
}

impl Resolution {
    pub fn coordinates(&self) -> Coordinates {
        match self {
            Resolution::Registered(c) | Resolution::Fallback(c) => *c,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Resolution::Fallback(_))
    }
}

/// Static name → coordinate registry with a hub fallback.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    locations: HashMap<String, Coordinates>,
    hub_name: String,
    hub: Coordinates,
}

impl LocationRegistry {
    /// Build the registry, using `hub_name` as the fallback for unknown places.
    ///
    /// Fails if the hub itself is not a registered place.
    pub fn new(hub_name: &str) -> Result<Self, String> {
        let locations = registered_locations();

        let hub_key = hub_name.to_lowercase();
        let hub = *locations
            .get(&hub_key)
            .ok_or_else(|| format!("Hub location '{}' is not a registered location", hub_name))?;

        Ok(LocationRegistry {
            locations,
            hub_name: hub_key,
            hub,
        })
    }

    /// Case-insensitive exact lookup.
    pub fn lookup(&self, name: &str) -> Option<Coordinates> {
        self.locations.get(&name.to_lowercase()).copied()
    }

    /// Resolve a name, falling back to the hub when it is not registered.
    pub fn resolve(&self, name: &str) -> Resolution {
        match self.lookup(name) {
            Some(coords) => Resolution::Registered(coords),
            None => {
                tracing::debug!(
                    "Location '{}' not registered, falling back to hub '{}'",
                    name,
                    self.hub_name
                );
                Resolution::Fallback(self.hub)
            }
        }
    }

    pub fn hub_name(&self) -> &str {
        &self.hub_name
    }

    pub fn hub(&self) -> Coordinates {
        self.hub
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.locations.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for LocationRegistry {
    fn default() -> Self {
        let (hub_name, hub) = REGISTERED_LOCATIONS
            .iter()
            .find(|(name, _)| *name == DEFAULT_HUB_LOCATION)
            .copied()
            .unwrap_or(REGISTERED_LOCATIONS[0]);

        LocationRegistry {
            locations: registered_locations(),
            hub_name: hub_name.to_string(),
            hub,
        }
    }
}

fn registered_locations() -> HashMap<String, Coordinates> {
    REGISTERED_LOCATIONS
        .iter()
        .map(|(name, coords)| (name.to_string(), *coords))
        .collect()
}
