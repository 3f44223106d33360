use serde::Serialize;

/// A named group of stops offered as route-search suggestions.
#[derive(Debug, Clone, Serialize)]
pub struct StopArea {
    pub area: &'static str,
    pub stops: &'static [&'static str],
}

pub const STOP_AREAS: [StopArea; 4] = [
    StopArea {
        area: "Central Hyderabad",
        stops: &[
            "Abids",
            "Koti",
            "Nampally",
            "Basheerbagh",
            "Himayatnagar",
            "Lakdikapul",
            "Hyderguda",
            "King Koti",
            "Chikkadpally",
            "Narayanguda",
        ],
    },
    StopArea {
        area: "Old City (South Hyderabad)",
        stops: &[
            "Charminar",
            "Mecca Masjid",
            "Falaknuma",
            "Shalibanda",
            "Barkas",
            "Chandrayangutta",
            "Dabeerpura",
            "Yakutpura",
            "Bahadurpura",
            "Santoshnagar",
        ],
    },
    StopArea {
        area: "North Hyderabad",
        stops: &[
            "Secunderabad",
            "Malkajgiri",
            "Tarnaka",
            "Lalaguda",
            "Nacharam",
            "Moula Ali",
            "ECIL",
            "Neredmet",
            "Kapra",
            "Kushaiguda",
        ],
    },
    StopArea {
        area: "West Hyderabad",
        stops: &[
            "Ameerpet",
            "Kukatpally",
            "Miyapur",
            "Moosapet",
            "Sanathnagar",
            "Balanagar",
            "SR Nagar (Sanathnagar)",
            "Erragadda",
            "Bharat Nagar",
            "Jagadgirigutta",
        ],
    },
];

/// Stops whose name contains `query` (case-insensitive), in catalog order.
///
/// An empty query suggests nothing. Whitespace is matched like any other text.
pub fn suggest(query: &str, limit: usize) -> Vec<&'static str> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    STOP_AREAS
        .iter()
        .flat_map(|area| area.stops.iter().copied())
        .filter(|stop| stop.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}
