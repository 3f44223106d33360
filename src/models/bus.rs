use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Top-level service tier. Selects which pricing rule-set applies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BusCategory {
    Local,
    District,
    State,
}

impl BusCategory {
    pub const ALL: [BusCategory; 3] = [
        BusCategory::Local,
        BusCategory::District,
        BusCategory::State,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            BusCategory::Local => "Local City Bus",
            BusCategory::District => "District Express",
            BusCategory::State => "State Highway",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            BusCategory::Local => "City and local area buses",
            BusCategory::District => "Inter-district transportation",
            BusCategory::State => "Interstate bus services",
        }
    }

    /// Local and district buses share the city fare table.
    pub fn uses_city_fares(&self) -> bool {
        matches!(self, BusCategory::Local | BusCategory::District)
    }
}

impl fmt::Display for BusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusCategory::Local => write!(f, "local"),
            BusCategory::District => write!(f, "district"),
            BusCategory::State => write!(f, "state"),
        }
    }
}

impl FromStr for BusCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(BusCategory::Local),
            "district" => Ok(BusCategory::District),
            "state" => Ok(BusCategory::State),
            _ => Err(format!(
                "Invalid bus category: '{}'. Use 'local', 'district' or 'state'",
                s
            )),
        }
    }
}

/// Classes offered on local and district routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CityClass {
    Ordinary,
    Express,
    MetroDeluxe,
    Deluxe,
    SuperLuxury,
    Other,
}

/// Classes offered on state routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateClass {
    Premium,
    SemiPremium,
    Other,
}

/// A bus class, tagged by the category family it belongs to.
///
/// Free-text class names are mapped to a variant once, at the boundary, so the
/// pricing rules never branch on display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusClass {
    City(CityClass),
    State(StateClass),
}

/// Catalog entry describing a recognized class.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BusClassInfo {
    pub slug: &'static str,
    pub name: &'static str,
}

const CITY_CLASSES: [CityClass; 5] = [
    CityClass::Ordinary,
    CityClass::Express,
    CityClass::MetroDeluxe,
    CityClass::Deluxe,
    CityClass::SuperLuxury,
];

const STATE_CLASSES: [StateClass; 2] = [StateClass::Premium, StateClass::SemiPremium];

impl BusClass {
    /// Map a class name to its variant within `category`.
    ///
    /// Matching is exact on either the slug or the display name. Anything else
    /// maps to the category's `Other` variant, which carries a generic fare.
    pub fn parse(category: BusCategory, name: &str) -> Self {
        if category.uses_city_fares() {
            let class = match name {
                "ordinary" | "City Ordinary" => CityClass::Ordinary,
                "express" | "Metro Express" | "Metro Express (Non-AC)" => CityClass::Express,
                "deluxe-eco" | "Metro Deluxe" => CityClass::MetroDeluxe,
                "deluxe" | "Deluxe" => CityClass::Deluxe,
                "super-luxury" | "Super-Luxury" => CityClass::SuperLuxury,
                _ => CityClass::Other,
            };
            BusClass::City(class)
        } else {
            let class = match name {
                "premium" | "Garuda" => StateClass::Premium,
                "semi-premium" | "Vajra" => StateClass::SemiPremium,
                _ => StateClass::Other,
            };
            BusClass::State(class)
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            BusClass::City(CityClass::Ordinary) => "ordinary",
            BusClass::City(CityClass::Express) => "express",
            BusClass::City(CityClass::MetroDeluxe) => "deluxe-eco",
            BusClass::City(CityClass::Deluxe) => "deluxe",
            BusClass::City(CityClass::SuperLuxury) => "super-luxury",
            BusClass::State(StateClass::Premium) => "premium",
            BusClass::State(StateClass::SemiPremium) => "semi-premium",
            BusClass::City(CityClass::Other) | BusClass::State(StateClass::Other) => "other",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BusClass::City(CityClass::Ordinary) => "City Ordinary",
            BusClass::City(CityClass::Express) => "Metro Express",
            BusClass::City(CityClass::MetroDeluxe) => "Metro Deluxe",
            BusClass::City(CityClass::Deluxe) => "Deluxe",
            BusClass::City(CityClass::SuperLuxury) => "Super-Luxury",
            BusClass::State(StateClass::Premium) => "Garuda",
            BusClass::State(StateClass::SemiPremium) => "Vajra",
            BusClass::City(CityClass::Other) | BusClass::State(StateClass::Other) => "Other",
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(
            self,
            BusClass::City(CityClass::Other) | BusClass::State(StateClass::Other)
        )
    }

    /// Recognized classes of a category, in display order.
    pub fn catalog(category: BusCategory) -> Vec<BusClassInfo> {
        let classes: Vec<BusClass> = if category.uses_city_fares() {
            CITY_CLASSES.iter().map(|c| BusClass::City(*c)).collect()
        } else {
            STATE_CLASSES.iter().map(|c| BusClass::State(*c)).collect()
        };

        classes
            .into_iter()
            .map(|class| BusClassInfo {
                slug: class.slug(),
                name: class.display_name(),
            })
            .collect()
    }
}

impl fmt::Display for BusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug())
    }
}
