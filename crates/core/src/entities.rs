//! Domain entities extracted from farmer queries

use serde::{Deserialize, Serialize};

/// Crops the extractor recognizes, in match-priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Wheat,
    Rice,
    Cotton,
    Sugarcane,
    Potato,
    Tomato,
    Onion,
}

impl Crop {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wheat => "wheat",
            Self::Rice => "rice",
            Self::Cotton => "cotton",
            Self::Sugarcane => "sugarcane",
            Self::Potato => "potato",
            Self::Tomato => "tomato",
            Self::Onion => "onion",
        }
    }

    /// Title-cased name, e.g. `Wheat`
    pub fn title(&self) -> &'static str {
        match self {
            Self::Wheat => "Wheat",
            Self::Rice => "Rice",
            Self::Cotton => "Cotton",
            Self::Sugarcane => "Sugarcane",
            Self::Potato => "Potato",
            Self::Tomato => "Tomato",
            Self::Onion => "Onion",
        }
    }
}

impl std::fmt::Display for Crop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Locations the extractor recognizes, in match-priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Delhi,
    Punjab,
    Haryana,
    Up,
    Bihar,
    Maharashtra,
}

impl Location {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delhi => "delhi",
            Self::Punjab => "punjab",
            Self::Haryana => "haryana",
            Self::Up => "up",
            Self::Bihar => "bihar",
            Self::Maharashtra => "maharashtra",
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantity units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Kg,
    Quintal,
    Ton,
    Acre,
    Hectare,
}

impl Unit {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kg => "kg",
            Self::Quintal => "quintal",
            Self::Ton => "ton",
            Self::Acre => "acre",
            Self::Hectare => "hectare",
        }
    }

    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "kg" => Some(Self::Kg),
            "quintal" => Some(Self::Quintal),
            "ton" => Some(Self::Ton),
            "acre" => Some(Self::Acre),
            "hectare" => Some(Self::Hectare),
            _ => None,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quantity together with its unit; the two are always extracted as a pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quantity {
    /// Digits as written in the query
    pub amount: String,
    pub unit: Unit,
}

/// Entities extracted from a single query
///
/// Serializes flat as `{crop, location, quantity, unit}` with absent fields
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crop: Option<Crop>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<Unit>,
}

impl EntitySet {
    pub fn is_empty(&self) -> bool {
        self.crop.is_none()
            && self.location.is_none()
            && self.quantity.is_none()
            && self.unit.is_none()
    }

    /// Set quantity and unit together
    pub fn with_quantity(mut self, quantity: Quantity) -> Self {
        self.quantity = Some(quantity.amount);
        self.unit = Some(quantity.unit);
        self
    }
}
