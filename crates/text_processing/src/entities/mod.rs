//! Agricultural Entity Extraction
//!
//! Extracts from a farmer query:
//! - Crop (romanized Hindi, English or Devanagari name)
//! - Location (state or city)
//! - Quantity with its unit (kg, quintal, ton, acre, hectare)
//!
//! Each scan runs over the lower-cased text independently. Crop and location
//! tables are ordered and the first matching entry wins. Patterns are plain
//! substring alternations, so `up` also matches inside longer words.
//!
//! # Example
//!
//! ```
//! use krishi_mitra_core::{Crop, Unit};
//! use krishi_mitra_text_processing::EntityExtractor;
//!
//! let extractor = EntityExtractor::new();
//! let entities = extractor.extract("mujhe 5 kg aloo chahiye");
//!
//! assert_eq!(entities.crop, Some(Crop::Potato));
//! assert_eq!(entities.quantity.as_deref(), Some("5"));
//! assert_eq!(entities.unit, Some(Unit::Kg));
//! ```

use krishi_mitra_core::{Crop, EntitySet, Location, Quantity, Unit};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::Span;

static CROP_PATTERNS: Lazy<Vec<(Crop, Regex)>> = Lazy::new(|| {
    [
        (Crop::Wheat, r"gehun|wheat|गेहूं"),
        (Crop::Rice, r"chawal|rice|धान|चावल"),
        (Crop::Cotton, r"kapas|cotton|कपास"),
        (Crop::Sugarcane, r"ganna|sugarcane|गन्ना"),
        (Crop::Potato, r"aloo|potato|आलू"),
        (Crop::Tomato, r"tamatar|tomato|टमाटर"),
        (Crop::Onion, r"pyaz|onion|प्याज"),
    ]
    .into_iter()
    .map(|(crop, pattern)| (crop, Regex::new(pattern).unwrap()))
    .collect()
});

static LOCATION_PATTERNS: Lazy<Vec<(Location, Regex)>> = Lazy::new(|| {
    [
        (Location::Delhi, r"delhi|दिल्ली"),
        (Location::Punjab, r"punjab|पंजाब"),
        (Location::Haryana, r"haryana|हरियाणा"),
        (Location::Up, r"uttar pradesh|up|उत्तर प्रदेश"),
        (Location::Bihar, r"bihar|बिहार"),
        (Location::Maharashtra, r"maharashtra|महाराष्ट्र"),
    ]
    .into_iter()
    .map(|(location, pattern)| (location, Regex::new(pattern).unwrap()))
    .collect()
});

static QUANTITY_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s*(kg|quintal|ton|acre|hectare)").unwrap());

/// Rule-based entity extractor
pub struct EntityExtractor {
    span: Span,
}

impl EntityExtractor {
    pub fn new() -> Self {
        Self {
            span: tracing::debug_span!("entity_extractor"),
        }
    }

    /// Log under the given span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Extract all entities; absent ones are left as `None`
    pub fn extract(&self, text: &str) -> EntitySet {
        let _guard = self.span.enter();
        let text_lower = text.to_lowercase();

        let mut entities = EntitySet {
            crop: Self::find_crop(&text_lower),
            location: Self::find_location(&text_lower),
            ..Default::default()
        };
        if let Some(quantity) = Self::find_quantity(&text_lower) {
            entities = entities.with_quantity(quantity);
        }

        tracing::debug!(
            crop = ?entities.crop,
            location = ?entities.location,
            quantity = ?entities.quantity,
            unit = ?entities.unit,
            "Extracted entities"
        );

        entities
    }

    /// First crop in table order whose pattern matches
    fn find_crop(text_lower: &str) -> Option<Crop> {
        CROP_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(text_lower))
            .map(|(crop, _)| *crop)
    }

    fn find_location(text_lower: &str) -> Option<Location> {
        LOCATION_PATTERNS
            .iter()
            .find(|(_, pattern)| pattern.is_match(text_lower))
            .map(|(location, _)| *location)
    }

    /// First `<integer> <unit>` occurrence
    fn find_quantity(text_lower: &str) -> Option<Quantity> {
        let captures = QUANTITY_PATTERN.captures(text_lower)?;
        let amount = captures.get(1)?.as_str().to_string();
        let unit = Unit::from_str_loose(captures.get(2)?.as_str())?;
        Some(Quantity { amount, unit })
    }
}

impl Default for EntityExtractor {
    fn default() -> Self {
        Self::new()
    }
}
