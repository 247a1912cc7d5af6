//! Static agronomic knowledge base
//!
//! Built once at startup (from the built-in table or a knowledge file) and
//! shared read-only across requests. No mutation is exposed after
//! construction.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::RagError;

/// Guideline topic consulted for irrigation queries
pub const IRRIGATION_TOPIC: &str = "irrigation";
/// Guideline topic for pesticide/fungicide spraying
pub const SPRAYING_TOPIC: &str = "spraying";

/// Agronomic profile of a crop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropProfile {
    pub sowing_season: String,
    pub harvesting: String,
    pub water_requirement: String,
    pub fertilizer: String,
    #[serde(default)]
    pub varieties: Vec<String>,
    #[serde(default)]
    pub diseases: Vec<String>,
    pub ideal_temp: String,
    pub soil_ph: String,
}

/// Condition key → advice text, in table order
pub type Guidelines = IndexMap<String, String>;

/// Market-side knowledge
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketInsights {
    #[serde(default)]
    pub price_factors: Vec<String>,
    #[serde(default)]
    pub selling_tips: Vec<String>,
}

/// Read-only agronomic knowledge table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    crops: BTreeMap<String, CropProfile>,
    /// Topic → (condition → advice)
    #[serde(default)]
    weather_guidelines: BTreeMap<String, Guidelines>,
    #[serde(default)]
    market_insights: MarketInsights,
}

impl KnowledgeBase {
    /// The built-in table
    pub fn builtin() -> Self {
        let mut crops = BTreeMap::new();
        crops.insert(
            "wheat".to_string(),
            CropProfile {
                sowing_season: "Rabi (October-December)".to_string(),
                harvesting: "April-May".to_string(),
                water_requirement: "Medium (4-6 irrigations)".to_string(),
                fertilizer: "NPK 120:60:40 kg/hectare".to_string(),
                varieties: strings(&["HD-2967", "PBW-343", "DBW-17"]),
                diseases: strings(&["Rust", "Bunt", "Leaf blight"]),
                ideal_temp: "15-25°C".to_string(),
                soil_ph: "6.0-7.5".to_string(),
            },
        );
        crops.insert(
            "rice".to_string(),
            CropProfile {
                sowing_season: "Kharif (May-July)".to_string(),
                harvesting: "October-December".to_string(),
                water_requirement: "High (standing water)".to_string(),
                fertilizer: "NPK 100:50:50 kg/hectare".to_string(),
                varieties: strings(&["Pusa-44", "IR-64", "Swarna"]),
                diseases: strings(&["Blast", "Sheath blight", "Brown spot"]),
                ideal_temp: "20-35°C".to_string(),
                soil_ph: "5.5-7.0".to_string(),
            },
        );

        let mut weather_guidelines = BTreeMap::new();
        weather_guidelines.insert(
            IRRIGATION_TOPIC.to_string(),
            guidelines(&[
                ("high_humidity", "Delay irrigation if humidity >80%"),
                (
                    "rainfall_expected",
                    "Skip irrigation if rain expected within 24 hours",
                ),
                ("temperature", "Best irrigation time: early morning or evening"),
            ]),
        );
        weather_guidelines.insert(
            SPRAYING_TOPIC.to_string(),
            guidelines(&[
                ("wind_speed", "Avoid spraying if wind speed >10 km/h"),
                ("temperature", "Spray when temperature <30°C"),
                ("humidity", "Best humidity range: 60-80%"),
            ]),
        );

        let market_insights = MarketInsights {
            price_factors: strings(&[
                "Seasonal demand",
                "Weather conditions",
                "Government procurement",
                "Export policies",
                "Storage capacity",
            ]),
            selling_tips: strings(&[
                "Monitor MSP announcements",
                "Check multiple mandis",
                "Consider storage costs",
                "Track festival seasons",
            ]),
        };

        Self {
            crops,
            weather_guidelines,
            market_insights,
        }
    }

    /// Profile for a crop name (case-insensitive)
    pub fn crop(&self, name: &str) -> Option<&CropProfile> {
        self.crops.get(&name.to_lowercase())
    }

    /// All crop profiles, keyed by name
    pub fn crops(&self) -> impl Iterator<Item = (&str, &CropProfile)> {
        self.crops.iter().map(|(name, profile)| (name.as_str(), profile))
    }

    /// `(condition, advice)` pairs of a topic, in table order
    pub fn guidelines(&self, topic: &str) -> impl Iterator<Item = (&str, &str)> {
        self.weather_guidelines
            .get(topic)
            .into_iter()
            .flat_map(|entries| entries.iter())
            .map(|(condition, advice)| (condition.as_str(), advice.as_str()))
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.weather_guidelines.keys().map(String::as_str)
    }

    pub fn market_insights(&self) -> &MarketInsights {
        &self.market_insights
    }

    /// Check the invariants retrieval relies on
    pub fn validate(&self) -> Result<(), RagError> {
        if self.crops.is_empty() {
            return Err(RagError::InvalidKnowledge(
                "at least one crop is required".to_string(),
            ));
        }

        for (name, profile) in &self.crops {
            if name != &name.to_lowercase() {
                return Err(RagError::InvalidKnowledge(format!(
                    "crop key '{}' must be lower-case",
                    name
                )));
            }
            let required = [
                ("sowing_season", &profile.sowing_season),
                ("water_requirement", &profile.water_requirement),
                ("fertilizer", &profile.fertilizer),
            ];
            for (field, value) in required {
                if value.trim().is_empty() {
                    return Err(RagError::InvalidKnowledge(format!(
                        "crop '{}' has an empty {}",
                        name, field
                    )));
                }
            }
        }

        if self.guidelines(IRRIGATION_TOPIC).next().is_none() {
            return Err(RagError::InvalidKnowledge(format!(
                "guideline topic '{}' is required",
                IRRIGATION_TOPIC
            )));
        }

        Ok(())
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn guidelines(entries: &[(&str, &str)]) -> Guidelines {
    entries
        .iter()
        .map(|(condition, advice)| (condition.to_string(), advice.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_crops() {
        let kb = KnowledgeBase::builtin();
        let wheat = kb.crop("wheat").unwrap();
        assert_eq!(wheat.fertilizer, "NPK 120:60:40 kg/hectare");
        assert_eq!(wheat.varieties[0], "HD-2967");
        assert_eq!(kb.crop("Rice").unwrap().sowing_season, "Kharif (May-July)");
        assert!(kb.crop("potato").is_none());
        assert_eq!(kb.crops().count(), 2);
    }

    #[test]
    fn test_guidelines_keep_table_order() {
        let kb = KnowledgeBase::builtin();
        let conditions: Vec<&str> = kb
            .guidelines(SPRAYING_TOPIC)
            .map(|(condition, _)| condition)
            .collect();
        assert_eq!(conditions, vec!["wind_speed", "temperature", "humidity"]);
        assert_eq!(
            kb.guidelines(IRRIGATION_TOPIC).next(),
            Some(("high_humidity", "Delay irrigation if humidity >80%"))
        );
        assert_eq!(kb.guidelines("harvest").count(), 0);
    }

    #[test]
    fn test_market_insights() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.market_insights().selling_tips.len(), 4);
        assert_eq!(kb.market_insights().price_factors[0], "Seasonal demand");
    }

    #[test]
    fn test_builtin_is_valid() {
        assert!(KnowledgeBase::builtin().validate().is_ok());
    }

    #[test]
    fn test_guidelines_serialize_as_condition_map() {
        let value = serde_json::to_value(KnowledgeBase::builtin()).unwrap();
        assert_eq!(
            value["weather_guidelines"]["irrigation"]["rainfall_expected"],
            "Skip irrigation if rain expected within 24 hours"
        );
        let keys: Vec<&String> = value["weather_guidelines"]["spraying"]
            .as_object()
            .unwrap()
            .keys()
            .collect();
        assert_eq!(keys.len(), 3);
    }

    #[test]
    fn test_validate_rejects_missing_irrigation() {
        let mut kb = KnowledgeBase::builtin();
        kb.weather_guidelines.remove(IRRIGATION_TOPIC);
        assert!(matches!(kb.validate(), Err(RagError::InvalidKnowledge(_))));
    }
}
