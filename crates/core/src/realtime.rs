//! Real-time weather and market snapshot
//!
//! The snapshot is produced by external fetchers and handed to the advisory
//! core already resolved. Any part of it may be missing; every accessor
//! falls back to a fixed default instead of failing:
//!
//! | Field | Default |
//! |-------|---------|
//! | `weather.current.temperature` | [`DEFAULT_TEMPERATURE`] (25 °C) |
//! | `weather.current.humidity` | [`DEFAULT_HUMIDITY`] (60 %) |
//! | `market.price` | [`DEFAULT_PRICE`] (0 ₹/quintal) |
//! | `market.change` | [`DEFAULT_CHANGE`] (`"N/A"`) |

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Temperature used when the snapshot has none (°C)
pub const DEFAULT_TEMPERATURE: f64 = 25.0;
/// Relative humidity used when the snapshot has none (%)
pub const DEFAULT_HUMIDITY: f64 = 60.0;
/// Market price used when the snapshot has none (₹/quintal)
pub const DEFAULT_PRICE: f64 = 0.0;
/// Price change label used when the snapshot has none
pub const DEFAULT_CHANGE: &str = "N/A";

/// Current weather conditions
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    #[serde(default)]
    pub temperature: Option<f64>,
    #[serde(default)]
    pub humidity: Option<f64>,
}

/// Weather provider output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    #[serde(default)]
    pub current: Option<CurrentConditions>,
}

/// Market provider output
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    #[serde(default)]
    pub price: Option<f64>,
    /// Change label such as `"+5"` or `"-2.5%"`; numbers are accepted too
    #[serde(default, deserialize_with = "deserialize_change")]
    pub change: Option<String>,
}

/// Snapshot of externally fetched signals for one request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RealTimeData {
    #[serde(default)]
    pub weather: Option<WeatherSnapshot>,
    #[serde(default)]
    pub market: Option<MarketSnapshot>,
}

impl RealTimeData {
    /// Empty snapshot; every accessor returns its default
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a snapshot from loosely-typed JSON.
    ///
    /// Never fails: missing or wrong-typed fields are left absent.
    pub fn from_json(value: &Value) -> Self {
        let current = value.pointer("/weather/current").map(|current| CurrentConditions {
            temperature: current.get("temperature").and_then(Value::as_f64),
            humidity: current.get("humidity").and_then(Value::as_f64),
        });
        let weather = value
            .get("weather")
            .filter(|w| w.is_object())
            .map(|_| WeatherSnapshot { current });

        let market = value
            .get("market")
            .filter(|m| m.is_object())
            .map(|market| MarketSnapshot {
                price: market.get("price").and_then(Value::as_f64),
                change: market.get("change").and_then(|change| match change {
                    Value::String(s) => Some(s.clone()),
                    Value::Number(n) => Some(n.to_string()),
                    _ => None,
                }),
            });

        Self { weather, market }
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.current_mut().temperature = Some(temperature);
        self
    }

    pub fn with_humidity(mut self, humidity: f64) -> Self {
        self.current_mut().humidity = Some(humidity);
        self
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.market.get_or_insert_with(MarketSnapshot::default).price = Some(price);
        self
    }

    pub fn with_change(mut self, change: impl Into<String>) -> Self {
        self.market.get_or_insert_with(MarketSnapshot::default).change = Some(change.into());
        self
    }

    fn current_mut(&mut self) -> &mut CurrentConditions {
        self.weather
            .get_or_insert_with(WeatherSnapshot::default)
            .current
            .get_or_insert_with(CurrentConditions::default)
    }

    fn current(&self) -> Option<&CurrentConditions> {
        self.weather.as_ref().and_then(|w| w.current.as_ref())
    }

    /// Current temperature in °C, or [`DEFAULT_TEMPERATURE`]
    pub fn temperature(&self) -> f64 {
        self.current()
            .and_then(|c| c.temperature)
            .unwrap_or(DEFAULT_TEMPERATURE)
    }

    /// Current relative humidity in %, or [`DEFAULT_HUMIDITY`]
    pub fn humidity(&self) -> f64 {
        self.current()
            .and_then(|c| c.humidity)
            .unwrap_or(DEFAULT_HUMIDITY)
    }

    /// Market price in ₹/quintal, or [`DEFAULT_PRICE`]
    pub fn price(&self) -> f64 {
        self.market
            .as_ref()
            .and_then(|m| m.price)
            .unwrap_or(DEFAULT_PRICE)
    }

    /// Price change label, or [`DEFAULT_CHANGE`]
    pub fn change(&self) -> &str {
        self.market
            .as_ref()
            .and_then(|m| m.change.as_deref())
            .unwrap_or(DEFAULT_CHANGE)
    }
}

fn deserialize_change<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Change {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Change>::deserialize(deserializer)?.map(|change| match change {
        Change::Text(s) => s,
        Change::Number(n) => n.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_when_empty() {
        let data = RealTimeData::empty();
        assert_eq!(data.temperature(), 25.0);
        assert_eq!(data.humidity(), 60.0);
        assert_eq!(data.price(), 0.0);
        assert_eq!(data.change(), "N/A");
    }

    #[test]
    fn test_partial_deserialize() {
        let data: RealTimeData =
            serde_json::from_value(json!({"weather": {"current": {"humidity": 85}}})).unwrap();
        assert_eq!(data.humidity(), 85.0);
        assert_eq!(data.temperature(), 25.0);
        assert_eq!(data.change(), "N/A");
    }

    #[test]
    fn test_numeric_change_accepted() {
        let data: RealTimeData =
            serde_json::from_value(json!({"market": {"price": 2100, "change": 5}})).unwrap();
        assert_eq!(data.price(), 2100.0);
        assert_eq!(data.change(), "5");
    }

    #[test]
    fn test_from_json_ignores_wrong_types() {
        let data = RealTimeData::from_json(&json!({
            "weather": {"current": {"temperature": "hot", "humidity": 35.5}},
            "market": {"price": null, "change": "+3%"}
        }));
        assert_eq!(data.temperature(), 25.0);
        assert_eq!(data.humidity(), 35.5);
        assert_eq!(data.price(), 0.0);
        assert_eq!(data.change(), "+3%");

        let junk = RealTimeData::from_json(&json!("not an object"));
        assert_eq!(junk, RealTimeData::empty());
    }

    #[test]
    fn test_builders() {
        let data = RealTimeData::empty()
            .with_temperature(32.0)
            .with_humidity(70.0)
            .with_price(2150.0)
            .with_change("+5");
        assert_eq!(data.temperature(), 32.0);
        assert_eq!(data.humidity(), 70.0);
        assert_eq!(data.price(), 2150.0);
        assert_eq!(data.change(), "+5");
    }
}
