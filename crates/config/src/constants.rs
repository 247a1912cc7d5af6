//! Centralized constants for the advisory pipeline
//!
//! Thresholds and confidence values live here so the classifiers and the
//! response builders agree on them. Real-time defaults and the base
//! response confidence belong to the core types that apply them.

/// Confidence values
pub mod confidence {
    /// Score contributed by each pattern match during intent classification
    pub const PER_MATCH_WEIGHT: f64 = 0.3;

    /// Sentinel confidence when no intent pattern matched
    pub const GENERAL_FALLBACK: f64 = 0.5;

    pub const WEATHER: f64 = 0.9;
    pub const MARKET: f64 = 0.8;
    pub const FERTILIZER: f64 = 0.85;
    pub const SCHEME: f64 = 0.8;

    /// General advice when the crop is unknown to the knowledge base
    pub const GENERAL_UNKNOWN_CROP: f64 = 0.6;
}

/// Weather thresholds used by the response builders
pub mod thresholds {
    /// Above this relative humidity (%), irrigation is delayed
    pub const IRRIGATION_HIGH_HUMIDITY: f64 = 80.0;

    /// Below this relative humidity (%), extra watering is advised
    pub const IRRIGATION_LOW_HUMIDITY: f64 = 40.0;

    /// Above this relative humidity (%), fungal disease risk is high
    pub const PEST_FUNGAL_HUMIDITY: f64 = 75.0;

    /// Above this temperature (°C), fertilizer goes on in the evening
    pub const FERTILIZER_HOT_TEMPERATURE: f64 = 30.0;
}

/// Placeholders used when an entity is absent
pub mod placeholders {
    /// Crop label in market advice
    pub const MARKET_CROP: &str = "your crop";

    /// Crop assumed for fertilizer advice
    pub const FERTILIZER_CROP: &str = "wheat";

    /// Crop label in pest advice
    pub const PEST_CROP: &str = "crop";
}

/// Environment variable handling
pub mod env {
    /// Prefix for settings overrides (`KRISHI_MITRA__OBSERVABILITY__LOG_LEVEL`)
    pub const PREFIX: &str = "KRISHI_MITRA";

    /// Selects `config/{env}.*`
    pub const ENVIRONMENT_VAR: &str = "KRISHI_MITRA_ENV";
}
