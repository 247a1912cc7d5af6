//! Response Generation
//!
//! Builds the advisory from the classified intent, extracted entities,
//! retrieved context and the real-time snapshot. A base response (sources
//! from the context, [`BASE_CONFIDENCE`]) is overlaid with the patch of the
//! intent's builder:
//!
//! | Intent | Builder |
//! |--------|---------|
//! | weather, irrigation | humidity-driven irrigation advice |
//! | market | price trend advice |
//! | fertilizer | crop recipe, application timing by temperature |
//! | pest | fungal risk by humidity, safety warnings |
//! | scheme | government support programmes |
//! | crop, general | crop profile summary or general help |
//!
//! [`BASE_CONFIDENCE`]: krishi_mitra_core::BASE_CONFIDENCE

use std::sync::Arc;

use krishi_mitra_config::constants::{confidence, placeholders, thresholds};
use krishi_mitra_core::{Context, EntitySet, Intent, RealTimeData, Response, ResponsePatch};
use krishi_mitra_rag::KnowledgeBase;
use tracing::Span;

/// Fertilizer recipe when the crop is not in the knowledge base
pub const GENERIC_FERTILIZER_ADVICE: &str =
    "General fertilizer recommendation: NPK 120:60:60 kg/hectare";

/// Warnings attached to every pest response
pub const PEST_WARNINGS: [&str; 2] = [
    "Always read pesticide labels",
    "Use protective equipment while spraying",
];

/// Synthesizes advisory responses
pub struct ResponseGenerator {
    knowledge: Arc<KnowledgeBase>,
    span: Span,
}

impl ResponseGenerator {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            span: tracing::debug_span!("response_generator"),
        }
    }

    /// Log under the given span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Build the response for one query
    pub fn generate_response(
        &self,
        intent: Intent,
        entities: &EntitySet,
        context: &Context,
        data: &RealTimeData,
    ) -> Response {
        let _guard = self.span.enter();
        let base = Response::base(context.sources.clone());

        let patch = match intent {
            Intent::Weather | Intent::Irrigation => self.weather_advice(data),
            Intent::Market => self.market_advice(entities, data),
            Intent::Fertilizer => self.fertilizer_advice(entities, data),
            Intent::Pest => self.pest_advice(entities, data),
            Intent::Scheme => self.scheme_advice(),
            Intent::Crop | Intent::General => self.general_advice(entities),
        };

        let response = base.overlay(patch);
        tracing::debug!(
            intent = %intent,
            confidence = response.confidence_score,
            actions = response.action_items.len(),
            warnings = response.warnings.len(),
            "Generated response"
        );
        response
    }

    fn weather_advice(&self, data: &RealTimeData) -> ResponsePatch {
        let temperature = data.temperature();
        let humidity = data.humidity();

        let mut advice = format!(
            "Current conditions: {}°C, {}% humidity. ",
            temperature, humidity
        );

        let actions = if humidity > thresholds::IRRIGATION_HIGH_HUMIDITY {
            advice.push_str("High humidity detected. Delay irrigation and avoid fungicide spray.");
            ["Skip irrigation today", "Monitor for fungal diseases"]
        } else if humidity < thresholds::IRRIGATION_LOW_HUMIDITY {
            advice.push_str("Low humidity. Increase irrigation frequency.");
            ["Provide extra watering", "Mulch around plants"]
        } else {
            advice.push_str("Good conditions for normal farming activities.");
            ["Continue regular irrigation", "Good time for field operations"]
        };

        ResponsePatch::new()
            .advice(advice)
            .actions(actions)
            .confidence(confidence::WEATHER)
    }

    fn market_advice(&self, entities: &EntitySet, data: &RealTimeData) -> ResponsePatch {
        let price = data.price();
        let change = data.change();
        let crop = entities
            .crop
            .map(|c| c.as_str())
            .unwrap_or(placeholders::MARKET_CROP);

        let mut advice = format!("Current {} price: ₹{}/quintal ({}). ", crop, price, change);

        let actions = if change.contains('+') {
            advice.push_str("Prices are rising. Good time to sell.");
            ["Sell immediately if ready", "Check nearby mandis for best rates"]
        } else {
            advice.push_str("Prices declining. Consider waiting if possible.");
            ["Store safely if possible", "Monitor price trends for 1 week"]
        };

        ResponsePatch::new()
            .advice(advice)
            .actions(actions)
            .confidence(confidence::MARKET)
    }

    fn fertilizer_advice(&self, entities: &EntitySet, data: &RealTimeData) -> ResponsePatch {
        let crop = entities
            .crop
            .map(|c| c.as_str())
            .unwrap_or(placeholders::FERTILIZER_CROP);

        let patch = match self.knowledge.crop(crop) {
            Some(profile) => {
                let mut advice = format!("For {}: Apply {}. ", crop, profile.fertilizer);
                let actions = if data.temperature() > thresholds::FERTILIZER_HOT_TEMPERATURE {
                    advice.push_str("High temperature - apply in evening.");
                    ["Apply after 5 PM", "Water lightly after application"]
                } else {
                    advice.push_str("Good conditions for fertilizer application.");
                    ["Apply in morning hours", "Incorporate into soil"]
                };
                ResponsePatch::new().advice(advice).actions(actions)
            }
            None => ResponsePatch::new()
                .advice(GENERIC_FERTILIZER_ADVICE)
                .actions(["Soil test recommended", "Split application advised"]),
        };

        patch.confidence(confidence::FERTILIZER)
    }

    fn pest_advice(&self, entities: &EntitySet, data: &RealTimeData) -> ResponsePatch {
        let crop = entities
            .crop
            .map(|c| c.as_str())
            .unwrap_or(placeholders::PEST_CROP);

        let mut advice = format!("For {} pest management: Regular monitoring essential. ", crop);

        let actions = if data.humidity() > thresholds::PEST_FUNGAL_HUMIDITY {
            advice.push_str("High humidity increases fungal disease risk.");
            ["Spray preventive fungicide", "Improve air circulation"]
        } else {
            advice.push_str("Current conditions moderate for pest activity.");
            ["Weekly field monitoring", "Use pheromone traps"]
        };

        ResponsePatch::new()
            .advice(advice)
            .actions(actions)
            .warnings(PEST_WARNINGS)
    }

    fn scheme_advice(&self) -> ResponsePatch {
        ResponsePatch::new()
            .advice(
                "Government support for farmers: PM-KISAN income support, \
                 PM Fasal Bima Yojana crop insurance and Kisan Credit Card loans.",
            )
            .actions([
                "Visit nearest Common Service Centre",
                "Keep Aadhaar and land records ready",
            ])
            .confidence(confidence::SCHEME)
    }

    fn general_advice(&self, entities: &EntitySet) -> ResponsePatch {
        let known = entities
            .crop
            .and_then(|crop| self.knowledge.crop(crop.as_str()).map(|p| (crop, p)));

        let Some((crop, profile)) = known else {
            return ResponsePatch::new()
                .advice(
                    "I can help with weather, irrigation, market prices, fertilizer, \
                     pest control and government schemes. \
                     Please share your crop and location for specific advice.",
                )
                .actions([
                    "Share your crop name for specific advice",
                    "Contact nearest Krishi Vigyan Kendra",
                ])
                .confidence(confidence::GENERAL_UNKNOWN_CROP);
        };

        let advice = format!(
            "{}: sown in {}, harvested in {}. Ideal temperature {}.",
            crop.title(),
            profile.sowing_season,
            profile.harvesting,
            profile.ideal_temp
        );
        let explanation = format!(
            "Recommended varieties: {}. Common diseases: {}. Suitable soil pH: {}.",
            list_or_none(&profile.varieties),
            list_or_none(&profile.diseases),
            profile.soil_ph
        );
        let seed_action = match profile.varieties.first() {
            Some(variety) => format!("Use certified seed of {}", variety),
            None => "Use certified seed from a registered dealer".to_string(),
        };

        ResponsePatch::new()
            .advice(advice)
            .explanation(explanation)
            .actions([seed_action, format!("Plan sowing for {}", profile.sowing_season)])
    }
}

fn list_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "none listed".to_string()
    } else {
        items.join(", ")
    }
}
