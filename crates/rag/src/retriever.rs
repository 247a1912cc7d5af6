//! Context retrieval from the knowledge base
//!
//! Assembles facts, recommendations and source labels for one query:
//! 1. a known crop contributes its sowing season, water requirement and
//!    fertilizer recipe
//! 2. irrigation queries add every irrigation guideline
//! 3. market queries add the selling tips
//!
//! Other intents get no context beyond the crop facts.

use std::sync::Arc;

use krishi_mitra_core::{Context, EntitySet, Intent};
use tracing::Span;

use crate::knowledge::IRRIGATION_TOPIC;
use crate::KnowledgeBase;

/// Source label for irrigation guidelines
pub const IRRIGATION_SOURCE: &str = "Irrigation Best Practices";
/// Source label for market insights
pub const MARKET_SOURCE: &str = "Market Intelligence";

/// Source label for a crop profile, e.g. `Crop Database - Wheat`
pub fn crop_source(title: &str) -> String {
    format!("Crop Database - {}", title)
}

/// Retrieves context for an intent and its entities
pub struct ContextRetriever {
    knowledge: Arc<KnowledgeBase>,
    span: Span,
}

impl ContextRetriever {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            span: tracing::debug_span!("context_retriever"),
        }
    }

    /// Log under the given span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn retrieve(&self, intent: Intent, entities: &EntitySet) -> Context {
        let _guard = self.span.enter();
        let mut context = Context::new();

        if let Some(crop) = entities.crop {
            if let Some(profile) = self.knowledge.crop(crop.as_str()) {
                context.add_fact(format!("Sowing season: {}", profile.sowing_season));
                context.add_fact(format!("Water requirement: {}", profile.water_requirement));
                context.add_fact(format!("Recommended fertilizer: {}", profile.fertilizer));
                context.add_source(crop_source(crop.title()));
            } else {
                tracing::trace!(crop = %crop, "Crop not in knowledge base");
            }
        }

        match intent {
            Intent::Irrigation => {
                for (_, advice) in self.knowledge.guidelines(IRRIGATION_TOPIC) {
                    context.add_recommendation(advice);
                }
                context.add_source(IRRIGATION_SOURCE);
            }
            Intent::Market => {
                for tip in &self.knowledge.market_insights().selling_tips {
                    context.add_fact(tip.clone());
                }
                context.add_source(MARKET_SOURCE);
            }
            _ => {}
        }

        tracing::debug!(
            intent = %intent,
            facts = context.facts.len(),
            recommendations = context.recommendations.len(),
            sources = ?context.sources,
            "Retrieved context"
        );

        context
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_mitra_core::Crop;

    fn retriever() -> ContextRetriever {
        ContextRetriever::new(Arc::new(KnowledgeBase::builtin()))
    }

    fn with_crop(crop: Crop) -> EntitySet {
        EntitySet {
            crop: Some(crop),
            ..Default::default()
        }
    }

    #[test]
    fn test_crop_facts() {
        let context = retriever().retrieve(Intent::Fertilizer, &with_crop(Crop::Wheat));
        assert_eq!(
            context.facts,
            vec![
                "Sowing season: Rabi (October-December)",
                "Water requirement: Medium (4-6 irrigations)",
                "Recommended fertilizer: NPK 120:60:40 kg/hectare",
            ]
        );
        assert_eq!(context.sources, vec!["Crop Database - Wheat"]);
        assert!(context.recommendations.is_empty());
    }

    #[test]
    fn test_irrigation_recommendations() {
        let context = retriever().retrieve(Intent::Irrigation, &with_crop(Crop::Rice));
        assert_eq!(
            context.recommendations,
            vec![
                "Delay irrigation if humidity >80%",
                "Skip irrigation if rain expected within 24 hours",
                "Best irrigation time: early morning or evening",
            ]
        );
        assert_eq!(
            context.sources,
            vec!["Crop Database - Rice", "Irrigation Best Practices"]
        );
        assert_eq!(context.facts.len(), 3);
    }

    #[test]
    fn test_market_tips_follow_crop_facts() {
        let context = retriever().retrieve(Intent::Market, &with_crop(Crop::Wheat));
        assert_eq!(context.facts.len(), 7);
        assert_eq!(context.facts[3], "Monitor MSP announcements");
        assert_eq!(
            context.sources,
            vec!["Crop Database - Wheat", "Market Intelligence"]
        );
    }

    #[test]
    fn test_unknown_crop_adds_nothing() {
        let context = retriever().retrieve(Intent::Pest, &with_crop(Crop::Potato));
        assert!(context.is_empty());
    }

    #[test]
    fn test_no_entities_general() {
        let context = retriever().retrieve(Intent::General, &EntitySet::default());
        assert!(context.is_empty());

        let context = retriever().retrieve(Intent::Market, &EntitySet::default());
        assert_eq!(context.facts.len(), 4);
        assert_eq!(context.sources, vec!["Market Intelligence"]);
    }
}
