//! Query analysis: language, intent and entities in one pass

use krishi_mitra_core::{EntitySet, Intent, LanguageCode};
use serde::Serialize;
use tracing::Span;

use crate::{EntityExtractor, IntentClassifier, LanguageDetector};

/// Everything the rule-based stage extracts from a query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyzedQuery {
    pub language: LanguageCode,
    pub intent: Intent,
    pub confidence: f64,
    pub entities: EntitySet,
}

/// Runs the three classifiers over the same raw text
///
/// The classifiers are independent; none sees another's output.
pub struct QueryAnalyzer {
    language: LanguageDetector,
    intent: IntentClassifier,
    entities: EntityExtractor,
    span: Span,
}

impl QueryAnalyzer {
    /// Analyzer with the built-in rule tables
    pub fn new() -> Self {
        Self::with_components(
            LanguageDetector::new(),
            IntentClassifier::new(),
            EntityExtractor::new(),
        )
    }

    pub fn with_components(
        language: LanguageDetector,
        intent: IntentClassifier,
        entities: EntityExtractor,
    ) -> Self {
        Self {
            language,
            intent,
            entities,
            span: tracing::debug_span!("query_analyzer"),
        }
    }

    /// Log under the given span; the classifiers get child spans of it
    pub fn with_span(self, span: Span) -> Self {
        Self {
            language: self
                .language
                .with_span(tracing::debug_span!(parent: &span, "language_detector")),
            intent: self
                .intent
                .with_span(tracing::debug_span!(parent: &span, "intent_classifier")),
            entities: self
                .entities
                .with_span(tracing::debug_span!(parent: &span, "entity_extractor")),
            span,
        }
    }

    pub fn analyze(&self, text: &str) -> AnalyzedQuery {
        let _guard = self.span.enter();
        let (intent, confidence) = self.intent.extract_intent(text);
        AnalyzedQuery {
            language: self.language.detect(text),
            intent,
            confidence,
            entities: self.entities.extract(text),
        }
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_mitra_core::{Crop, Unit};

    #[test]
    fn test_analyze_mixed_query() {
        let analyzer = QueryAnalyzer::new();
        let analyzed = analyzer.analyze("mujhe 5 kg aloo chahiye");

        assert_eq!(analyzed.language, LanguageCode::En);
        assert_eq!(analyzed.intent, Intent::General);
        assert_eq!(analyzed.confidence, 0.5);
        assert_eq!(analyzed.entities.crop, Some(Crop::Potato));
        assert_eq!(analyzed.entities.unit, Some(Unit::Kg));
    }

    #[test]
    fn test_analyze_hindi_query() {
        let analyzer = QueryAnalyzer::new().with_span(tracing::info_span!("request"));
        let analyzed = analyzer.analyze("गेहूं में खाद कब डालें");

        assert_eq!(analyzed.language, LanguageCode::Hi);
        assert_eq!(analyzed.entities.crop, Some(Crop::Wheat));
    }

    #[test]
    fn test_serializes_for_presentation() {
        let analyzed = QueryAnalyzer::new().analyze("kab paani de");
        let value = serde_json::to_value(&analyzed).unwrap();
        assert_eq!(value["language"], "en");
        assert_eq!(value["intent"], "irrigation");
    }
}
