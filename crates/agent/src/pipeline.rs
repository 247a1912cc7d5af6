//! End-to-end advisory pipeline
//!
//! text → (language, intent, entities) → context → response
//!
//! The pipeline holds only immutable state (compiled rule tables and the
//! shared knowledge base), so one instance can serve concurrent requests.

use std::path::Path;
use std::sync::Arc;

use krishi_mitra_config::Settings;
use krishi_mitra_core::{Context, EntitySet, Intent, LanguageCode, RealTimeData, Response};
use krishi_mitra_rag::{ContextRetriever, KnowledgeBase, KnowledgeLoader};
use krishi_mitra_text_processing::{
    EntityExtractor, IntentClassifier, LanguageDetector, QueryAnalyzer,
};
use serde::Serialize;
use tracing::Span;

use crate::{AgentError, ResponseGenerator};

/// Full result of one advisory request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advisory {
    pub language: LanguageCode,
    pub intent: Intent,
    /// Classifier confidence, within [0, 1]
    pub confidence: f64,
    pub entities: EntitySet,
    pub context: Context,
    pub response: Response,
}

/// Advisory pipeline over a shared knowledge base
pub struct AdvisoryPipeline {
    knowledge: Arc<KnowledgeBase>,
    analyzer: QueryAnalyzer,
    retriever: ContextRetriever,
    generator: ResponseGenerator,
    span: Span,
}

impl AdvisoryPipeline {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        let span = tracing::info_span!("advisory_pipeline");
        Self {
            analyzer: QueryAnalyzer::new()
                .with_span(tracing::debug_span!(parent: &span, "query_analyzer")),
            retriever: ContextRetriever::new(Arc::clone(&knowledge))
                .with_span(tracing::debug_span!(parent: &span, "context_retriever")),
            generator: ResponseGenerator::new(Arc::clone(&knowledge))
                .with_span(tracing::debug_span!(parent: &span, "response_generator")),
            knowledge,
            span,
        }
    }

    /// Build from settings, loading the configured knowledge file if any
    pub fn from_settings(settings: &Settings) -> Result<Self, AgentError> {
        let path = settings.knowledge.path.as_deref().map(Path::new);
        let knowledge = KnowledgeLoader::load_or_builtin(path)?;
        Ok(Self::new(Arc::new(knowledge)))
    }

    /// Replace the built-in intent table; table order is the tie-break order
    pub fn with_intent_patterns(self, table: &[(Intent, &[&str])]) -> Result<Self, AgentError> {
        let classifier = IntentClassifier::with_patterns(table)?;
        let analyzer = QueryAnalyzer::with_components(
            LanguageDetector::new(),
            classifier,
            EntityExtractor::new(),
        )
        .with_span(tracing::debug_span!(parent: &self.span, "query_analyzer"));
        Ok(Self { analyzer, ..self })
    }

    /// Log all stages under the given span
    pub fn with_span(self, span: Span) -> Self {
        Self {
            analyzer: self
                .analyzer
                .with_span(tracing::debug_span!(parent: &span, "query_analyzer")),
            retriever: self
                .retriever
                .with_span(tracing::debug_span!(parent: &span, "context_retriever")),
            generator: self
                .generator
                .with_span(tracing::debug_span!(parent: &span, "response_generator")),
            knowledge: self.knowledge,
            span,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// Run one query against a real-time snapshot
    pub fn process(&self, text: &str, data: &RealTimeData) -> Advisory {
        let _guard = self.span.enter();

        let analyzed = self.analyzer.analyze(text);
        let context = self.retriever.retrieve(analyzed.intent, &analyzed.entities);
        let response = self.generator.generate_response(
            analyzed.intent,
            &analyzed.entities,
            &context,
            data,
        );

        tracing::info!(
            language = %analyzed.language,
            intent = %analyzed.intent,
            confidence = analyzed.confidence,
            sources = response.sources.len(),
            "Processed advisory query"
        );

        Advisory {
            language: analyzed.language,
            intent: analyzed.intent,
            confidence: analyzed.confidence,
            entities: analyzed.entities,
            context,
            response,
        }
    }

    /// Run one query with no real-time data; every field uses its default
    pub fn process_without_data(&self, text: &str) -> Advisory {
        self.process(text, &RealTimeData::empty())
    }
}

impl Default for AdvisoryPipeline {
    fn default() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use krishi_mitra_core::Crop;

    #[test]
    fn test_irrigation_query_end_to_end() {
        let pipeline = AdvisoryPipeline::default();
        let advisory = pipeline.process(
            "gehun mein kab paani de",
            &RealTimeData::empty().with_humidity(85.0),
        );

        assert_eq!(advisory.language, LanguageCode::En);
        assert_eq!(advisory.intent, Intent::Irrigation);
        assert_eq!(advisory.entities.crop, Some(Crop::Wheat));
        assert_eq!(advisory.context.recommendations.len(), 3);
        assert_eq!(
            advisory.response.sources,
            vec!["Crop Database - Wheat", "Irrigation Best Practices"]
        );
        assert_eq!(advisory.response.action_items[0], "Skip irrigation today");
    }

    #[test]
    fn test_unmatched_query_degrades_to_general() {
        let pipeline = AdvisoryPipeline::default();
        let advisory = pipeline.process_without_data("xyz qwerty");

        assert_eq!(advisory.intent, Intent::General);
        assert_eq!(advisory.confidence, 0.5);
        assert!(advisory.entities.is_empty());
        assert!(advisory.context.is_empty());
        assert!(!advisory.response.primary_advice.is_empty());
        assert!(!advisory.response.action_items.is_empty());
    }

    #[test]
    fn test_with_span_keeps_knowledge() {
        let pipeline = AdvisoryPipeline::default().with_span(tracing::info_span!("request"));
        let advisory = pipeline.process_without_data("wheat fertilizer");
        assert_eq!(advisory.intent, Intent::Fertilizer);
        assert!(advisory.response.primary_advice.starts_with("For wheat: Apply"));
    }

    #[test]
    fn test_custom_intent_patterns() {
        let pipeline = AdvisoryPipeline::default()
            .with_intent_patterns(&[(Intent::Scheme, &["pm-kisan"])])
            .unwrap();
        let advisory = pipeline.process_without_data("PM-Kisan ki kist kab aayegi");
        assert_eq!(advisory.intent, Intent::Scheme);
        assert_eq!(advisory.confidence, 0.3);

        // weather words are no longer scored
        let advisory = pipeline.process_without_data("barish");
        assert_eq!(advisory.intent, Intent::General);

        assert!(matches!(
            AdvisoryPipeline::default().with_intent_patterns(&[(Intent::Market, &["("])]),
            Err(AgentError::TextProcessing(_))
        ));
    }

    #[test]
    fn test_repeated_matches_serialize_cleanly() {
        let advisory = AdvisoryPipeline::default().process_without_data("rain rain rain");
        assert_eq!(advisory.intent, Intent::Weather);
        assert_eq!(serde_json::to_string(&advisory.confidence).unwrap(), "0.9");

        let value = serde_json::to_value(&advisory).unwrap();
        assert_eq!(value["confidence"], serde_json::json!(0.9));
        assert_eq!(value["response"]["confidence_score"], serde_json::json!(0.9));
    }

    #[test]
    fn test_from_default_settings() {
        let pipeline = AdvisoryPipeline::from_settings(&Settings::default()).unwrap();
        let advisory = pipeline.process_without_data("rice variety");
        assert_eq!(advisory.intent, Intent::Crop);
        assert!(advisory.response.primary_advice.starts_with("Rice: sown in Kharif"));
    }
}
