//! Advisory response and field overlay

use serde::{Deserialize, Serialize};

/// Confidence assigned to a response before an intent builder refines it
pub const BASE_CONFIDENCE: f64 = 0.85;

/// Final advisory returned to the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub primary_advice: String,
    /// May stay empty
    pub detailed_explanation: String,
    pub action_items: Vec<String>,
    /// Always within [0, 1]
    pub confidence_score: f64,
    pub sources: Vec<String>,
    pub warnings: Vec<String>,
}

impl Response {
    /// Base response: empty advice, [`BASE_CONFIDENCE`], the given sources
    pub fn base(sources: Vec<String>) -> Self {
        Self {
            primary_advice: String::new(),
            detailed_explanation: String::new(),
            action_items: Vec::new(),
            confidence_score: BASE_CONFIDENCE,
            sources,
            warnings: Vec::new(),
        }
    }

    /// Replace exactly the fields the patch names; keep everything else
    pub fn overlay(self, patch: ResponsePatch) -> Self {
        Self {
            primary_advice: patch.primary_advice.unwrap_or(self.primary_advice),
            detailed_explanation: patch
                .detailed_explanation
                .unwrap_or(self.detailed_explanation),
            action_items: patch.action_items.unwrap_or(self.action_items),
            confidence_score: patch
                .confidence_score
                .map(|c| c.clamp(0.0, 1.0))
                .unwrap_or(self.confidence_score),
            sources: self.sources,
            warnings: patch.warnings.unwrap_or(self.warnings),
        }
    }
}

/// Partial update produced by an intent builder
///
/// Sources cannot be patched; they always come from the retrieved context.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponsePatch {
    pub primary_advice: Option<String>,
    pub detailed_explanation: Option<String>,
    pub action_items: Option<Vec<String>>,
    pub confidence_score: Option<f64>,
    pub warnings: Option<Vec<String>>,
}

impl ResponsePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advice(mut self, advice: impl Into<String>) -> Self {
        self.primary_advice = Some(advice.into());
        self
    }

    pub fn explanation(mut self, explanation: impl Into<String>) -> Self {
        self.detailed_explanation = Some(explanation.into());
        self
    }

    pub fn actions<I, S>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.action_items = Some(actions.into_iter().map(Into::into).collect());
        self
    }

    pub fn confidence(mut self, confidence: f64) -> Self {
        self.confidence_score = Some(confidence);
        self
    }

    pub fn warnings<I, S>(mut self, warnings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.warnings = Some(warnings.into_iter().map(Into::into).collect());
        self
    }
}
