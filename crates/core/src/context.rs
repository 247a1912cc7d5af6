//! Retrieved context for a single query

use serde::{Deserialize, Serialize};

/// Facts, recommendations and source labels gathered from the knowledge base
///
/// Insertion order is preserved; advice text built from a context must be
/// reproducible for identical inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub facts: Vec<String>,
    pub recommendations: Vec<String>,
    pub sources: Vec<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty() && self.recommendations.is_empty() && self.sources.is_empty()
    }

    pub fn add_fact(&mut self, fact: impl Into<String>) {
        self.facts.push(fact.into());
    }

    pub fn add_recommendation(&mut self, recommendation: impl Into<String>) {
        self.recommendations.push(recommendation.into());
    }

    pub fn add_source(&mut self, source: impl Into<String>) {
        self.sources.push(source.into());
    }
}
