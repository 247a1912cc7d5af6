//! Knowledge retrieval for the advisory pipeline
//!
//! Features:
//! - Built-in agronomic table (crop profiles, weather guidelines, market
//!   insights)
//! - Knowledge file loading (YAML/JSON) with validation
//! - Intent-aware context retrieval

pub mod knowledge;
pub mod knowledge_loader;
pub mod retriever;

pub use knowledge::{
    CropProfile, Guidelines, KnowledgeBase, MarketInsights, IRRIGATION_TOPIC, SPRAYING_TOPIC,
};
pub use knowledge_loader::KnowledgeLoader;
pub use retriever::{crop_source, ContextRetriever, IRRIGATION_SOURCE, MARKET_SOURCE};

use thiserror::Error;

/// RAG errors
///
/// Only knowledge loading can fail; retrieval itself is infallible.
#[derive(Error, Debug)]
pub enum RagError {
    #[error("Failed to read knowledge file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse knowledge file {0}")]
    Parse(String),

    #[error("Unsupported knowledge file format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid knowledge base: {0}")]
    InvalidKnowledge(String),
}
