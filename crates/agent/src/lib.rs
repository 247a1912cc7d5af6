//! Agricultural Advisory Agent
//!
//! Features:
//! - Per-intent response synthesis from knowledge and real-time signals
//! - End-to-end query pipeline (language, intent, entities, context,
//!   response)

pub mod pipeline;
pub mod response;

pub use pipeline::{Advisory, AdvisoryPipeline};
pub use response::{ResponseGenerator, GENERIC_FERTILIZER_ADVICE, PEST_WARNINGS};

use thiserror::Error;

/// Agent errors
///
/// Raised only while building a pipeline; processing a query never fails.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Knowledge error: {0}")]
    Knowledge(#[from] krishi_mitra_rag::RagError),

    #[error("Text processing error: {0}")]
    TextProcessing(#[from] krishi_mitra_text_processing::TextProcessingError),
}
