//! Rule-based text processing for farmer queries
//!
//! This crate turns free text (romanized Hindi, English or Devanagari) into
//! structured signals:
//! - **Language detection**: script counting (Devanagari vs Latin)
//! - **Intent classification**: weighted keyword-pattern matching
//! - **Entity extraction**: crop, location and quantity/unit lookups
//!
//! All rule tables are compiled once and shared; every operation is a pure
//! function of its input text.
//!
//! # Example
//!
//! ```
//! use krishi_mitra_core::{Intent, LanguageCode};
//! use krishi_mitra_text_processing::QueryAnalyzer;
//!
//! let analyzer = QueryAnalyzer::new();
//! let analyzed = analyzer.analyze("kab paani de");
//!
//! assert_eq!(analyzed.language, LanguageCode::En);
//! assert_eq!(analyzed.intent, Intent::Irrigation);
//! ```

pub mod entities;
pub mod intent;
pub mod language;

mod error;
mod pipeline;

pub use error::{Result, TextProcessingError};
pub use pipeline::{AnalyzedQuery, QueryAnalyzer};

pub use entities::EntityExtractor;
pub use intent::{Classification, IntentClassifier, IntentScore, DEFAULT_INTENT_PATTERNS};
pub use language::{LanguageDetector, ScriptCounts};
