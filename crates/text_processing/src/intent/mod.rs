//! Intent Classification
//!
//! Scores each intent by counting keyword pattern matches in the query.
//! Patterns are bilingual (romanized Hindi and English) alternations,
//! compiled once at construction and matched case-insensitively against the
//! lower-cased query.
//!
//! Scoring rules:
//! - every non-overlapping match of every pattern of an intent adds
//!   [`PER_MATCH_WEIGHT`] to that intent's score
//! - the highest score wins; ties go to the intent declared first
//! - confidence is the winning score capped at 1.0
//! - no match at all yields [`Intent::General`] with the fixed
//!   [`GENERAL_FALLBACK`] confidence
//!
//! # Example
//!
//! ```
//! use krishi_mitra_core::Intent;
//! use krishi_mitra_text_processing::IntentClassifier;
//!
//! let classifier = IntentClassifier::new();
//! let (intent, confidence) = classifier.extract_intent("kab paani de");
//!
//! assert_eq!(intent, Intent::Irrigation);
//! assert!(confidence >= 0.3);
//! ```

use krishi_mitra_config::constants::confidence::{GENERAL_FALLBACK, PER_MATCH_WEIGHT};
use krishi_mitra_core::Intent;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use tracing::Span;

use crate::{Result, TextProcessingError};

/// Built-in pattern table in tie-break order
pub const DEFAULT_INTENT_PATTERNS: &[(Intent, &[&str])] = &[
    (
        Intent::Weather,
        &[
            r"barish|rain|mausam|weather|paani|water|baarish",
            r"humidity|temperature|wind|climate",
        ],
    ),
    (
        Intent::Irrigation,
        &[
            // widened from `paani dena` so "kab paani de" outscores weather;
            // it also matches inside "paani dekhna"
            r"sinchai|irrigation|paani de(?:na)?|watering",
            r"kab paani de|when to water|irrigation timing",
        ],
    ),
    (
        Intent::Market,
        &[
            r"mandi|price|rate|bhav|market|sell|bechna",
            r"commodity price|market rate|selling price",
        ],
    ),
    (
        Intent::Fertilizer,
        &[
            r"khad|fertilizer|urvarak|nutrients|manure",
            r"npk|urea|phosphate|potash|organic",
        ],
    ),
    (
        Intent::Pest,
        &[
            r"keeda|pest|insect|disease|bimari|fungus",
            r"crop disease|plant protection|pesticide",
        ],
    ),
    (
        Intent::Scheme,
        &[
            r"yojana|scheme|subsidy|government|sarkar",
            r"loan|credit|insurance|financial help",
        ],
    ),
    (
        Intent::Crop,
        &[
            r"fasal|crop|bija|seed|planting|cultivation",
            r"sowing|harvesting|crop calendar|variety",
        ],
    ),
];

static DEFAULT_TABLE: Lazy<Vec<CompiledIntentPatterns>> = Lazy::new(|| {
    compile_table(DEFAULT_INTENT_PATTERNS).expect("built-in intent patterns are valid")
});

/// Compiled patterns for one intent
#[derive(Debug, Clone)]
struct CompiledIntentPatterns {
    intent: Intent,
    patterns: Vec<Regex>,
}

fn compile_table(table: &[(Intent, &[&str])]) -> Result<Vec<CompiledIntentPatterns>> {
    let mut compiled: Vec<CompiledIntentPatterns> = Vec::with_capacity(table.len());

    for (intent, patterns) in table {
        if *intent == Intent::General {
            return Err(TextProcessingError::FallbackIntentScored(*intent));
        }
        if compiled.iter().any(|c| c.intent == *intent) {
            return Err(TextProcessingError::DuplicateIntent(*intent));
        }

        let patterns = patterns
            .iter()
            .map(|pattern| {
                Regex::new(&format!("(?i){}", pattern)).map_err(|source| {
                    TextProcessingError::InvalidPattern {
                        intent: *intent,
                        pattern: pattern.to_string(),
                        source,
                    }
                })
            })
            .collect::<Result<Vec<_>>>()?;

        compiled.push(CompiledIntentPatterns {
            intent: *intent,
            patterns,
        });
    }

    Ok(compiled)
}

/// Score of a single intent for a query
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IntentScore {
    pub intent: Intent,
    /// Total pattern matches across the intent's patterns
    pub matches: usize,
    pub score: f64,
}

/// Classification result with the full score table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub intent: Intent,
    /// Within [0, 1]
    pub confidence: f64,
    /// Per-intent scores in table order
    pub scores: Vec<IntentScore>,
}

/// Rule-based intent classifier
pub struct IntentClassifier {
    table: Vec<CompiledIntentPatterns>,
    span: Span,
}

impl IntentClassifier {
    /// Create a classifier over the built-in pattern table
    pub fn new() -> Self {
        Self {
            table: DEFAULT_TABLE.clone(),
            span: tracing::debug_span!("intent_classifier"),
        }
    }

    /// Create a classifier over a custom table
    ///
    /// Table order is the tie-break order. An empty table is allowed and
    /// always classifies as [`Intent::General`].
    pub fn with_patterns(table: &[(Intent, &[&str])]) -> Result<Self> {
        Ok(Self {
            table: compile_table(table)?,
            span: tracing::debug_span!("intent_classifier"),
        })
    }

    /// Log under the given span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Classify a query and return every intent's score
    pub fn classify(&self, text: &str) -> Classification {
        let _guard = self.span.enter();
        let text_lower = text.to_lowercase();

        let scores: Vec<IntentScore> = self
            .table
            .iter()
            .map(|entry| {
                let matches: usize = entry
                    .patterns
                    .iter()
                    .map(|pattern| pattern.find_iter(&text_lower).count())
                    .sum();
                IntentScore {
                    intent: entry.intent,
                    matches,
                    score: round_score(matches as f64 * PER_MATCH_WEIGHT),
                }
            })
            .collect();

        // Strict comparison keeps the first-declared intent on ties
        let best = scores.iter().fold(None::<&IntentScore>, |best, candidate| match best {
            Some(current) if candidate.matches <= current.matches => Some(current),
            _ => Some(candidate),
        });

        let (intent, confidence) = match best {
            Some(best) if best.matches > 0 => (best.intent, best.score.min(1.0)),
            _ => (Intent::General, GENERAL_FALLBACK),
        };

        tracing::debug!(
            intent = %intent,
            confidence,
            "Classified query intent"
        );

        Classification {
            intent,
            confidence,
            scores,
        }
    }

    /// Classify a query into `(intent, confidence)`
    pub fn extract_intent(&self, text: &str) -> (Intent, f64) {
        let classification = self.classify(text);
        (classification.intent, classification.confidence)
    }
}

/// Round to two decimals so that e.g. 3 × 0.3 reads 0.9
fn round_score(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_irrigation_query() {
        let classifier = IntentClassifier::new();
        let (intent, confidence) = classifier.extract_intent("kab paani de");
        assert_eq!(intent, Intent::Irrigation);
        assert!(confidence >= 0.3);
    }

    #[test]
    fn test_no_match_is_general_sentinel() {
        let classifier = IntentClassifier::new();
        assert_eq!(
            classifier.extract_intent("xyz qwerty"),
            (Intent::General, 0.5)
        );
        assert_eq!(classifier.extract_intent(""), (Intent::General, 0.5));
    }

    #[test]
    fn test_paani_de_prefix_matches_other_verbs() {
        let classifier = IntentClassifier::new();
        let result = classifier.classify("khet ka paani dekhna hai");
        let irrigation = result
            .scores
            .iter()
            .find(|s| s.intent == Intent::Irrigation)
            .unwrap();
        assert_eq!(irrigation.matches, 1);

        // one weather hit ("paani") ties one irrigation hit; weather is first
        assert_eq!(result.intent, Intent::Weather);
        assert_eq!(result.confidence, 0.3);
    }

    #[test]
    fn test_scores_serialize_without_float_noise() {
        let classifier = IntentClassifier::new();
        let result = classifier.classify("rain rain rain");
        assert_eq!(result.intent, Intent::Weather);
        assert_eq!(result.confidence, 0.9);
        assert_eq!(serde_json::to_string(&result.confidence).unwrap(), "0.9");

        let (_, confidence) =
            classifier.extract_intent("barish rain mausam weather paani water humidity");
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_tie_goes_to_first_declared() {
        let classifier = IntentClassifier::new();
        // one weather hit, one market hit
        let (intent, confidence) = classifier.extract_intent("mausam aur mandi");
        assert_eq!(intent, Intent::Weather);
        assert_eq!(confidence, 0.3);

        // one pest hit, one scheme hit
        let (intent, _) = classifier.extract_intent("keeda yojana");
        assert_eq!(intent, Intent::Pest);
    }

    #[test]
    fn test_market_query() {
        let classifier = IntentClassifier::new();
        let result = classifier.classify("gehun ka mandi bhav kya hai");
        assert_eq!(result.intent, Intent::Market);
        let market = result
            .scores
            .iter()
            .find(|s| s.intent == Intent::Market)
            .unwrap();
        assert_eq!(market.matches, 2);
        assert_eq!(result.confidence, market.score);
    }

    #[test]
    fn test_case_insensitive() {
        let classifier = IntentClassifier::new();
        let (intent, _) = classifier.extract_intent("Which NPK FERTILIZER for wheat?");
        assert_eq!(intent, Intent::Fertilizer);
    }

    #[test]
    fn test_confidence_capped() {
        let classifier = IntentClassifier::new();
        let (intent, confidence) =
            classifier.extract_intent("rain rain rain weather mausam barish humidity");
        assert_eq!(intent, Intent::Weather);
        assert_eq!(confidence, 1.0);
    }

    #[test]
    fn test_scores_cover_table_in_order() {
        let classifier = IntentClassifier::new();
        let result = classifier.classify("subsidy");
        let order: Vec<Intent> = result.scores.iter().map(|s| s.intent).collect();
        assert_eq!(order, Intent::scored().to_vec());
        assert_eq!(result.intent, Intent::Scheme);
    }

    #[test]
    fn test_empty_table_is_general() {
        let classifier = IntentClassifier::with_patterns(&[]).unwrap();
        assert_eq!(classifier.extract_intent("rain"), (Intent::General, 0.5));
    }

    #[test]
    fn test_custom_table_order_breaks_ties() {
        let classifier = IntentClassifier::with_patterns(&[
            (Intent::Market, &["mandi"]),
            (Intent::Weather, &["rain"]),
        ])
        .unwrap();
        assert_eq!(classifier.extract_intent("rain mandi").0, Intent::Market);
    }

    #[test]
    fn test_invalid_custom_tables() {
        assert!(matches!(
            IntentClassifier::with_patterns(&[(Intent::Weather, &["(unclosed"])]),
            Err(TextProcessingError::InvalidPattern { .. })
        ));
        assert!(matches!(
            IntentClassifier::with_patterns(&[(Intent::General, &["hello"])]),
            Err(TextProcessingError::FallbackIntentScored(Intent::General))
        ));
        assert!(matches!(
            IntentClassifier::with_patterns(&[(Intent::Pest, &["a"]), (Intent::Pest, &["b"])]),
            Err(TextProcessingError::DuplicateIntent(Intent::Pest))
        ));
    }

    #[test]
    fn test_confidence_always_in_range() {
        let classifier = IntentClassifier::new();
        for text in [
            "",
            "rain",
            "kab paani de",
            "mandi price rate bhav market sell bechna",
            "गेहूं",
            "keeda pest insect disease bimari fungus pesticide",
        ] {
            let (_, confidence) = classifier.extract_intent(text);
            assert!((0.0..=1.0).contains(&confidence), "{text}: {confidence}");
        }
    }
}
