//! Script-based language detection
//!
//! Counts Devanagari characters (U+0900..=U+097F) against ASCII Latin
//! letters. Devanagari majority means Hindi, any Latin letters otherwise
//! mean English, and text with neither defaults to Hindi.

use krishi_mitra_core::LanguageCode;
use tracing::Span;

const DEVANAGARI_START: u32 = 0x0900;
const DEVANAGARI_END: u32 = 0x097F;

/// Character counts per script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScriptCounts {
    pub devanagari: usize,
    pub latin: usize,
}

impl ScriptCounts {
    pub fn of(text: &str) -> Self {
        text.chars().fold(Self::default(), |mut counts, c| {
            if is_devanagari(c) {
                counts.devanagari += 1;
            } else if c.is_ascii_alphabetic() {
                counts.latin += 1;
            }
            counts
        })
    }
}

fn is_devanagari(c: char) -> bool {
    (DEVANAGARI_START..=DEVANAGARI_END).contains(&(c as u32))
}

/// Detects the language of a query from its script
pub struct LanguageDetector {
    span: Span,
}

impl LanguageDetector {
    pub fn new() -> Self {
        Self {
            span: tracing::debug_span!("language_detector"),
        }
    }

    /// Log under the given span
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Detect language; always returns a code
    pub fn detect(&self, text: &str) -> LanguageCode {
        let _guard = self.span.enter();
        let counts = ScriptCounts::of(text);

        let language = if counts.devanagari > counts.latin {
            LanguageCode::Hi
        } else if counts.latin > 0 {
            LanguageCode::En
        } else {
            LanguageCode::Hi
        };

        tracing::trace!(
            devanagari = counts.devanagari,
            latin = counts.latin,
            language = %language,
            "Detected query language"
        );

        language
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new()
    }
}
