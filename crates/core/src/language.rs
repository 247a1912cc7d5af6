//! Language codes for farmer queries
//!
//! Eight languages are declared as supported. Script-based detection only
//! ever yields Hindi or English; the remaining codes exist so that callers
//! (translation, TTS, UI) can carry an explicit preference.

use serde::{Deserialize, Serialize};

/// Supported language codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LanguageCode {
    #[default]
    Hi,
    En,
    Pa,
    Bn,
    Te,
    Mr,
    Gu,
    Ta,
}

impl LanguageCode {
    /// Get ISO 639-1 code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Hi => "hi",
            Self::En => "en",
            Self::Pa => "pa",
            Self::Bn => "bn",
            Self::Te => "te",
            Self::Mr => "mr",
            Self::Gu => "gu",
            Self::Ta => "ta",
        }
    }
}

impl std::fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(LanguageCode::Hi.code(), "hi");
        assert_eq!(LanguageCode::Ta.code(), "ta");
        assert_eq!(LanguageCode::En.to_string(), "en");
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&LanguageCode::Mr).unwrap();
        assert_eq!(json, "\"mr\"");
    }
}
