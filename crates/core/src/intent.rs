//! Query intents

use serde::{Deserialize, Serialize};

/// Coarse-grained purpose of a farmer query
///
/// Variant order is the classifier's tie-break order: when two scored
/// intents reach the same score, the one declared first wins. `General` is
/// never scored; it is the fallback when nothing matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Weather,
    Irrigation,
    Market,
    Fertilizer,
    Pest,
    Scheme,
    Crop,
    General,
}

impl Intent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weather => "weather",
            Self::Irrigation => "irrigation",
            Self::Market => "market",
            Self::Fertilizer => "fertilizer",
            Self::Pest => "pest",
            Self::Scheme => "scheme",
            Self::Crop => "crop",
            Self::General => "general",
        }
    }

    /// Intents that carry a pattern table, in tie-break order
    pub fn scored() -> &'static [Intent] {
        &[
            Self::Weather,
            Self::Irrigation,
            Self::Market,
            Self::Fertilizer,
            Self::Pest,
            Self::Scheme,
            Self::Crop,
        ]
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_excludes_general() {
        assert_eq!(Intent::scored().len(), 7);
        assert!(!Intent::scored().contains(&Intent::General));
        assert_eq!(Intent::scored()[0], Intent::Weather);
    }

    #[test]
    fn test_labels_match_serde() {
        for intent in Intent::scored() {
            let json = serde_json::to_string(intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.as_str()));
        }
        assert_eq!(Intent::General.to_string(), "general");
    }
}
