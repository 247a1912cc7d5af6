//! Knowledge Base Loader
//!
//! Loads a knowledge table from a YAML or JSON file with the same shape as
//! the built-in table:
//!
//! ```yaml
//! crops:
//!   wheat:
//!     sowing_season: Rabi (October-December)
//!     harvesting: April-May
//!     water_requirement: Medium (4-6 irrigations)
//!     fertilizer: NPK 120:60:40 kg/hectare
//!     varieties: [HD-2967, PBW-343]
//!     diseases: [Rust]
//!     ideal_temp: 15-25°C
//!     soil_ph: 6.0-7.5
//! weather_guidelines:
//!   irrigation:
//!     high_humidity: Delay irrigation if humidity >80%
//!     rainfall_expected: Skip irrigation if rain expected within 24 hours
//! market_insights:
//!   price_factors: [Seasonal demand]
//!   selling_tips: [Check multiple mandis]
//! ```

use std::path::Path;

use crate::{KnowledgeBase, RagError};

/// Loader for knowledge files
pub struct KnowledgeLoader;

impl KnowledgeLoader {
    /// Load and validate a knowledge file
    ///
    /// The format is chosen by extension: `.yaml`/`.yml` or `.json`.
    pub fn load_file(path: &Path) -> Result<KnowledgeBase, RagError> {
        let content = std::fs::read_to_string(path).map_err(|source| RagError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase);

        let knowledge: KnowledgeBase = match extension.as_deref() {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| RagError::Parse(format!("{}: {}", path.display(), e)))?,
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| RagError::Parse(format!("{}: {}", path.display(), e)))?,
            _ => return Err(RagError::UnsupportedFormat(path.display().to_string())),
        };

        knowledge.validate()?;

        tracing::info!(
            path = %path.display(),
            crops = knowledge.crops().count(),
            topics = knowledge.topics().count(),
            "Loaded knowledge base"
        );

        Ok(knowledge)
    }

    /// Load from `path` if given, otherwise use the built-in table
    pub fn load_or_builtin(path: Option<&Path>) -> Result<KnowledgeBase, RagError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                tracing::debug!("Using built-in knowledge base");
                Ok(KnowledgeBase::builtin())
            }
        }
    }
}
