//! Configuration for the document classifier.
//!
//! Keyword sets ship with built-in defaults matching the production corpus
//! (Russian federal legal publications, lemmatized text) and can be replaced
//! wholesale from a TOML file via `--config`.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Keyword configuration for the two-phase document filter.
///
/// Phase 1 keywords mark budget-domain relevance; CFO keywords narrow to
/// documents naming a Central Federal District subject. All matching is
/// case-insensitive substring containment against lemmatized text, so the
/// phrases here must themselves be in dictionary base form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyConfig {
    /// Budget-domain phrases (phase 1).
    #[serde(default = "default_phase1_keywords")]
    pub phase1_keywords: Vec<String>,
    /// Regional subject names (phase 2).
    #[serde(default = "default_cfo_keywords")]
    pub cfo_keywords: Vec<String>,
}

fn default_phase1_keywords() -> Vec<String> {
    [
        "резервный фонд",
        "бюджетный ассигнование",
        "субсидия",
        "межбюджетный трансферт",
        "дотация",
    ]
    .map(String::from)
    .to_vec()
}

fn default_cfo_keywords() -> Vec<String> {
    [
        "белгородский область",
        "брянский область",
        "владимирский область",
        "воронежский область",
        "ивановский область",
        "калужский область",
        "костромской область",
        "курский область",
        "липецкий область",
        "московский область",
        "орловский область",
        "рязанский область",
        "смоленский область",
        "тамбовский область",
        "тверской область",
        "тульский область",
        "ярославский область",
        "г. москва",
    ]
    .map(String::from)
    .to_vec()
}

impl Default for ClassifyConfig {
    fn default() -> Self {
        Self {
            phase1_keywords: default_phase1_keywords(),
            cfo_keywords: default_cfo_keywords(),
        }
    }
}

impl ClassifyConfig {
    /// Load configuration from an optional TOML file.
    ///
    /// No path means built-in defaults. Keys absent from the file fall back
    /// to the defaults individually.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_nonempty() {
        let config = ClassifyConfig::default();
        assert_eq!(config.phase1_keywords.len(), 5);
        assert_eq!(config.cfo_keywords.len(), 18);
        assert!(config.phase1_keywords.contains(&"субсидия".to_string()));
        assert!(config.cfo_keywords.contains(&"г. москва".to_string()));
    }

    #[test]
    fn test_load_without_path_uses_defaults() {
        let config = ClassifyConfig::load(None).unwrap();
        assert_eq!(config, ClassifyConfig::default());
    }

    #[test]
    fn test_load_partial_override() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "phase1_keywords = [\"грант\", \"субвенция\"]").unwrap();
        let config = ClassifyConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.phase1_keywords, vec!["грант", "субвенция"]);
        // cfo_keywords falls back to defaults
        assert_eq!(config.cfo_keywords, default_cfo_keywords());
    }

    #[test]
    fn test_load_malformed_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "phase1_keywords = 42").unwrap();
        assert!(ClassifyConfig::load(Some(file.path())).is_err());
    }
}
