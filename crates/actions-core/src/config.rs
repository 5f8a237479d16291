use crate::error::{ActionsError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// ConfigWarning / WarnLevel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigWarning {
    pub level: WarnLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarnLevel {
    Warning,
    Error,
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Classification rules for a run.
///
/// Both lists are optional in the YAML document; a missing key or an explicit
/// `null` yields an empty list. Any other non-sequence value is rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Case-insensitive substrings that mark a line as an action.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action_keywords: Vec<String>,
    /// Case-sensitive prefixes that mark a line as an action.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub action_prefixes: Vec<String>,
    /// Require keywords to match on word boundaries instead of anywhere.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub word_boundary: bool,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// True when the document holds nothing but blank lines and comments.
fn is_blank_document(data: &str) -> bool {
    data.lines().all(|l| {
        let l = l.trim();
        l.is_empty() || l.starts_with('#') || l == "---"
    })
}

impl Config {
    /// The keyword set the extractor shipped with before rules were
    /// configurable.
    pub fn default_rules() -> Self {
        Self {
            action_keywords: ["follow up", "send", "review", "schedule", "confirm", "action:"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            action_prefixes: vec!["TODO:".to_string(), "- [ ]".to_string()],
            word_boundary: false,
        }
    }

    /// Parse a YAML rules document.
    pub fn from_yaml(data: &str) -> std::result::Result<Self, serde_yaml::Error> {
        if is_blank_document(data) {
            return Ok(Self::default());
        }
        let value: serde_yaml::Value = serde_yaml::from_str(data)?;
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_yaml::from_value(value)
    }

    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ActionsError::ConfigNotFound(path.to_path_buf()));
        }
        let data = std::fs::read_to_string(path)?;
        let cfg = Self::from_yaml(&data).map_err(|e| ActionsError::ConfigFormat {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            path = %path.display(),
            keywords = cfg.action_keywords.len(),
            prefixes = cfg.action_prefixes.len(),
            word_boundary = cfg.word_boundary,
            "loaded action rules"
        );
        Ok(cfg)
    }

    /// Write the default rules to `path`. Refuses to replace an existing file.
    pub fn init(path: &Path) -> Result<Self> {
        let cfg = Self::default_rules();
        let data = serde_yaml::to_string(&cfg)?;
        if !crate::io::write_if_missing(path, data.as_bytes())? {
            return Err(ActionsError::ConfigExists(path.to_path_buf()));
        }
        Ok(cfg)
    }

    // -----------------------------------------------------------------------
    // Validation
    // -----------------------------------------------------------------------

    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.action_keywords.is_empty() && self.action_prefixes.is_empty() {
            warnings.push(ConfigWarning {
                level: WarnLevel::Warning,
                message: "no action_keywords or action_prefixes configured; nothing will match"
                    .to_string(),
            });
        }

        // A blank keyword is a substring of every line.
        for (i, kw) in self.action_keywords.iter().enumerate() {
            if kw.trim().is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "action_keywords[{i}] is blank and will match every non-empty line"
                    ),
                });
            }
        }
        for (i, prefix) in self.action_prefixes.iter().enumerate() {
            if prefix.is_empty() {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Error,
                    message: format!(
                        "action_prefixes[{i}] is empty and will match every non-empty line"
                    ),
                });
            }
        }

        let mut seen = HashSet::new();
        for kw in &self.action_keywords {
            if !kw.trim().is_empty() && !seen.insert(kw.to_lowercase()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("duplicate keyword '{kw}' in action_keywords"),
                });
            }
        }

        let mut seen = HashSet::new();
        for prefix in &self.action_prefixes {
            if !prefix.is_empty() && !seen.insert(prefix.as_str()) {
                warnings.push(ConfigWarning {
                    level: WarnLevel::Warning,
                    message: format!("duplicate prefix '{prefix}' in action_prefixes"),
                });
            }
        }

        warnings
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
