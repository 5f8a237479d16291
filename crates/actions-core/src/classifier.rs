use crate::config::Config;
use crate::error::Result;
use regex::Regex;
use serde::Serialize;

// ---------------------------------------------------------------------------
// RuleHit (output)
// ---------------------------------------------------------------------------

/// The configured rule that made a line an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "value", rename_all = "snake_case")]
pub enum RuleHit {
    Keyword(String),
    Prefix(String),
}

// ---------------------------------------------------------------------------
// Keyword matching
// ---------------------------------------------------------------------------

struct Keyword {
    text: String,
    matcher: KeywordMatcher,
}

enum KeywordMatcher {
    /// Lowercased needle, compared against the lowercased line.
    Substring(String),
    WordBoundary(Regex),
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Case-insensitive pattern for `keyword` with a `\b` on each edge that is a
/// word character. `action:` gets a leading boundary only.
fn word_boundary_pattern(keyword: &str) -> Result<Regex> {
    let mut pattern = String::from("(?i)");
    if keyword.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(keyword));
    if keyword.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    Ok(Regex::new(&pattern)?)
}

impl Keyword {
    fn matches(&self, trimmed: &str, lowered: &str) -> bool {
        match &self.matcher {
            KeywordMatcher::Substring(needle) => lowered.contains(needle.as_str()),
            KeywordMatcher::WordBoundary(re) => re.is_match(trimmed),
        }
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// Decides whether a line of notes is an action item.
///
/// Built once from a [`Config`]; holds no per-line state.
pub struct Classifier {
    keywords: Vec<Keyword>,
    prefixes: Vec<String>,
}

impl Classifier {
    pub fn new(config: &Config) -> Result<Self> {
        let keywords = config
            .action_keywords
            .iter()
            .map(|kw| {
                let matcher = if config.word_boundary {
                    KeywordMatcher::WordBoundary(word_boundary_pattern(kw)?)
                } else {
                    KeywordMatcher::Substring(kw.to_lowercase())
                };
                Ok(Keyword {
                    text: kw.clone(),
                    matcher,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            keywords,
            prefixes: config.action_prefixes.clone(),
        })
    }

    pub fn is_action(&self, line: &str) -> bool {
        self.explain(line).is_some()
    }

    /// Return the first rule that matches `line`, keywords before prefixes.
    /// Blank lines never match.
    pub fn explain(&self, line: &str) -> Option<RuleHit> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return None;
        }

        let lowered = trimmed.to_lowercase();
        if let Some(kw) = self.keywords.iter().find(|k| k.matches(trimmed, &lowered)) {
            return Some(RuleHit::Keyword(kw.text.clone()));
        }

        self.prefixes
            .iter()
            .find(|p| trimmed.starts_with(p.as_str()))
            .map(|p| RuleHit::Prefix(p.clone()))
    }
}
