use std::borrow::Cow;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum ReplaceError {
    #[error("JSON parse error: {0}")]
    Parse(String),
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Rewrite every occurrence of any of `patterns` to `replacement`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplacementRule {
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub replacement: String,
}

/// Parse a JSON array of rules.
pub fn parse_replacement_rules_json(json_str: &str) -> Result<Vec<ReplacementRule>, ReplaceError> {
    serde_json::from_str(json_str).map_err(|e| ReplaceError::Parse(e.to_string()))
}

pub fn load_replacement_rules(path: &Path) -> Result<Vec<ReplacementRule>, ReplaceError> {
    let content = fs::read_to_string(path).map_err(|source| ReplaceError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let rules = parse_replacement_rules_json(&content)?;
    debug!(rules = rules.len(), path = %path.display(), "loaded replacement rules");
    Ok(rules)
}

/// Apply `rules` in order, each pattern in order. Later patterns see the
/// output of earlier ones.
pub fn apply_rules<'a>(text: &'a str, rules: &[ReplacementRule]) -> Cow<'a, str> {
    let mut current = Cow::Borrowed(text);
    for rule in rules {
        for pattern in &rule.patterns {
            if let Some(replaced) = replace_case_insensitive(&current, pattern, &rule.replacement)
            {
                current = Cow::Owned(replaced);
            }
        }
    }
    current
}

/// Replace every case-insensitive occurrence of `pattern` in `haystack`.
/// Returns `None` when nothing matched or `pattern` is empty.
pub fn replace_case_insensitive(haystack: &str, pattern: &str, replacement: &str) -> Option<String> {
    if pattern.is_empty() {
        return None;
    }

    let mut out = String::with_capacity(haystack.len());
    let mut copied = 0;
    let mut pos = 0;
    let mut matched = false;

    while pos < haystack.len() {
        if let Some(len) = match_len_at(&haystack[pos..], pattern) {
            out.push_str(&haystack[copied..pos]);
            out.push_str(replacement);
            pos += len;
            copied = pos;
            matched = true;
        } else {
            pos += haystack[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    if !matched {
        return None;
    }
    out.push_str(&haystack[copied..]);
    Some(out)
}

/// Byte length of the prefix of `text` equal to `pattern` ignoring case.
fn match_len_at(text: &str, pattern: &str) -> Option<usize> {
    let mut text_chars = text.char_indices();
    for p in pattern.chars() {
        let (_, t) = text_chars.next()?;
        if !(t == p || t.to_lowercase().eq(p.to_lowercase())) {
            return None;
        }
    }
    Some(text_chars.next().map_or(text.len(), |(i, _)| i))
}
