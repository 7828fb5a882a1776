use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use super::config::{parse_mora_map_json, MoraMapError};
use super::table::DEFAULT_JSON;

static CUSTOM_JSON: OnceLock<String> = OnceLock::new();

/// Read-only lookup tables for the transliterator.
///
/// Built either from validated configuration (see [`super::parse_mora_map_json`])
/// or directly via [`MoraMap::new`]. Lookups never fail: a missing key is
/// simply `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoraMap {
    #[serde(default)]
    pub digraphs: BTreeMap<String, String>,
    #[serde(default)]
    pub mono: BTreeMap<String, String>,
}

impl MoraMap {
    pub fn new(digraphs: BTreeMap<String, String>, mono: BTreeMap<String, String>) -> Self {
        Self { digraphs, mono }
    }

    /// Set a custom JSON table before the first `global()` call.
    pub fn init_custom(json_content: String) -> Result<(), MoraMapError> {
        // Validate eagerly
        parse_mora_map_json(&json_content)?;
        CUSTOM_JSON
            .set(json_content)
            .map_err(|_| MoraMapError::AlreadyInitialized)
    }

    /// Get or initialize the process-wide table.
    pub fn global() -> &'static MoraMap {
        static INSTANCE: OnceLock<MoraMap> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let json_str = CUSTOM_JSON
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_JSON);
            parse_mora_map_json(json_str).expect("mora table JSON must be valid")
        })
    }

    pub fn lookup_digraph(&self, pair: &str) -> Option<&str> {
        self.digraphs.get(pair).map(String::as_str)
    }

    pub fn lookup_mono(&self, c: char) -> Option<&str> {
        let mut buf = [0u8; 4];
        self.mono.get(&*c.encode_utf8(&mut buf)).map(String::as_str)
    }

    /// Total number of entries across both tables.
    pub fn len(&self) -> usize {
        self.digraphs.len() + self.mono.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digraphs.is_empty() && self.mono.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MoraMap
where
    K: Into<String>,
    V: Into<String>,
{
    /// Sorts entries into `digraphs` or `mono` by key length. Keys of any
    /// other length go to `mono`, where they can never match.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = MoraMap::default();
        for (k, v) in iter {
            let key: String = k.into();
            if key.chars().count() == 2 {
                map.digraphs.insert(key, v.into());
            } else {
                map.mono.insert(key, v.into());
            }
        }
        map
    }
}
