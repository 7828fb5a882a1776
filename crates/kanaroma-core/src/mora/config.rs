use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::MoraMap;

#[derive(Debug, thiserror::Error)]
pub enum MoraMapError {
    #[error("{format} parse error: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },
    #[error("mora table has no entries")]
    Empty,
    #[error("[{table}] key {key:?} must be exactly {expected} character(s)")]
    KeyLength {
        table: &'static str,
        key: String,
        expected: usize,
    },
    #[error("invalid romanization for key {key:?}: {value:?}")]
    InvalidValue { key: String, value: String },
    #[error("IO error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("mora table already initialized")]
    AlreadyInitialized,
}

/// Parse a JSON mora table (`{"digraphs": {...}, "mono": {...}}`).
pub fn parse_mora_map_json(json_str: &str) -> Result<MoraMap, MoraMapError> {
    let map: MoraMap = serde_json::from_str(json_str).map_err(|e| MoraMapError::Parse {
        format: "JSON",
        message: e.to_string(),
    })?;
    validate(&map)?;
    Ok(map)
}

/// Parse a TOML mora table with `[digraphs]` and `[mono]` tables.
pub fn parse_mora_map_toml(toml_str: &str) -> Result<MoraMap, MoraMapError> {
    let map: MoraMap = toml::from_str(toml_str).map_err(|e| MoraMapError::Parse {
        format: "TOML",
        message: e.to_string(),
    })?;
    validate(&map)?;
    Ok(map)
}

/// Read and validate a mora table file. `.toml` files are parsed as TOML,
/// everything else as JSON.
pub fn load_mora_map(path: &Path) -> Result<MoraMap, MoraMapError> {
    let content = fs::read_to_string(path).map_err(|source| MoraMapError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let is_toml = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    if is_toml {
        parse_mora_map_toml(&content)
    } else {
        parse_mora_map_json(&content)
    }
}

fn is_romanization(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c == '\'' || c == '-')
}

fn validate(map: &MoraMap) -> Result<(), MoraMapError> {
    if map.is_empty() {
        return Err(MoraMapError::Empty);
    }

    let tables = [("digraphs", &map.digraphs, 2), ("mono", &map.mono, 1)];
    for (table, entries, expected) in tables {
        for (key, value) in entries {
            if key.chars().count() != expected {
                return Err(MoraMapError::KeyLength {
                    table,
                    key: key.clone(),
                    expected,
                });
            }
            if !is_romanization(value) {
                return Err(MoraMapError::InvalidValue {
                    key: key.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    Ok(())
}
