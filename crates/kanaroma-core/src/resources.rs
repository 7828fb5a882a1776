//! Configuration files expected in a base directory.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::mora::{load_mora_map, MoraMap, MoraMapError};
use crate::replace::{load_replacement_rules, ReplaceError, ReplacementRule};

pub const ROMAJI_JSON: &str = "romaji_mapping.json";
pub const COMPANY_JSON: &str = "company_replacements.json";

#[derive(Debug, thiserror::Error)]
pub enum ResourceError {
    #[error("required files not found: {}", .0.join(", "))]
    Missing(Vec<String>),
    #[error("romaji_mapping.json: {0}")]
    MoraMap(#[from] MoraMapError),
    #[error("company_replacements.json: {0}")]
    Replace(#[from] ReplaceError),
}

/// Which resource files exist under a base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceStatus {
    pub base_dir: PathBuf,
    pub romaji: bool,
    pub company: bool,
}

impl ResourceStatus {
    pub fn scan(base_dir: &Path) -> Self {
        Self {
            base_dir: base_dir.to_path_buf(),
            romaji: base_dir.join(ROMAJI_JSON).is_file(),
            company: base_dir.join(COMPANY_JSON).is_file(),
        }
    }

    pub fn missing(&self) -> Vec<String> {
        [(ROMAJI_JSON, self.romaji), (COMPANY_JSON, self.company)]
            .into_iter()
            .filter(|&(_, present)| !present)
            .map(|(name, _)| name.to_string())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.romaji && self.company
    }
}

impl fmt::Display for ResourceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = |ok: bool| if ok { "OK" } else { "NG" };
        write!(
            f,
            "JSON: romaji={} / company={}",
            flag(self.romaji),
            flag(self.company)
        )
    }
}

/// Parsed contents of both resource files.
#[derive(Debug, Clone)]
pub struct Resources {
    pub mora_map: MoraMap,
    pub rules: Vec<ReplacementRule>,
}

impl Resources {
    pub fn load(base_dir: &Path) -> Result<Self, ResourceError> {
        let status = ResourceStatus::scan(base_dir);
        let missing = status.missing();
        if !missing.is_empty() {
            return Err(ResourceError::Missing(missing));
        }

        let mora_map = load_mora_map(&base_dir.join(ROMAJI_JSON))?;
        let rules = load_replacement_rules(&base_dir.join(COMPANY_JSON))?;
        info!(
            base_dir = %base_dir.display(),
            mora_entries = mora_map.len(),
            rules = rules.len(),
            "resources loaded"
        );
        Ok(Self { mora_map, rules })
    }
}
