//! Mora tables: katakana → romanization fragments.
//!
//! A table holds two maps: `digraphs` for two-character sequences (キャ → kya)
//! and `mono` for single characters (カ → ka). The small tsu ッ and the
//! prolonged sound mark ー are handled by the transliterator and have no
//! entries.

mod config;
mod map;
mod table;

pub use config::{load_mora_map, parse_mora_map_json, parse_mora_map_toml, MoraMapError};
pub use map::MoraMap;

/// Returns the embedded default table as JSON.
pub fn default_json() -> &'static str {
    table::DEFAULT_JSON
}
