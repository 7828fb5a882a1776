//! Column-oriented batch editing over an in-memory grid of text cells.
//!
//! The caller extracts cell values into a [`Sheet`], runs [`organize`] (or the
//! individual steps) and writes the cells back. Nothing here reads or writes
//! files.

mod organize;
mod sheet;


pub use organize::{
    fill_romaji_columns, normalize_kana_columns, organize, replace_company_names,
    OrganizeReport, KANA_COLUMNS, ROMAJI_TARGETS,
};
pub use sheet::Sheet;
