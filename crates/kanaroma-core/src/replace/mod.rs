//! Company-name replacement rules.
//!
//! Each rule lists abbreviations or variant spellings (`patterns`) and the
//! canonical form they are rewritten to. Matching is case-insensitive and
//! partial: every occurrence inside a cell is replaced.

mod rules;

pub use rules::{
    apply_rules, load_replacement_rules, parse_replacement_rules_json, replace_case_insensitive,
    ReplaceError, ReplacementRule,
};
