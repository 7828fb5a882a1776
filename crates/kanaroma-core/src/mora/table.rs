/// Default katakana table: modified Hepburn plus common loan-word digraphs.
pub(super) const DEFAULT_JSON: &str = include_str!("default_mora.json");
