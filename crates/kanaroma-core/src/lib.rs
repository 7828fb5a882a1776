//! Kana normalization and katakana-to-romaji transliteration.
//!
//! [`unicode::normalize_to_katakana`] folds text to full-width katakana and
//! [`romaji::transliterate`] turns it into capitalized romaji using a
//! [`mora::MoraMap`]. The remaining modules cover what a batch caller needs
//! around that: table loading, company-name replacement rules and an
//! in-memory column organizer.

pub mod batch;
pub mod mora;
pub mod replace;
pub mod resources;
pub mod romaji;
pub mod unicode;

pub use mora::MoraMap;
pub use romaji::transliterate;
pub use unicode::normalize_to_katakana;
