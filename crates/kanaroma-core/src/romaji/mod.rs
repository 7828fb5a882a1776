//! Katakana-to-romaji transliteration.
//!
//! Input is first folded to full-width katakana (see [`crate::unicode`]), then
//! scanned left to right against a [`MoraMap`](crate::mora::MoraMap), handling
//! sokuon (ッ), the prolonged sound mark (ー), hatsuon (ン) and yōon (キャ).

mod transliterate;

#[cfg(test)]
mod tests;

pub use transliterate::{kata_to_romaji, romanize, transliterate};
