//! Character-level Unicode classification and kana normalization.

use unicode_normalization::UnicodeNormalization;

/// Offset between a hiragana code point and its katakana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Prolonged sound mark. Lives inside the katakana block but is also used
/// after hiragana ("らーめん").
pub const PROLONGED_SOUND_MARK: char = 'ー';

/// Small tsu, the gemination marker.
pub const SOKUON: char = 'ッ';

/// Moraic nasal.
pub const HATSUON: char = 'ン';

/// Check the full Hiragana block (U+3040..U+309F).
pub fn is_hiragana(c: char) -> bool {
    ('\u{3040}'..='\u{309F}').contains(&c)
}

/// Hiragana letters that have a katakana twin exactly 0x60 above
/// (ぁ U+3041 .. ゖ U+3096). Iteration marks and the combining voicing marks
/// are excluded.
pub fn is_shiftable_hiragana(c: char) -> bool {
    ('\u{3041}'..='\u{3096}').contains(&c)
}

/// Check the full Katakana block (U+30A0..U+30FF). Includes rarely-used symbols
/// (゠ U+30A0, ヿ U+30FF) but no unassigned codepoints.
pub fn is_katakana(c: char) -> bool {
    ('\u{30A0}'..='\u{30FF}').contains(&c)
}

fn is_combining_voicing_mark(c: char) -> bool {
    c == '\u{3099}' || c == '\u{309A}'
}

/// Convert a hiragana string to katakana.
/// Non-hiragana characters (ー, ASCII, etc.) are passed through unchanged.
pub fn hiragana_to_katakana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if is_shiftable_hiragana(c) {
                char::from_u32(c as u32 + KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// NFKC-normalize `s` and shift hiragana to full-width katakana.
///
/// Half-width katakana and other compatibility forms are folded by NFKC
/// before the shift. Some katakana have precomposed voiced forms that their
/// hiragana twins lack (ワ + ゙ → ヷ), so text still carrying a combining
/// voicing mark after the shift is recomposed.
pub fn to_katakana(s: &str) -> String {
    let folded: String = s.nfkc().collect();
    let shifted = hiragana_to_katakana(&folded);
    if shifted.chars().any(is_combining_voicing_mark) {
        shifted.nfc().collect()
    } else {
        shifted
    }
}

/// Absent text stays absent; present text goes through [`to_katakana`].
pub fn normalize_to_katakana(text: Option<&str>) -> Option<String> {
    text.map(to_katakana)
}
