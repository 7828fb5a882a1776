use tracing::{debug, debug_span};

use crate::mora::MoraMap;
use crate::unicode::{is_katakana, to_katakana, HATSUON, PROLONGED_SOUND_MARK, SOKUON};

fn is_vowel(ch: char) -> bool {
    matches!(ch, 'a' | 'i' | 'u' | 'e' | 'o')
}

/// Transliterate `text` with `map`. Absent text stays absent.
pub fn transliterate(text: Option<&str>, map: &MoraMap) -> Option<String> {
    text.map(|t| kata_to_romaji(t, map))
}

/// [`transliterate`] against the process-wide table.
pub fn romanize(text: Option<&str>) -> Option<String> {
    transliterate(text, MoraMap::global())
}

/// Convert kana text to capitalized romaji.
///
/// Characters outside the katakana block, and katakana the table does not
/// cover, are copied through unchanged. Hyphens are dropped from the result.
pub fn kata_to_romaji(text: &str, map: &MoraMap) -> String {
    let kana = to_katakana(text);
    let scanner = Scanner::new(&kana, map);
    let _span = debug_span!("kata_to_romaji", char_count = scanner.chars.len()).entered();
    let romaji = scanner.run().replace('-', "");
    capitalize(&romaji)
}

struct Scanner<'a> {
    text: &'a str,
    chars: Vec<char>,
    /// Byte offset of each char, plus `text.len()` as a sentinel.
    offsets: Vec<usize>,
    map: &'a MoraMap,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str, map: &'a MoraMap) -> Self {
        let (mut offsets, chars): (Vec<usize>, Vec<char>) = text.char_indices().unzip();
        offsets.push(text.len());
        Self {
            text,
            chars,
            offsets,
            map,
        }
    }

    /// The `n` chars starting at `i`, if that many remain.
    fn window(&self, i: usize, n: usize) -> Option<&'a str> {
        let text = self.text;
        (i + n <= self.chars.len()).then(|| &text[self.offsets[i]..self.offsets[i + n]])
    }

    fn digraph_at(&self, i: usize) -> Option<&'a str> {
        let map = self.map;
        self.window(i, 2).and_then(|pair| map.lookup_digraph(pair))
    }

    /// Romanization of the syllable starting at `i`: digraph first, then the
    /// single char, else empty.
    fn syllable_at(&self, i: usize) -> &'a str {
        let map = self.map;
        self.digraph_at(i)
            .or_else(|| self.chars.get(i).and_then(|&c| map.lookup_mono(c)))
            .unwrap_or("")
    }

    fn run(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        let mut i = 0;

        while i < self.chars.len() {
            let ch = self.chars[i];

            if !is_katakana(ch) && ch != PROLONGED_SOUND_MARK {
                out.push(ch);
                i += 1;
                continue;
            }

            if ch == SOKUON {
                // The following syllable is emitted on the next iteration.
                if i + 1 < self.chars.len() {
                    out.push_str(doubled_consonant(self.syllable_at(i + 1)));
                }
                i += 1;
                continue;
            }

            if ch == PROLONGED_SOUND_MARK {
                // Looks at what was emitted, not at the input.
                if let Some(vowel) = out.chars().last().filter(|&c| is_vowel(c)) {
                    out.push(vowel);
                }
                i += 1;
                continue;
            }

            if let Some(roma) = self.digraph_at(i) {
                out.push_str(roma);
                i += 2;
                continue;
            }

            match self.map.lookup_mono(ch).filter(|r| !r.is_empty()) {
                Some(_) if ch == HATSUON => out.push_str(hatsuon(self.syllable_at(i + 1))),
                Some(roma) => out.push_str(roma),
                None => {
                    debug!(%ch, position = i, "unmapped katakana");
                    out.push(ch);
                }
            }
            i += 1;
        }

        out
    }
}

/// Letter emitted for ッ: the first letter of the next syllable, so
/// "chi" → "c", "shi" → "s", "ji" → "j", "tsu" → "t", "ka" → "k".
/// Nothing when the next syllable is unknown.
fn doubled_consonant(next: &str) -> &str {
    match next.chars().next() {
        Some(first) => &next[..first.len_utf8()],
        None => "",
    }
}

/// ン before a vowel or y is written "n'" so it cannot fuse with what follows.
fn hatsuon(next: &str) -> &'static str {
    match next.chars().next() {
        Some(c) if is_vowel(c) || c == 'y' => "n'",
        _ => "n",
    }
}

/// Lowercase everything, then uppercase only the first character.
///
/// When the uppercase form expands to several chars ("ß" → "SS"), only the
/// first of them stays uppercase: "ßa" → "Ssa".
fn capitalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let mut chars = lower.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let mut upper = first.to_uppercase();
    let mut out = String::with_capacity(lower.len());
    out.extend(upper.next());
    out.extend(upper.flat_map(char::to_lowercase));
    out.extend(chars);
    out
}
