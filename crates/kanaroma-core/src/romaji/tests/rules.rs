use super::{make_map, mono_only};
use crate::mora::MoraMap;
use crate::romaji::{kata_to_romaji, transliterate};

#[test]
fn test_absent_input() {
    let map = mono_only(&[("カ", "ka")]);
    assert_eq!(transliterate(None, &map), None);
}

#[test]
fn test_empty_input() {
    let map = mono_only(&[("カ", "ka")]);
    assert_eq!(transliterate(Some(""), &map).as_deref(), Some(""));
}

#[test]
fn test_end_to_end_tanaka() {
    let map = mono_only(&[("タ", "ta"), ("ナ", "na"), ("カ", "ka")]);
    assert_eq!(transliterate(Some("タナカ"), &map).as_deref(), Some("Tanaka"));
}

#[test]
fn test_digraph_priority() {
    let map = make_map(&[("キャ", "kya"), ("キ", "ki"), ("ャ", "ya")]);
    assert_eq!(kata_to_romaji("キャ", &map), "Kya");
}

#[test]
fn test_gemination() {
    let map = mono_only(&[("カ", "ka")]);
    assert_eq!(kata_to_romaji("ッカ", &map), "Kka");
}

#[test]
fn test_gemination_uses_digraph_lookahead() {
    let map = make_map(&[("チャ", "cha"), ("チ", "chi"), ("マ", "ma")]);
    assert_eq!(kata_to_romaji("マッチャ", &map), "Maccha");
}

#[test]
fn test_gemination_at_end_emits_nothing() {
    let map = mono_only(&[("カ", "ka")]);
    assert_eq!(kata_to_romaji("カッ", &map), "Ka");
    assert_eq!(kata_to_romaji("ッ", &map), "");
}

#[test]
fn test_gemination_before_unknown() {
    let map = mono_only(&[("カ", "ka")]);
    // the unmapped syllable yields no doubled letter but is still copied
    assert_eq!(kata_to_romaji("ッヲ", &map), "ヲ");
    assert_eq!(kata_to_romaji("ッa", &map), "A");
}

#[test]
fn test_long_vowel() {
    let map = mono_only(&[("カ", "ka")]);
    assert_eq!(kata_to_romaji("カー", &map), "Kaa");
    assert_eq!(kata_to_romaji("カーー", &map), "Kaaa");
}

#[test]
fn test_long_vowel_without_preceding_vowel() {
    let map = mono_only(&[("ン", "n")]);
    assert_eq!(kata_to_romaji("ー", &map), "");
    assert_eq!(kata_to_romaji("ンー", &map), "N");
    // unmapped katakana before ー: nothing to prolong
    assert_eq!(kata_to_romaji("ヲー", &map), "ヲ");
}

#[test]
fn test_long_vowel_reads_emitted_output() {
    let map = MoraMap::default();
    // passthrough text counts as emitted output
    assert_eq!(kata_to_romaji("oー", &map), "Oo");
    assert_eq!(kata_to_romaji("Oー", &map), "O");
}

#[test]
fn test_moraic_nasal_before_vowel() {
    let map = mono_only(&[("ン", "n"), ("ア", "a")]);
    assert_eq!(kata_to_romaji("ンア", &map), "N'a");
    assert_eq!(kata_to_romaji("ン", &map), "N");
}

#[test]
fn test_moraic_nasal_before_y_and_consonant() {
    let map = mono_only(&[("ン", "n"), ("ヤ", "ya"), ("カ", "ka")]);
    assert_eq!(kata_to_romaji("ンヤ", &map), "N'ya");
    assert_eq!(kata_to_romaji("ンカ", &map), "Nka");
}

#[test]
fn test_moraic_nasal_checks_digraph_first() {
    let map = make_map(&[("ン", "n"), ("ユ", "yu"), ("キュ", "kyu"), ("キ", "ki")]);
    assert_eq!(kata_to_romaji("ンキュ", &map), "Nkyu");
}

#[test]
fn test_moraic_nasal_unmapped_is_passthrough() {
    let map = mono_only(&[("ア", "a")]);
    assert_eq!(kata_to_romaji("ンア", &map), "ンa");
}

#[test]
fn test_unknown_katakana_passthrough() {
    let map = mono_only(&[("カ", "ka")]);
    assert_eq!(kata_to_romaji("ヲ", &map), "ヲ");
    assert_eq!(kata_to_romaji("カヲカ", &map), "Kaヲka");
}

#[test]
fn test_empty_mono_value_is_unmapped() {
    let map = mono_only(&[("カ", "")]);
    assert_eq!(kata_to_romaji("カ", &map), "カ");
}

#[test]
fn test_non_katakana_passthrough() {
    let map = mono_only(&[("タ", "ta")]);
    assert_eq!(kata_to_romaji("タ山", &map), "Ta山");
    assert_eq!(kata_to_romaji("タ 1", &map), "Ta 1");
}

#[test]
fn test_hyphens_removed() {
    let map = mono_only(&[("タ", "ta"), ("ナ", "na")]);
    assert_eq!(kata_to_romaji("タ-ナ", &map), "Tana");
    assert_eq!(kata_to_romaji("タ－ナ", &map), "Tana");
}

#[test]
fn test_hyphen_in_table_value_removed() {
    let map = mono_only(&[("ヱ", "w-e")]);
    assert_eq!(kata_to_romaji("ヱ", &map), "We");
}

#[test]
fn test_whole_string_capitalization() {
    let map = mono_only(&[("タ", "ta"), ("ロ", "ro"), ("ウ", "u")]);
    assert_eq!(kata_to_romaji("タロウ タロウ", &map), "Tarou tarou");
    assert_eq!(kata_to_romaji("SMITH", &map), "Smith");
}

#[test]
fn test_malformed_keys_do_not_panic() {
    let map = make_map(&[("カカカ", "kakaka"), ("", "x")]);
    assert_eq!(kata_to_romaji("カカカ", &map), "カカカ");
}
