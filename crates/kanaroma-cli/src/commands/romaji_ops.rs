use std::path::Path;

use kanaroma_core::mora::load_mora_map;
use kanaroma_core::replace::{apply_rules, load_replacement_rules};
use kanaroma_core::romaji::kata_to_romaji;
use kanaroma_core::unicode::to_katakana;
use kanaroma_core::MoraMap;
use unicode_width::UnicodeWidthStr;

use super::collect_inputs;

pub fn romaji_cmd(texts: &[String], mapping: Option<&str>, table: bool) {
    let custom;
    let map = match mapping {
        Some(path) => {
            custom = die!(load_mora_map(Path::new(path)), "Error loading {path}: {}");
            &custom
        }
        None => MoraMap::global(),
    };

    let rows: Vec<(String, String)> = collect_inputs(texts)
        .into_iter()
        .map(|text| {
            let romaji = kata_to_romaji(&text, map);
            (text, romaji)
        })
        .collect();

    if table {
        for line in format_table(&rows) {
            println!("{line}");
        }
    } else {
        for (_, romaji) in &rows {
            println!("{romaji}");
        }
    }
}

pub fn normalize_cmd(texts: &[String]) {
    for text in collect_inputs(texts) {
        println!("{}", to_katakana(&text));
    }
}

pub fn replace_cmd(rules_file: &str, texts: &[String]) {
    let rules = die!(
        load_replacement_rules(Path::new(rules_file)),
        "Error loading {rules_file}: {}"
    );
    for text in collect_inputs(texts) {
        println!("{}", apply_rules(&text, &rules));
    }
}

/// Input and output side by side, the left column padded by display width
/// so full-width kana line up.
fn format_table(rows: &[(String, String)]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|(text, _)| UnicodeWidthStr::width(text.as_str()))
        .max()
        .unwrap_or(0);
    rows.iter()
        .map(|(text, romaji)| {
            let pad = width - UnicodeWidthStr::width(text.as_str());
            format!("{text}{}  {romaji}", " ".repeat(pad))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_table_aligns_by_display_width() {
        let rows = vec![
            ("タナカ".to_string(), "Tanaka".to_string()),
            ("abc".to_string(), "Abc".to_string()),
        ];
        let lines = format_table(&rows);
        assert_eq!(lines[0], "タナカ  Tanaka");
        assert_eq!(lines[1], "abc     Abc");
    }

    #[test]
    fn test_format_table_empty() {
        assert!(format_table(&[]).is_empty());
    }
}
