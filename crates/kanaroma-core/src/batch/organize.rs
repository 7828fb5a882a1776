use tracing::{debug, debug_span, info};

use super::Sheet;
use crate::mora::MoraMap;
use crate::replace::{apply_rules, ReplacementRule};
use crate::romaji::transliterate;
use crate::unicode::to_katakana;

/// Columns whose kana is folded to full-width katakana.
pub const KANA_COLUMNS: [&str; 2] = ["Kana_First_Orig", "Kana_Last_Orig"];

/// (romaji column, kana source column) pairs.
pub const ROMAJI_TARGETS: [(&str, &str); 2] = [
    ("Romaji_First_Orig", "Kana_First_Orig"),
    ("Romaji_Last_Orig", "Kana_Last_Orig"),
];

/// Number of cells each step changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrganizeReport {
    pub kana_normalized: usize,
    pub romaji_written: usize,
    pub companies_replaced: usize,
}

impl OrganizeReport {
    pub fn total(&self) -> usize {
        self.kana_normalized + self.romaji_written + self.companies_replaced
    }
}

/// Normalize every cell below each named header. Headers that are not
/// present are skipped. Returns the number of cells rewritten.
pub fn normalize_kana_columns(sheet: &mut Sheet, columns: &[&str]) -> usize {
    let Some(last_row) = sheet.last_row() else {
        return 0;
    };
    let mut changed = 0;

    for &name in columns {
        let Some((header_row, col)) = sheet.find_header(name) else {
            debug!(column = name, "kana column not found");
            continue;
        };
        for row in header_row + 1..=last_row {
            let Some(value) = sheet.get(row, col) else {
                continue;
            };
            let normalized = to_katakana(value);
            if normalized != value {
                sheet.set(row, col, Some(normalized));
                changed += 1;
            }
        }
    }

    changed
}

/// Write the transliteration of each kana cell into its romaji column.
///
/// A missing romaji header skips the pair. A missing kana header makes the
/// romaji column its own source. Blank sources are left alone, and a cell is
/// only rewritten when the value differs.
pub fn fill_romaji_columns(sheet: &mut Sheet, targets: &[(&str, &str)], map: &MoraMap) -> usize {
    let Some(last_row) = sheet.last_row() else {
        return 0;
    };
    let mut changed = 0;

    for &(romaji_name, kana_name) in targets {
        let Some((header_row, romaji_col)) = sheet.find_header(romaji_name) else {
            debug!(column = romaji_name, "romaji column not found");
            continue;
        };
        let source_col = sheet
            .find_header(kana_name)
            .map_or(romaji_col, |(_, col)| col);

        for row in header_row + 1..=last_row {
            let source = match sheet.get(row, source_col) {
                Some(s) if !s.trim().is_empty() => s,
                _ => continue,
            };
            let Some(romaji) = transliterate(Some(source), map) else {
                continue;
            };
            if sheet.get(row, romaji_col) != Some(romaji.as_str()) {
                sheet.set(row, romaji_col, Some(romaji));
                changed += 1;
            }
        }
    }

    changed
}

/// Apply the replacement rules to every present cell.
pub fn replace_company_names(sheet: &mut Sheet, rules: &[ReplacementRule]) -> usize {
    let mut changed = 0;
    for cell in sheet.cells_mut() {
        let replaced = apply_rules(cell, rules).into_owned();
        if replaced != *cell {
            *cell = replaced;
            changed += 1;
        }
    }
    changed
}

/// Run kana normalization, romaji generation and company-name replacement,
/// in that order, with the default column names.
pub fn organize(sheet: &mut Sheet, map: &MoraMap, rules: &[ReplacementRule]) -> OrganizeReport {
    let _span = debug_span!("organize", rows = sheet.row_count()).entered();

    let report = OrganizeReport {
        kana_normalized: normalize_kana_columns(sheet, &KANA_COLUMNS),
        romaji_written: fill_romaji_columns(sheet, &ROMAJI_TARGETS, map),
        companies_replaced: replace_company_names(sheet, rules),
    };

    info!(
        kana_normalized = report.kana_normalized,
        romaji_written = report.romaji_written,
        companies_replaced = report.companies_replaced,
        "organize finished"
    );
    report
}
