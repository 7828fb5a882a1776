/// Row-major grid of optional text cells, 0-based.
///
/// Rows may have different lengths; reading past the end of a row yields an
/// empty cell and writing past it extends the row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sheet {
    rows: Vec<Vec<Option<String>>>,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<Option<String>>>) -> Self {
        Self { rows }
    }

    /// Build a sheet from string literals; empty strings become empty cells.
    pub fn from_strs(rows: &[&[&str]]) -> Self {
        let rows = rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                    .collect()
            })
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Vec<Option<String>>> {
        self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Index of the last row of the used range.
    pub fn last_row(&self) -> Option<usize> {
        self.rows.len().checked_sub(1)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col)?.as_deref()
    }

    pub fn set(&mut self, row: usize, col: usize, value: Option<String>) {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if col >= cells.len() {
            cells.resize(col + 1, None);
        }
        cells[col] = value;
    }

    /// Locate a header cell: the first cell, scanning rows top to bottom and
    /// each row left to right, whose trimmed text equals `name` ignoring case.
    pub fn find_header(&self, name: &str) -> Option<(usize, usize)> {
        let name = name.trim();
        self.rows.iter().enumerate().find_map(|(r, cells)| {
            cells.iter().position(|cell| {
                cell.as_deref()
                    .is_some_and(|text| eq_ignore_case(text.trim(), name))
            })
            .map(|c| (r, c))
        })
    }

    /// Mutable access to every present cell.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.rows
            .iter_mut()
            .flat_map(|cells| cells.iter_mut())
            .filter_map(Option::as_mut)
    }
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_and_set() {
        let mut sheet = Sheet::from_strs(&[&["a", ""], &["b"]]);
        assert_eq!(sheet.get(0, 0), Some("a"));
        assert_eq!(sheet.get(0, 1), None);
        assert_eq!(sheet.get(1, 5), None);
        assert_eq!(sheet.get(9, 0), None);

        sheet.set(1, 2, Some("c".into()));
        assert_eq!(sheet.get(1, 2), Some("c"));
        assert_eq!(sheet.get(1, 1), None);

        sheet.set(3, 0, Some("d".into()));
        assert_eq!(sheet.row_count(), 4);
        assert_eq!(sheet.last_row(), Some(3));
    }

    #[test]
    fn test_find_header_whole_cell_ignoring_case() {
        let sheet = Sheet::from_strs(&[
            &["Attendees", ""],
            &["kana_first_orig_old", " KANA_FIRST_ORIG "],
        ]);
        assert_eq!(sheet.find_header("Kana_First_Orig"), Some((1, 1)));
        assert_eq!(sheet.find_header("Romaji_First_Orig"), None);
    }

    #[test]
    fn test_find_header_prefers_earlier_row() {
        let sheet = Sheet::from_strs(&[&["", "", "Name"], &["Name", "", ""]]);
        assert_eq!(sheet.find_header("name"), Some((0, 2)));
    }

    #[test]
    fn test_empty_sheet() {
        let sheet = Sheet::default();
        assert_eq!(sheet.last_row(), None);
        assert_eq!(sheet.find_header("x"), None);
    }
}
