use serde::{Deserialize, Serialize};

/// The full in-memory roster table: one row per client record, cells
/// addressed by header name.
///
/// The roster is the single mutable source of truth for the process
/// lifetime. It is loaded once, edited in place, and written back whole;
/// there is no partial-update API and no undo history. Columns the tool
/// does not know about are carried through load and save untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Roster {
    /// Build a roster from raw headers and rows.
    ///
    /// Rows shorter than the header (hand-edited files produce them) are
    /// padded with empty cells so cell addressing is total.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<String>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of client rows (the header is not a row).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(Vec::as_slice)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Append `name` with `default` in every row, unless it already
    /// exists. Load-time normalization calls this for each known column.
    pub fn ensure_column(&mut self, name: &str, default: &str) {
        if self.column_index(name).is_some() {
            return;
        }
        self.headers.push(name.to_string());
        for row in &mut self.rows {
            row.push(default.to_string());
        }
    }

    /// Cell value at (`row`, `column`), or `""` when either is unknown.
    pub fn cell(&self, row: usize, column: &str) -> &str {
        let Some(col) = self.column_index(column) else {
            return "";
        };
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set a cell. Returns false when the row or column does not exist.
    pub fn set_cell(&mut self, row: usize, column: &str, value: impl Into<String>) -> bool {
        let Some(col) = self.column_index(column) else {
            return false;
        };
        match self.rows.get_mut(row).and_then(|cells| cells.get_mut(col)) {
            Some(cell) => {
                *cell = value.into();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Roster {
        Roster::new(
            vec!["VENDEDOR".into(), "NOMBRE TERCERO".into()],
            vec![
                vec!["Marta".into(), "Ana Ruiz".into()],
                vec!["Pedro".into(), "Luis Prado".into()],
            ],
        )
    }

    #[test]
    fn pads_short_rows_to_header_width() {
        let r = Roster::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![vec!["1".into()]],
        );
        assert_eq!(r.cell(0, "B"), "");
        assert_eq!(r.cell(0, "C"), "");
    }

    #[test]
    fn ensure_column_is_idempotent() {
        let mut r = roster();
        r.ensure_column("CIUDAD", "");
        r.ensure_column("CIUDAD", "");
        assert_eq!(r.headers().iter().filter(|h| *h == "CIUDAD").count(), 1);
        assert_eq!(r.cell(1, "CIUDAD"), "");
    }

    #[test]
    fn ensure_column_fills_every_row_with_default() {
        let mut r = roster();
        r.ensure_column("fecha gestion", "");
        for row in 0..r.len() {
            assert_eq!(r.cell(row, "fecha gestion"), "");
        }
    }

    #[test]
    fn set_cell_rejects_unknown_targets() {
        let mut r = roster();
        assert!(!r.set_cell(0, "NO SUCH", "x"));
        assert!(!r.set_cell(99, "VENDEDOR", "x"));
        assert!(r.set_cell(0, "VENDEDOR", "Lucía"));
        assert_eq!(r.cell(0, "VENDEDOR"), "Lucía");
    }

    #[test]
    fn cell_is_total_over_unknown_addresses() {
        let r = roster();
        assert_eq!(r.cell(0, "NO SUCH"), "");
        assert_eq!(r.cell(99, "VENDEDOR"), "");
    }
}
