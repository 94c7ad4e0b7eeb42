/// A grid of text cells, as exposed by a spreadsheet or a CSV file.
///
/// Rows and columns are 1-based, following the conventions of the excel world.
pub trait TabularSource {
    /// The number of rows of the table, header included.
    fn row_count(&self) -> usize;

    /// The text of a cell, or `None` if the cell does not exist.
    fn cell_text(&self, row: usize, col: usize) -> Option<String>;
}

/// An in-memory table of strings.
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct GridSource {
    rows: Vec<Vec<String>>,
}

impl GridSource {
    pub fn new(rows: Vec<Vec<String>>) -> GridSource {
        GridSource { rows }
    }

    /// Convenience constructor, mostly for tests.
    pub fn from_strs(rows: &[&[&str]]) -> GridSource {
        GridSource {
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
        }
    }
}

impl TabularSource for GridSource {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn cell_text(&self, row: usize, col: usize) -> Option<String> {
        if row == 0 || col == 0 {
            return None;
        }
        self.rows.get(row - 1)?.get(col - 1).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_addressing_is_one_based() {
        let g = GridSource::from_strs(&[&["Nombre", "Votos"], &["Ana", "120"]]);
        assert_eq!(g.row_count(), 2);
        assert_eq!(g.cell_text(1, 1), Some("Nombre".to_string()));
        assert_eq!(g.cell_text(2, 2), Some("120".to_string()));
        assert_eq!(g.cell_text(0, 1), None);
        assert_eq!(g.cell_text(2, 3), None);
        assert_eq!(g.cell_text(3, 1), None);
    }
}
