/// Separator between cell texts within a flattened table row.
pub const CELL_SEPARATOR: &str = " | ";

/// The textual content of one document: ordered paragraphs plus ordered
/// tables of ordered rows of ordered cell texts. This is everything the
/// converter is allowed to see of a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentContent {
    pub paragraphs: Vec<String>,
    pub tables: Vec<Table>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    pub cells: Vec<String>,
}

impl DocumentContent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Trimmed paragraph texts, with whitespace-only paragraphs dropped
    /// entirely. They contribute nothing to the output, not even a blank
    /// line.
    pub fn paragraph_lines(&self) -> Vec<String> {
        self.paragraphs
            .iter()
            .map(|p| p.trim())
            .filter(|p| !p.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// One line per table row across all tables: trimmed cell texts joined
    /// by [`CELL_SEPARATOR`]. Table boundaries are not marked.
    pub fn row_lines(&self) -> Vec<String> {
        self.tables
            .iter()
            .flat_map(|table| table.rows.iter())
            .map(|row| {
                row.cells
                    .iter()
                    .map(|cell| cell.trim())
                    .collect::<Vec<_>>()
                    .join(CELL_SEPARATOR)
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty() && self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Row {
        Row {
            cells: cells.iter().map(|c| c.to_string()).collect(),
        }
    }

    #[test]
    fn test_whitespace_paragraphs_are_dropped() {
        let content = DocumentContent {
            paragraphs: vec![
                "  First  ".to_string(),
                "   ".to_string(),
                "".to_string(),
                "Second".to_string(),
            ],
            tables: Vec::new(),
        };

        assert_eq!(content.paragraph_lines(), vec!["First", "Second"]);
    }

    #[test]
    fn test_cell_trimming_and_separator() {
        let content = DocumentContent {
            paragraphs: Vec::new(),
            tables: vec![Table {
                rows: vec![row(&["a ", " b", "c"])],
            }],
        };

        assert_eq!(content.row_lines(), vec!["a | b | c"]);
    }

    #[test]
    fn test_rows_flattened_across_tables() {
        let content = DocumentContent {
            paragraphs: Vec::new(),
            tables: vec![
                Table {
                    rows: vec![row(&["t1r1"]), row(&["t1r2"])],
                },
                Table {
                    rows: vec![row(&["t2r1"])],
                },
            ],
        };

        assert_eq!(content.row_lines(), vec!["t1r1", "t1r2", "t2r1"]);
    }

    #[test]
    fn test_empty_content() {
        let content = DocumentContent::new();
        assert!(content.is_empty());
        assert!(content.paragraph_lines().is_empty());
        assert!(content.row_lines().is_empty());
    }
}
