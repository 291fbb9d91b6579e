use crate::error::{DocxtractError, Result};
use crate::reader::content::{DocumentContent, Row, Table};
use docx_rs::{
    read_docx, DocumentChild, ParagraphChild, RunChild, TableCellContent, TableChild,
    TableRowChild,
};
use std::fs;
use std::path::Path;

/// The narrow reading capability the converter depends on: one path in, the
/// document's paragraph and table text out. Implementations own all
/// format-specific parsing; tests can substitute their own.
pub trait DocumentReader {
    fn read_document(&self, path: &Path) -> Result<DocumentContent>;
}

/// [`DocumentReader`] backed by the `docx-rs` crate.
///
/// A DOCX file is a ZIP archive of XML parts; `docx-rs` parses the container
/// and exposes a typed tree. Text lives on the
/// Paragraph -> Run -> Text path, tables on
/// Table -> TableRow -> TableCell -> Paragraph.
#[derive(Debug, Default)]
pub struct DocxReader;

impl DocxReader {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentReader for DocxReader {
    fn read_document(&self, path: &Path) -> Result<DocumentContent> {
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default()
            .to_string();

        // Any failure to open or traverse the document is a per-file parse
        // error; the caller decides whether the batch continues.
        let bytes = fs::read(path).map_err(|e| DocxtractError::DocumentParse {
            filename: filename.clone(),
            message: e.to_string(),
        })?;

        let docx = read_docx(&bytes).map_err(|e| DocxtractError::DocumentParse {
            filename: filename.clone(),
            message: e.to_string(),
        })?;

        let mut content = DocumentContent::new();

        for child in &docx.document.children {
            match child {
                DocumentChild::Paragraph(paragraph) => {
                    content.paragraphs.push(paragraph_text(paragraph));
                }
                DocumentChild::Table(table) => {
                    content.tables.push(read_table(table));
                }
                _ => {}
            }
        }

        Ok(content)
    }
}

/// Concatenates the run text of one paragraph. Runs are fragments of the
/// same sentence, so no separator is inserted between them.
fn paragraph_text(paragraph: &docx_rs::Paragraph) -> String {
    let mut text = String::new();
    for child in &paragraph.children {
        append_paragraph_child(child, &mut text);
    }
    text
}

fn append_paragraph_child(child: &ParagraphChild, out: &mut String) {
    match child {
        ParagraphChild::Run(run) => append_run_text(run, out),
        // Hyperlinks wrap their display text in nested runs.
        ParagraphChild::Hyperlink(link) => {
            for nested in &link.children {
                append_paragraph_child(nested, out);
            }
        }
        _ => {}
    }
}

fn append_run_text(run: &docx_rs::Run, out: &mut String) {
    for child in &run.children {
        match child {
            RunChild::Text(t) => out.push_str(&t.text),
            RunChild::Tab(_) => out.push('\t'),
            _ => {}
        }
    }
}

fn read_table(table: &docx_rs::Table) -> Table {
    let mut rows = Vec::new();

    for row_child in &table.rows {
        match row_child {
            TableChild::TableRow(table_row) => {
                let mut cells = Vec::new();
                for cell_child in &table_row.cells {
                    match cell_child {
                        TableRowChild::TableCell(cell) => cells.push(cell_text(cell)),
                    }
                }
                rows.push(Row { cells });
            }
        }
    }

    Table { rows }
}

/// A cell holds its own paragraph sequence; they are joined with newlines to
/// form the cell's text.
fn cell_text(cell: &docx_rs::TableCell) -> String {
    let mut parts = Vec::new();

    for content in &cell.children {
        if let TableCellContent::Paragraph(paragraph) = content {
            parts.push(paragraph_text(paragraph));
        }
    }

    parts.join("\n")
}
