use crate::reader::DocumentContent;

pub const PARAGRAPHS_HEADER: &str = "=== PARAGRAPHS ===";
pub const TABLES_HEADER: &str = "=== TABLES ===";

/// Renders a document's content into the output text body.
///
/// The layout is fixed: the paragraphs header, one trimmed non-empty
/// paragraph per line, a blank line, the tables header, one flattened row
/// per line. No trailing newline is appended beyond what the joins produce.
pub fn render_document(content: &DocumentContent) -> String {
    format!(
        "{}\n{}\n\n{}\n{}",
        PARAGRAPHS_HEADER,
        content.paragraph_lines().join("\n"),
        TABLES_HEADER,
        content.row_lines().join("\n")
    )
}
