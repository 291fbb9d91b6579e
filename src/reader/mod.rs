pub mod content;
pub mod docx;

pub use content::{DocumentContent, Row, Table, CELL_SEPARATOR};
pub use docx::{DocumentReader, DocxReader};
