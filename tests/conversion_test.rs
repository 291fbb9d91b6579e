use docxtract::{Config, ConversionReport, Docxtract, OutputMode};
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn text_cell(text: &str) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
}

fn write_docx(path: &Path, paragraphs: &[&str], rows: &[Vec<&str>]) {
    let mut docx = Docx::new();

    for paragraph in paragraphs {
        docx = docx.add_paragraph(Paragraph::new().add_run(Run::new().add_text(*paragraph)));
    }

    if !rows.is_empty() {
        let table = Table::new(
            rows.iter()
                .map(|cells| TableRow::new(cells.iter().map(|c| text_cell(c)).collect()))
                .collect(),
        );
        docx = docx.add_table(table);
    }

    let file = fs::File::create(path).unwrap();
    docx.build().pack(file).unwrap();
}

fn run_conversion(source: &Path, destination: &Path) -> ConversionReport {
    let config = Config::new(source.to_path_buf(), destination.to_path_buf());
    let app = Docxtract::new(config, OutputMode::Plain, 0, true);
    app.convert_documents().unwrap()
}

#[test]
fn converts_paragraphs_and_tables_to_text() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(
        &source.join("Survey1.docx"),
        &["Intro", "Second para"],
        &[vec!["Q1", "Yes"], vec!["Q2", "No"]],
    );

    let report = run_conversion(&source, &destination);
    assert_eq!(report.summary.total_documents, 1);
    assert_eq!(report.summary.converted, 1);
    assert_eq!(report.summary.failed, 0);

    let output = fs::read_to_string(destination.join("Survey1.txt")).unwrap();
    assert_eq!(
        output,
        "=== PARAGRAPHS ===\nIntro\nSecond para\n\n=== TABLES ===\nQ1 | Yes\nQ2 | No"
    );
}

#[test]
fn cell_whitespace_is_trimmed() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(&source.join("cells.docx"), &[], &[vec!["a ", " b", "c"]]);

    run_conversion(&source, &destination);

    let output = fs::read_to_string(destination.join("cells.txt")).unwrap();
    assert_eq!(output, "=== PARAGRAPHS ===\n\n\n=== TABLES ===\na | b | c");
}

#[test]
fn whitespace_only_paragraphs_are_excluded() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(&source.join("blank.docx"), &["   ", "\t", "  "], &[]);

    run_conversion(&source, &destination);

    let output = fs::read_to_string(destination.join("blank.txt")).unwrap();
    assert_eq!(output, "=== PARAGRAPHS ===\n\n\n=== TABLES ===\n");
}

#[test]
fn empty_document_still_produces_both_headers() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(&source.join("empty.docx"), &[], &[]);

    let report = run_conversion(&source, &destination);
    assert_eq!(report.summary.converted, 1);

    let output = fs::read_to_string(destination.join("empty.txt")).unwrap();
    assert!(output.contains("=== PARAGRAPHS ==="));
    assert!(output.contains("=== TABLES ==="));
}

#[test]
fn corrupt_file_is_reported_and_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    // Sorted order puts the corrupt file first; the good one must still
    // convert.
    fs::write(source.join("aa_broken.docx"), b"definitely not a zip").unwrap();
    write_docx(&source.join("zz_good.docx"), &["Fine"], &[]);

    let report = run_conversion(&source, &destination);
    assert_eq!(report.summary.total_documents, 2);
    assert_eq!(report.summary.converted, 1);
    assert_eq!(report.summary.failed, 1);

    assert!(!destination.join("aa_broken.txt").exists());
    assert!(destination.join("zz_good.txt").exists());

    let failed = report
        .files
        .iter()
        .find(|f| f.filename == "aa_broken.docx")
        .unwrap();
    assert!(failed.error.is_some());
    assert!(failed.output_file.is_none());
}

#[test]
fn repeated_runs_are_byte_identical() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(&source.join("stable.docx"), &["Same"], &[vec!["x", "y"]]);

    run_conversion(&source, &destination);
    let first = fs::read(destination.join("stable.txt")).unwrap();

    run_conversion(&source, &destination);
    let second = fs::read(destination.join("stable.txt")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn suffix_replacement_is_literal_and_trailing() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(&source.join("my.docx.docx"), &["Nested name"], &[]);

    run_conversion(&source, &destination);

    assert!(destination.join("my.docx.txt").exists());
    assert!(!destination.join("my.txt.txt").exists());
    assert!(!destination.join("my.txt").exists());
}

#[test]
fn non_matching_entries_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(&source.join("kept.docx"), &["Kept"], &[]);
    fs::write(source.join("REPORT.DOCX"), b"wrong case").unwrap();
    fs::write(source.join("notes.txt"), b"plain text").unwrap();

    let subdir = source.join("nested");
    fs::create_dir(&subdir).unwrap();
    fs::write(subdir.join("deep.docx"), b"not scanned").unwrap();

    let report = run_conversion(&source, &destination);
    assert_eq!(report.summary.total_documents, 1);
    assert_eq!(report.files[0].filename, "kept.docx");

    let outputs: Vec<_> = fs::read_dir(&destination)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(outputs, vec!["kept.txt"]);
}

#[test]
fn destination_is_created_with_parents() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("source");
    let destination = temp_dir.path().join("deeply").join("nested").join("dest");
    fs::create_dir(&source).unwrap();

    write_docx(&source.join("doc.docx"), &["Text"], &[]);

    run_conversion(&source, &destination);
    assert!(destination.join("doc.txt").exists());
}
