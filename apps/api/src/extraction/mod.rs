//! Document text extraction for uploaded resumes.
//!
//! Converts a PDF or DOCX byte buffer into plain, normalized text. Decoding is
//! CPU-bound; async callers should run [`extract`] on a blocking thread.

use std::panic::{self, AssertUnwindSafe};

use docx_rs::{
    DocumentChild, ParagraphChild, RunChild, Table, TableCellContent, TableChild, TableRowChild,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Unsupported document format '{0}' (expected pdf or docx)")]
    UnsupportedFormat(String),

    #[error("Failed to extract resume text: {0}")]
    ExtractionFailed(String),
}

/// Document formats accepted for resume upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Pdf,
    Docx,
}

impl DocumentType {
    /// Accepts `pdf`/`docx` (any case, optional leading dot) or their MIME types.
    pub fn from_declared(declared: &str) -> Result<Self, ExtractionError> {
        let normalized = declared.trim().trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" | PDF_MIME => Ok(DocumentType::Pdf),
            "docx" | DOCX_MIME => Ok(DocumentType::Docx),
            _ => Err(ExtractionError::UnsupportedFormat(declared.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Pdf => "pdf",
            DocumentType::Docx => "docx",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            DocumentType::Pdf => PDF_MIME,
            DocumentType::Docx => DOCX_MIME,
        }
    }
}

/// Extracts normalized plain text from `bytes` interpreted as `declared_type`.
///
/// Fails with `UnsupportedFormat` for anything other than pdf/docx, and with
/// `ExtractionFailed` when decoding fails or yields no text.
pub fn extract(bytes: &[u8], declared_type: &str) -> Result<String, ExtractionError> {
    let doc_type = DocumentType::from_declared(declared_type)?;
    extract_typed(bytes, doc_type)
}

fn extract_typed(bytes: &[u8], doc_type: DocumentType) -> Result<String, ExtractionError> {
    let raw = match doc_type {
        DocumentType::Pdf => extract_pdf(bytes)?,
        DocumentType::Docx => extract_docx(bytes)?,
    };

    let text = normalize_text(&raw);
    if text.is_empty() {
        return Err(ExtractionError::ExtractionFailed(
            "document contains no extractable text".to_string(),
        ));
    }
    Ok(text)
}

fn extract_pdf(bytes: &[u8]) -> Result<String, ExtractionError> {
    // pdf-extract panics on some malformed inputs instead of returning Err.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem(bytes)
    }));

    match outcome {
        Ok(Ok(text)) => Ok(text),
        Ok(Err(e)) => Err(ExtractionError::ExtractionFailed(format!(
            "invalid PDF: {e}"
        ))),
        Err(_) => Err(ExtractionError::ExtractionFailed(
            "PDF decoder aborted on malformed input".to_string(),
        )),
    }
}

fn extract_docx(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes)
        .map_err(|e| ExtractionError::ExtractionFailed(format!("invalid DOCX: {e}")))?;

    let mut text = String::new();
    for child in &docx.document.children {
        match child {
            DocumentChild::Paragraph(paragraph) => {
                push_paragraph_children(&paragraph.children, &mut text);
                text.push('\n');
            }
            DocumentChild::Table(table) => push_table(table, &mut text),
            _ => {}
        }
    }
    Ok(text)
}

/// Appends run text, descending into hyperlinks so linked text is kept inline.
fn push_paragraph_children(children: &[ParagraphChild], text: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    match run_child {
                        RunChild::Text(t) => text.push_str(&t.text),
                        RunChild::Tab(_) => text.push('\t'),
                        _ => {}
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_paragraph_children(&link.children, text),
            _ => {}
        }
    }
}

/// One line per cell paragraph, rows top to bottom, cells left to right.
#[allow(irrefutable_let_patterns)]
fn push_table(table: &Table, text: &mut String) {
    for row in &table.rows {
        let TableChild::TableRow(row) = row else { continue };
        for cell in &row.cells {
            let TableRowChild::TableCell(cell) = cell else { continue };
            for content in &cell.children {
                match content {
                    TableCellContent::Paragraph(paragraph) => {
                        push_paragraph_children(&paragraph.children, text);
                        text.push('\n');
                    }
                    TableCellContent::Table(nested) => push_table(nested, text),
                    _ => {}
                }
            }
        }
    }
}

/// Normalizes line endings to `\n`, strips trailing whitespace per line,
/// collapses runs of blank lines into a single blank line, and trims the result.
pub fn normalize_text(raw: &str) -> String {
    let unified = raw
        .replace("\r\n", "\n")
        .replace(['\r', '\u{000C}'], "\n");

    let mut kept: Vec<&str> = Vec::new();
    for line in unified.split('\n') {
        let line = line.trim_end();
        if line.is_empty() && kept.last().is_some_and(|prev| prev.is_empty()) {
            continue;
        }
        kept.push(line);
    }

    kept.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docx_rs::{Docx, Hyperlink, HyperlinkType, Paragraph, Run, TableCell, TableRow};
    use std::io::Cursor;

    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let mut docx = Docx::new();
        for text in paragraphs {
            let paragraph = if text.is_empty() {
                Paragraph::new()
            } else {
                Paragraph::new().add_run(Run::new().add_text(*text))
            };
            docx = docx.add_paragraph(paragraph);
        }
        pack(docx)
    }

    #[test]
    fn test_declared_type_accepts_extensions_and_mime() {
        assert_eq!(DocumentType::from_declared("pdf").unwrap(), DocumentType::Pdf);
        assert_eq!(DocumentType::from_declared(".DOCX").unwrap(), DocumentType::Docx);
        assert_eq!(DocumentType::from_declared(PDF_MIME).unwrap(), DocumentType::Pdf);
        assert_eq!(DocumentType::from_declared(DOCX_MIME).unwrap(), DocumentType::Docx);
    }

    #[test]
    fn test_unsupported_format_for_any_bytes() {
        for declared in ["txt", "doc", "", "application/msword", "rtf"] {
            for bytes in [&b""[..], &b"%PDF-1.4"[..], &b"PK\x03\x04"[..]] {
                let err = extract(bytes, declared).unwrap_err();
                assert!(
                    matches!(err, ExtractionError::UnsupportedFormat(_)),
                    "declared={declared:?} gave {err:?}"
                );
            }
        }
    }

    #[test]
    fn test_garbage_pdf_fails_extraction() {
        let err = extract(b"definitely not a pdf", "pdf").unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[test]
    fn test_garbage_docx_fails_extraction() {
        let err = extract(b"not a zip archive", "docx").unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[test]
    fn test_docx_paragraphs_extracted_and_normalized() {
        let bytes = build_docx(&[
            "Jane Doe",
            "",
            "",
            "",
            "Skills: React, Node.js, MongoDB",
            "5 years of experience",
        ]);
        let text = extract(&bytes, "docx").unwrap();
        assert_eq!(
            text,
            "Jane Doe\n\nSkills: React, Node.js, MongoDB\n5 years of experience"
        );
    }

    fn pack(docx: Docx) -> Vec<u8> {
        let mut buf = Cursor::new(Vec::new());
        docx.build().pack(&mut buf).unwrap();
        buf.into_inner()
    }

    /// Minimal PDF 1.4 with one Helvetica text line per page.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
        let mut objects = vec![
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            format!(
                "<< /Type /Pages /Kids [{}] /Count {} >>",
                (0..pages.len())
                    .map(|i| format!("{} 0 R", 4 + 2 * i))
                    .collect::<Vec<_>>()
                    .join(" "),
                pages.len()
            ),
            "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string(),
        ];
        for (i, line) in pages.iter().enumerate() {
            objects.push(format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
                 /Resources << /Font << /F1 3 0 R >> >> /Contents {} 0 R >>",
                5 + 2 * i
            ));
            let stream = format!("BT /F1 12 Tf 72 720 Td ({line}) Tj ET");
            objects.push(format!(
                "<< /Length {} >>\nstream\n{stream}\nendstream",
                stream.len()
            ));
        }

        let mut pdf = String::from("%PDF-1.4\n");
        let mut offsets = Vec::with_capacity(objects.len());
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.push_str(&format!("{} 0 obj\n{body}\nendobj\n", i + 1));
        }
        let xref_at = pdf.len();
        pdf.push_str(&format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1));
        for offset in offsets {
            pdf.push_str(&format!("{offset:010} 00000 n \n"));
        }
        pdf.push_str(&format!(
            "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref_at}\n%%EOF\n",
            objects.len() + 1
        ));
        pdf.into_bytes()
    }

    #[test]
    fn test_pdf_text_extracted_in_page_order() {
        let bytes = build_pdf(&["Alpha page", "Middle page", "Omega page"]);
        let text = extract(&bytes, "pdf").unwrap();
        assert!(!text.is_empty());
        assert!(!text.contains('\r'));
        assert!(!text.contains("\n\n\n"));
        assert_eq!(text, text.trim());

        let alpha = text.find("Alpha").expect("first page text");
        let middle = text.find("Middle").expect("second page text");
        let omega = text.find("Omega").expect("last page text");
        assert!(alpha < middle && middle < omega, "{text:?}");
    }

    #[test]
    fn test_pdf_declared_by_mime_type() {
        let bytes = build_pdf(&["Grace Hopper"]);
        let text = extract(&bytes, PDF_MIME).unwrap();
        assert!(text.contains("Grace"), "{text:?}");
    }

    #[test]
    fn test_docx_table_cells_extracted() {
        let table = docx_rs::Table::new(vec![
            TableRow::new(vec![
                TableCell::new().add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe"))),
                TableCell::new().add_paragraph(
                    Paragraph::new().add_run(Run::new().add_text("Skills: React, Node.js")),
                ),
            ]),
            TableRow::new(vec![TableCell::new().add_paragraph(
                Paragraph::new().add_run(Run::new().add_text("6 years of experience")),
            )]),
        ]);
        let bytes = pack(Docx::new().add_table(table));

        let text = extract(&bytes, "docx").unwrap();
        assert_eq!(text, "Jane Doe\nSkills: React, Node.js\n6 years of experience");
    }

    #[test]
    fn test_docx_hyperlink_text_kept_inline() {
        let paragraph = Paragraph::new()
            .add_run(Run::new().add_text("Email: "))
            .add_hyperlink(
                Hyperlink::new("mailto:jane@x.io", HyperlinkType::External)
                    .add_run(Run::new().add_text("jane@x.io")),
            );
        let bytes = pack(
            Docx::new()
                .add_paragraph(Paragraph::new().add_run(Run::new().add_text("Jane Doe")))
                .add_paragraph(paragraph),
        );

        let text = extract(&bytes, "docx").unwrap();
        assert_eq!(text, "Jane Doe\nEmail: jane@x.io");
    }

    #[test]
    fn test_empty_docx_fails_extraction() {
        let bytes = build_docx(&["", "   "]);
        let err = extract(&bytes, "docx").unwrap_err();
        assert!(matches!(err, ExtractionError::ExtractionFailed(_)));
    }

    #[test]
    fn test_normalize_crlf_and_lone_cr() {
        let text = normalize_text("a\r\nb\rc\n");
        assert_eq!(text, "a\nb\nc");
        assert!(!text.contains('\r'));
    }

    #[test]
    fn test_normalize_collapses_blank_runs() {
        let text = normalize_text("one\n\n\n  \n\t\ntwo\n\nthree");
        assert_eq!(text, "one\n\ntwo\n\nthree");
        assert!(!text.contains("\n\n\n"));
    }

    #[test]
    fn test_normalize_trims_edges() {
        assert_eq!(normalize_text("\n\n   hello world  \n\n"), "hello world");
    }

    #[test]
    fn test_normalize_form_feed_page_breaks() {
        assert_eq!(normalize_text("page one\u{000C}page two"), "page one\npage two");
    }
}
