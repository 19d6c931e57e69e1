//! Renderer entry points: Markdown file → print-ready HTML file.
//!
//! The renderer half of the workflow. [`render_file`] is what the `md2html`
//! binary calls; [`render_to_string`] is the pure core (no filesystem), which
//! is also what keeps the output byte-stable: same input text, same document,
//! every run.

use crate::error::Md2PdfError;
use crate::pipeline::{document, markdown};
use std::fs;
use std::path::Path;
use tracing::info;

/// Outcome of a successful render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Bytes of Markdown read from the source file.
    pub markdown_bytes: usize,
    /// Bytes of HTML written to the output file.
    pub html_bytes: usize,
}

/// Convert Markdown text to a complete print-ready HTML document.
///
/// Pure function over the input text; no filesystem access.
pub fn render_to_string(markdown_text: &str) -> String {
    let fragment = markdown::to_html_fragment(markdown_text);
    document::wrap_fragment(&fragment)
}

/// Read the Markdown source, convert it, and write the HTML document.
///
/// Overwrites any existing file at `output`.
///
/// # Errors
/// - [`Md2PdfError::SourceNotFound`] / [`Md2PdfError::SourceRead`] when the
///   source is absent or unreadable
/// - [`Md2PdfError::OutputWrite`] when the document cannot be written
pub fn render_file(source: &Path, output: &Path) -> Result<RenderSummary, Md2PdfError> {
    info!("Rendering {} -> {}", source.display(), output.display());

    // ── Step 1: Read the Markdown source ─────────────────────────────────
    if !source.exists() {
        return Err(Md2PdfError::SourceNotFound {
            path: source.to_path_buf(),
        });
    }
    let markdown_text = fs::read_to_string(source).map_err(|e| Md2PdfError::SourceRead {
        path: source.to_path_buf(),
        source: e,
    })?;

    // ── Step 2: Convert and wrap ─────────────────────────────────────────
    let html = render_to_string(&markdown_text);

    // ── Step 3: Write the document ───────────────────────────────────────
    fs::write(output, &html).map_err(|e| Md2PdfError::OutputWrite {
        path: output.to_path_buf(),
        source: e,
    })?;

    info!("Wrote {} bytes of HTML", html.len());
    Ok(RenderSummary {
        markdown_bytes: markdown_text.len(),
        html_bytes: html.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_to_string_produces_a_full_document() {
        let html = render_to_string("# Title\n\nSome *text*.");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn missing_source_is_reported_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("absent.md");
        let output = dir.path().join("out.html");

        let err = render_file(&source, &output).unwrap_err();
        assert!(matches!(err, Md2PdfError::SourceNotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn render_file_reports_sizes() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("report.md");
        let output = dir.path().join("report.html");
        std::fs::write(&source, "# Hi\n").unwrap();

        let summary = render_file(&source, &output).unwrap();
        assert_eq!(summary.markdown_bytes, 5);
        assert_eq!(
            summary.html_bytes,
            std::fs::read(&output).unwrap().len()
        );
    }
}
