//! Printer entry point: HTML file → PDF file.
//!
//! The printer half of the workflow, called by the `html2pdf` binary. The
//! browser subprocess never escapes [`crate::pipeline::browser`]; by the time
//! this module writes the PDF the browser is already gone.

use crate::config::PageSetup;
use crate::error::Md2PdfError;
use crate::pipeline::browser;
use std::fs;
use std::path::Path;
use tracing::info;

/// Outcome of a successful print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintSummary {
    /// Bytes of PDF written to the output file.
    pub pdf_bytes: usize,
}

/// Print the HTML document at `html` to a PDF file at `output`.
///
/// Overwrites any existing file at `output`.
///
/// # Errors
/// - [`Md2PdfError::HtmlMissing`] when `html` does not exist; returned
///   before any browser is launched and without touching `output`
/// - browser variants ([`Md2PdfError::BrowserNotFound`],
///   [`Md2PdfError::BrowserLaunch`], [`Md2PdfError::Navigation`],
///   [`Md2PdfError::PrintFailed`]) for automation failures
/// - [`Md2PdfError::OutputWrite`] when the PDF cannot be written
pub fn print_file(
    html: &Path,
    output: &Path,
    setup: &PageSetup,
) -> Result<PrintSummary, Md2PdfError> {
    // ── Step 1: Precondition — the renderer must have run ────────────────
    if !html.exists() {
        return Err(Md2PdfError::HtmlMissing {
            path: html.to_path_buf(),
        });
    }

    info!("Printing {} -> {}", html.display(), output.display());

    // ── Step 2: Print inside a scoped browser ────────────────────────────
    let pdf = browser::print_html_file(html, setup)?;

    // ── Step 3: Write the PDF ────────────────────────────────────────────
    fs::write(output, &pdf).map_err(|e| Md2PdfError::OutputWrite {
        path: output.to_path_buf(),
        source: e,
    })?;

    info!("Wrote {} bytes of PDF", pdf.len());
    Ok(PrintSummary {
        pdf_bytes: pdf.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_html_aborts_without_creating_a_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let html = dir.path().join("absent.html");
        let pdf = dir.path().join("out.pdf");

        let err = print_file(&html, &pdf, &PageSetup::default()).unwrap_err();
        assert!(matches!(err, Md2PdfError::HtmlMissing { .. }));
        assert!(err.to_string().contains("md2html"));
        assert!(!pdf.exists());
    }
}
