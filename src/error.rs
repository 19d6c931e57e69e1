//! Error types for the md2pdf library.
//!
//! A single [`Md2PdfError`] covers both pipeline halves. The variants matter
//! more than usual here because the binaries map them to exit codes and
//! operator guidance:
//!
//! * [`Md2PdfError::HtmlMissing`] — the printer's precondition failure,
//!   reported with a "run the renderer first" message and exit code 1.
//! * Every browser-related variant — treated as one automation-failure class
//!   that triggers the one-shot Chromium download fallback.
//!
//! Each message ends with an actionable next step so a failure seen on a
//! terminal never leaves the operator guessing.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the md2pdf library.
#[derive(Debug, Error)]
pub enum Md2PdfError {
    // ── Renderer errors ───────────────────────────────────────────────────
    /// The Markdown source file was not found at the given path.
    #[error("Markdown source not found: '{path}'\nCheck the path exists and is readable.")]
    SourceNotFound { path: PathBuf },

    /// The Markdown source exists but could not be read.
    #[error("Failed to read Markdown source '{path}': {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Printer errors ────────────────────────────────────────────────────
    /// The intermediate HTML file does not exist yet.
    #[error("HTML file not found: '{path}'\nRun md2html first to generate it.")]
    HtmlMissing { path: PathBuf },

    /// The HTML path could not be turned into a file:// URL.
    #[error("Could not build a file:// URL for '{path}': {detail}")]
    FileUrl { path: PathBuf, detail: String },

    /// No Chrome or Chromium executable could be located.
    #[error(
        "No Chrome or Chromium executable found: {detail}\n\
Install Chrome/Chromium, or let html2pdf download a managed copy."
    )]
    BrowserNotFound { detail: String },

    /// The browser subprocess failed to start or crashed during startup.
    #[error("Failed to launch the headless browser: {detail}")]
    BrowserLaunch { detail: String },

    /// The page could not be navigated to the HTML document.
    #[error("Failed to load '{url}' in the browser: {detail}")]
    Navigation { url: String, detail: String },

    /// The print-to-PDF call itself failed.
    #[error("Print-to-PDF failed: {detail}")]
    PrintFailed { detail: String },

    // ── Install errors ────────────────────────────────────────────────────
    /// The one-shot managed-Chromium download failed.
    #[error(
        "Failed to download a headless browser: {detail}\n\
Check your internet connection, or install Chrome/Chromium manually."
    )]
    BrowserInstall { detail: String },

    // ── I/O errors ────────────────────────────────────────────────────────
    /// Could not create or write an output file (HTML or PDF).
    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ── Config errors ─────────────────────────────────────────────────────
    /// Builder validation failed.
    #[error("Invalid page setup: {0}")]
    InvalidPageSetup(String),
}
