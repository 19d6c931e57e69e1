//! # md2pdf
//!
//! Render a Markdown report to print-ready HTML, then print that HTML to PDF
//! with a headless browser.
//!
//! ## Why a browser?
//!
//! The report's layout lives in print-media CSS: Letter page geometry,
//! avoid-break rules around headings and tables, widow/orphan control,
//! repeated table headers across page breaks. A browser print engine honours
//! all of it; direct Markdown-to-PDF tools honour almost none. So the
//! workflow goes through an intermediate HTML document styled for print and
//! lets a headless Chrome do the pagination.
//!
//! ## Pipeline Overview
//!
//! ```text
//! Project_Summary.md
//!  │
//!  ├─ 1. markdown  convert to an HTML fragment (tables, fenced code, hard breaks)
//!  ├─ 2. document  embed in the static shell with the inlined print stylesheet
//!  │         └──▶ Project_Summary.html          (md2html stops here)
//!  └─ 3. browser   load the file:// URL headless, print to PDF, Letter 0.75in
//!            └──▶ Project_Summary.pdf           (html2pdf)
//! ```
//!
//! The two halves run as separate binaries and meet only at the HTML file on
//! disk; either can be re-run independently.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use md2pdf::{print_file, render_file, PageSetup, HTML_PATH, MARKDOWN_PATH, PDF_PATH};
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     render_file(Path::new(MARKDOWN_PATH), Path::new(HTML_PATH))?;
//!     print_file(Path::new(HTML_PATH), Path::new(PDF_PATH), &PageSetup::default())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `md2html` and `html2pdf` binaries |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! md2pdf = { version = "0.1", default-features = false }
//! ```

// ── Modules ──────────────────────────────────────────────────────────────

pub mod config;
pub mod error;
pub mod install;
pub mod pipeline;
pub mod print;
pub mod render;
pub mod style;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use config::{
    PageSetup, PageSetupBuilder, DEFAULT_MARGIN_IN, HTML_PATH, LETTER_HEIGHT_IN, LETTER_WIDTH_IN,
    MARKDOWN_PATH, PDF_PATH,
};
pub use error::Md2PdfError;
pub use install::install_browser;
pub use print::{print_file, PrintSummary};
pub use render::{render_file, render_to_string, RenderSummary};
