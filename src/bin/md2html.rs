//! `md2html` binary for md2pdf.
//!
//! A thin shim over the library crate: reads `Project_Summary.md` from the
//! current directory and writes the print-ready `Project_Summary.html` next
//! to it.

use anyhow::{Context, Result};
use md2pdf::{render_file, HTML_PATH, MARKDOWN_PATH};
use std::io;
use std::path::Path;
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout stays clean for the operator messages.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let summary = render_file(Path::new(MARKDOWN_PATH), Path::new(HTML_PATH))
        .context("Failed to render Markdown to HTML")?;
    debug!(
        "Render summary: {} bytes of Markdown in, {} bytes of HTML out",
        summary.markdown_bytes, summary.html_bytes
    );

    println!("Created print-ready HTML: {HTML_PATH}");
    println!();
    println!("To create PDF:");
    println!("1. Open {HTML_PATH} in your web browser");
    println!("2. Press Cmd+P (Mac) or Ctrl+P (Windows/Linux)");
    println!("3. Select 'Save as PDF' as the destination");
    println!("4. Click Save");
    println!();
    println!("Or run html2pdf to generate the PDF automatically.");

    Ok(())
}
