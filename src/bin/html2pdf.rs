//! `html2pdf` binary for md2pdf.
//!
//! A thin shim over the library crate: prints `Project_Summary.html` from
//! the current directory to `Project_Summary.pdf` through a headless
//! browser. When no browser can be launched, downloads a managed Chromium
//! copy and asks the operator to re-run.

use md2pdf::{install_browser, print_file, Md2PdfError, PageSetup, HTML_PATH, PDF_PATH};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Logs go to stderr so stdout stays clean for the operator messages.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match print_file(Path::new(HTML_PATH), Path::new(PDF_PATH), &PageSetup::default()) {
        Ok(_) => {
            println!("PDF created successfully: {PDF_PATH}");
            ExitCode::SUCCESS
        }
        Err(Md2PdfError::HtmlMissing { .. }) => {
            println!("Error: {HTML_PATH} not found. Run md2html first.");
            ExitCode::FAILURE
        }
        Err(err) => {
            println!("Error creating PDF: {err}");
            println!();
            println!("Trying to download a headless browser...");
            attempt_install()
        }
    }
}

/// One-shot remedial download. No automatic retry of the PDF generation:
/// the operator is asked to re-run so the fresh browser is picked up by
/// the normal resolution chain.
fn attempt_install() -> ExitCode {
    match install_browser() {
        Ok(()) => {
            println!("Browser installed. Please run html2pdf again.");
            ExitCode::SUCCESS
        }
        Err(install_err) => {
            error!("Browser download failed: {install_err}");
            println!("Could not install a browser automatically.");
            println!();
            println!("Alternative: open {HTML_PATH} in your browser and print to PDF");
            ExitCode::FAILURE
        }
    }
}
