//! HTML file → PDF bytes via a headless browser.
//!
//! ## Why a real browser?
//!
//! The document's layout is defined entirely by print-media CSS (page
//! geometry, break rules, repeated table headers). A browser print engine is
//! the only renderer that honours all of it; standalone HTML-to-PDF crates
//! cover a fraction and diverge on pagination. The cost is a subprocess,
//! which this stage keeps strictly scoped: the handle is owned by the
//! function, so the process is torn down on success, on every error return,
//! and on panic unwind alike.

use crate::config::PageSetup;
use crate::error::Md2PdfError;
use crate::install;
use headless_chrome::types::PrintToPdfOptions;
use std::path::Path;
use tracing::{debug, info};
use url::Url;

/// Load `html_path` in a headless browser and print it to PDF bytes.
///
/// The file must exist; callers check the precondition first so a missing
/// file surfaces as [`Md2PdfError::HtmlMissing`] rather than a navigation
/// failure.
pub fn print_html_file(html_path: &Path, setup: &PageSetup) -> Result<Vec<u8>, Md2PdfError> {
    let url = file_url(html_path)?;

    let browser = install::launch_browser()?;
    let tab = browser.new_tab().map_err(|e| Md2PdfError::BrowserLaunch {
        detail: format!("{e:#}"),
    })?;

    debug!("Navigating to {url}");
    tab.navigate_to(url.as_str())
        .and_then(|tab| tab.wait_until_navigated())
        .map_err(|e| Md2PdfError::Navigation {
            url: url.to_string(),
            detail: format!("{e:#}"),
        })?;

    let pdf = tab
        .print_to_pdf(Some(print_options(setup)))
        .map_err(|e| Md2PdfError::PrintFailed {
            detail: format!("{e:#}"),
        })?;

    info!("Printed {} bytes of PDF", pdf.len());
    Ok(pdf)
}

/// Build a file:// URL for a local HTML file.
///
/// The path is canonicalized first because URL construction requires an
/// absolute path and the artifact paths are relative.
fn file_url(html_path: &Path) -> Result<Url, Md2PdfError> {
    let absolute = html_path
        .canonicalize()
        .map_err(|e| Md2PdfError::FileUrl {
            path: html_path.to_path_buf(),
            detail: e.to_string(),
        })?;
    Url::from_file_path(&absolute).map_err(|_| Md2PdfError::FileUrl {
        path: absolute.clone(),
        detail: "path cannot be represented as a file:// URL".into(),
    })
}

/// Map the page setup onto the browser's print options.
///
/// All dimensions are in inches on both sides of the mapping; the uniform
/// margin fans out to the four per-side fields.
fn print_options(setup: &PageSetup) -> PrintToPdfOptions {
    PrintToPdfOptions {
        print_background: Some(setup.print_background),
        paper_width: Some(setup.paper_width_in),
        paper_height: Some(setup.paper_height_in),
        margin_top: Some(setup.margin_in),
        margin_bottom: Some(setup.margin_in),
        margin_left: Some(setup.margin_in),
        margin_right: Some(setup.margin_in),
        ..Default::default()
    }
}
