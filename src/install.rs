//! Browser provisioning: locate, launch, and the one-shot managed download.
//!
//! ## Resolution order
//!
//! 1. A system Chrome/Chromium discovered by the automation layer's standard
//!    search (the `CHROME` environment variable, `PATH`, platform install
//!    locations). Found executables are passed to the launch explicitly.
//! 2. A Chromium copy previously downloaded by [`install_browser`] into the
//!    automation layer's managed cache (no network touched at this point).
//!
//! [`install_browser`] backs the printer's fallback path: it downloads the
//! automation layer's pinned known-good Chromium revision into the managed
//! cache and verifies it launches, so the next run finds it via step 2.

use crate::error::Md2PdfError;
use headless_chrome::browser::default_executable;
use headless_chrome::browser::FetcherOptions;
use headless_chrome::{Browser, LaunchOptions};
use tracing::{debug, info};

/// Launch a headless browser, preferring a system install over the cache.
pub(crate) fn launch_browser() -> Result<Browser, Md2PdfError> {
    match default_executable() {
        Ok(path) => {
            debug!("Using system browser: {}", path.display());
            let options = LaunchOptions::default_builder()
                .path(Some(path))
                .build()
                .map_err(|e| Md2PdfError::BrowserLaunch {
                    detail: e.to_string(),
                })?;
            Browser::new(options).map_err(|e| Md2PdfError::BrowserLaunch {
                detail: format!("{e:#}"),
            })
        }
        Err(system_err) => {
            debug!("No system browser found: {system_err}");
            // A copy fetched by an earlier install run, if any. Download is
            // explicitly disabled here; only install_browser touches the
            // network.
            let options = LaunchOptions::default_builder()
                .fetcher_options(cache_only_fetcher())
                .build()
                .map_err(|e| Md2PdfError::BrowserLaunch {
                    detail: e.to_string(),
                })?;
            Browser::new(options).map_err(|e| Md2PdfError::BrowserNotFound {
                detail: format!("{system_err}; no downloaded copy either: {e:#}"),
            })
        }
    }
}

/// Download a managed Chromium build and verify it launches.
///
/// This is the single remedial action behind the printer's fallback: it runs
/// at most once per invocation and never retries. The download lands in the
/// automation layer's cache directory, where [`launch_browser`] finds it on
/// the next run. The verification launch is torn down before returning.
pub fn install_browser() -> Result<(), Md2PdfError> {
    info!("Downloading a managed Chromium build");
    let options = LaunchOptions::default_builder()
        .fetcher_options(download_fetcher())
        .build()
        .map_err(|e| Md2PdfError::BrowserInstall {
            detail: e.to_string(),
        })?;
    let browser = Browser::new(options).map_err(|e| Md2PdfError::BrowserInstall {
        detail: format!("{e:#}"),
    })?;
    info!("Browser downloaded and verified");
    drop(browser);
    Ok(())
}

/// Fetcher configuration for ordinary launches: reuse a copy already in the
/// managed cache, never download.
fn cache_only_fetcher() -> FetcherOptions {
    FetcherOptions::default().with_allow_download(false)
}

/// Fetcher configuration for [`install_browser`], the one path allowed to
/// download.
fn download_fetcher() -> FetcherOptions {
    FetcherOptions::default().with_allow_download(true)
}
