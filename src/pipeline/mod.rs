//! Pipeline stages for the Markdown-to-PDF workflow.
//!
//! Each submodule implements exactly one transformation step.
//! Keeping stages separate makes each independently testable and lets us
//! swap implementations (e.g. a different Markdown engine) without touching
//! other stages.
//!
//! ## Data Flow
//!
//! ```text
//! markdown ──▶ document ──▶ browser
//! (fragment)   (HTML shell)  (print-to-PDF)
//! ```
//!
//! 1. [`markdown`] — convert Markdown text to an HTML fragment with tables,
//!    fenced code blocks, and hard line breaks
//! 2. [`document`] — embed the fragment in a self-contained document shell
//!    with the print stylesheet inlined
//! 3. [`browser`]  — load a written HTML file in a headless browser and
//!    print it to PDF bytes; the only stage with a subprocess
//!
//! The first two stages serve the renderer, the third serves the printer;
//! the two halves meet only at the HTML file on disk.

pub mod browser;
pub mod document;
pub mod markdown;
