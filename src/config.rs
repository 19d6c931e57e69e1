//! Page setup and the fixed artifact paths.
//!
//! The pipeline has exactly one tunable surface: the physical page the PDF is
//! printed on. [`PageSetup`] carries it, built via [`PageSetupBuilder`], with
//! defaults matching the report contract (US Letter, 0.75 inch margins,
//! background graphics on). The binaries always use the default; the type
//! exists so the mapping to the browser's print options is a plain value that
//! tests can construct and inspect.
//!
//! # Design choice: builder over constructor
//! Four positional floats in a constructor invite transposed width/height or
//! margin arguments. The builder names every dimension and validates the
//! combination once in `build()`.

use crate::error::Md2PdfError;

// ── Artifact paths ───────────────────────────────────────────────────────

/// Fixed relative path of the Markdown source read by the renderer.
pub const MARKDOWN_PATH: &str = "Project_Summary.md";

/// Fixed relative path of the HTML document written by the renderer and
/// consumed by the printer.
pub const HTML_PATH: &str = "Project_Summary.html";

/// Fixed relative path of the PDF written by the printer.
pub const PDF_PATH: &str = "Project_Summary.pdf";

// ── Page constants ───────────────────────────────────────────────────────

/// US Letter paper width in inches.
pub const LETTER_WIDTH_IN: f64 = 8.5;

/// US Letter paper height in inches.
pub const LETTER_HEIGHT_IN: f64 = 11.0;

/// Default uniform margin in inches, applied to all four sides.
pub const DEFAULT_MARGIN_IN: f64 = 0.75;

/// Physical page setup for print-to-PDF.
///
/// Built via [`PageSetup::builder()`] or [`PageSetup::default()`].
///
/// # Example
/// ```rust
/// use md2pdf::PageSetup;
///
/// let setup = PageSetup::builder()
///     .paper_width_in(8.27)  // A4
///     .paper_height_in(11.69)
///     .margin_in(0.5)
///     .build()
///     .unwrap();
/// assert!(setup.print_background);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PageSetup {
    /// Paper width in inches. Default: 8.5 (US Letter).
    pub paper_width_in: f64,

    /// Paper height in inches. Default: 11.0 (US Letter).
    pub paper_height_in: f64,

    /// Uniform margin in inches applied to all four sides. Default: 0.75.
    ///
    /// The browser's print call takes four independent margins; a single
    /// field mirrors the page contract (same margin everywhere) and is fanned
    /// out at the call site.
    pub margin_in: f64,

    /// Print background colors and graphics. Default: true.
    ///
    /// Without this the shaded table headers, zebra rows, and code-block
    /// shading in the embedded stylesheet are dropped by the print engine.
    pub print_background: bool,
}

impl Default for PageSetup {
    fn default() -> Self {
        Self {
            paper_width_in: LETTER_WIDTH_IN,
            paper_height_in: LETTER_HEIGHT_IN,
            margin_in: DEFAULT_MARGIN_IN,
            print_background: true,
        }
    }
}

impl PageSetup {
    /// Create a new builder for `PageSetup`.
    pub fn builder() -> PageSetupBuilder {
        PageSetupBuilder {
            setup: Self::default(),
        }
    }
}

/// Builder for [`PageSetup`].
#[derive(Debug)]
pub struct PageSetupBuilder {
    setup: PageSetup,
}

impl PageSetupBuilder {
    pub fn paper_width_in(mut self, inches: f64) -> Self {
        self.setup.paper_width_in = inches;
        self
    }

    pub fn paper_height_in(mut self, inches: f64) -> Self {
        self.setup.paper_height_in = inches;
        self
    }

    pub fn margin_in(mut self, inches: f64) -> Self {
        self.setup.margin_in = inches;
        self
    }

    pub fn print_background(mut self, v: bool) -> Self {
        self.setup.print_background = v;
        self
    }

    /// Build the page setup, validating constraints.
    ///
    /// The paper must have positive finite dimensions, the margin must be
    /// finite and non-negative, and the margins must leave printable area on
    /// both axes.
    pub fn build(self) -> Result<PageSetup, Md2PdfError> {
        let s = &self.setup;
        if !(s.paper_width_in.is_finite() && s.paper_width_in > 0.0) {
            return Err(Md2PdfError::InvalidPageSetup(format!(
                "paper width must be a positive number of inches, got {}",
                s.paper_width_in
            )));
        }
        if !(s.paper_height_in.is_finite() && s.paper_height_in > 0.0) {
            return Err(Md2PdfError::InvalidPageSetup(format!(
                "paper height must be a positive number of inches, got {}",
                s.paper_height_in
            )));
        }
        if !(s.margin_in.is_finite() && s.margin_in >= 0.0) {
            return Err(Md2PdfError::InvalidPageSetup(format!(
                "margin must be a non-negative number of inches, got {}",
                s.margin_in
            )));
        }
        let min_side = s.paper_width_in.min(s.paper_height_in);
        if s.margin_in * 2.0 >= min_side {
            return Err(Md2PdfError::InvalidPageSetup(format!(
                "margin of {}in leaves no printable area on {}×{}in paper",
                s.margin_in, s.paper_width_in, s.paper_height_in
            )));
        }
        Ok(self.setup)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_letter_with_contract_margins() {
        let s = PageSetup::default();
        assert_eq!(s.paper_width_in, 8.5);
        assert_eq!(s.paper_height_in, 11.0);
        assert_eq!(s.margin_in, 0.75);
        assert!(s.print_background);
    }

    #[test]
    fn builder_accepts_a4() {
        let s = PageSetup::builder()
            .paper_width_in(8.27)
            .paper_height_in(11.69)
            .build()
            .unwrap();
        assert_eq!(s.paper_width_in, 8.27);
        assert_eq!(s.margin_in, DEFAULT_MARGIN_IN);
    }

    #[test]
    fn margin_consuming_the_page_is_rejected() {
        let err = PageSetup::builder().margin_in(4.5).build().unwrap_err();
        assert!(matches!(err, Md2PdfError::InvalidPageSetup(_)));
        assert!(err.to_string().contains("printable area"));
    }

    #[test]
    fn negative_width_is_rejected() {
        let err = PageSetup::builder().paper_width_in(-1.0).build().unwrap_err();
        assert!(matches!(err, Md2PdfError::InvalidPageSetup(_)));
    }

    #[test]
    fn zero_margin_is_allowed() {
        let s = PageSetup::builder().margin_in(0.0).build().unwrap();
        assert_eq!(s.margin_in, 0.0);
    }

    #[test]
    fn artifact_paths_share_the_report_stem() {
        assert_eq!(MARKDOWN_PATH, "Project_Summary.md");
        assert_eq!(HTML_PATH, "Project_Summary.html");
        assert_eq!(PDF_PATH, "Project_Summary.pdf");
    }
}
