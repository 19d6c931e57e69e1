//! Print styling for the generated HTML document.
//!
//! Centralising the stylesheet and title here serves two purposes:
//!
//! 1. **Single source of truth** — tweaking the print layout (margins,
//!    shading, break rules) means editing exactly one place; the document
//!    shell in [`crate::pipeline::document`] embeds these constants verbatim.
//!
//! 2. **Testability** — unit tests can import and inspect individual rules
//!    (the `@page` size, the zebra-stripe selector) without rendering
//!    anything in a browser.
//!
//! The stylesheet is print-first: US Letter page geometry, avoid-break rules
//! after headings and inside tables and code blocks, widow/orphan control,
//! and repeated table header groups across page breaks. Screen rendering is
//! a readable side effect, not the target.

/// Title placed in the document `<head>`.
pub const DOCUMENT_TITLE: &str = "Project Summary";

/// The complete stylesheet embedded in every generated document.
///
/// Kept self-contained (no external fonts, no imports) so the printer's
/// browser load never touches the network.
pub const PRINT_STYLESHEET: &str = r#"@page {
    size: letter;
    margin: 0.75in;
}

@media print {
    body {
        margin: 0;
        padding: 0;
    }
    .page-break {
        page-break-before: always;
    }
}

* {
    box-sizing: border-box;
}

body {
    font-family: 'Times New Roman', 'Times', serif;
    font-size: 11pt;
    line-height: 1.6;
    color: #000;
    max-width: 100%;
    margin: 0;
    padding: 20px;
}

h1 {
    font-size: 18pt;
    font-weight: bold;
    margin-top: 0.5em;
    margin-bottom: 0.5em;
    page-break-after: avoid;
    border-bottom: 2px solid #000;
    padding-bottom: 0.3em;
}

h2 {
    font-size: 14pt;
    font-weight: bold;
    margin-top: 1.2em;
    margin-bottom: 0.6em;
    page-break-after: avoid;
    border-bottom: 1px solid #666;
    padding-bottom: 0.2em;
}

h3 {
    font-size: 12pt;
    font-weight: bold;
    margin-top: 1em;
    margin-bottom: 0.5em;
    page-break-after: avoid;
}

p {
    margin-bottom: 0.8em;
    text-align: justify;
    orphans: 3;
    widows: 3;
}

table {
    border-collapse: collapse;
    width: 100%;
    margin: 1em 0;
    font-size: 10pt;
    page-break-inside: avoid;
}

th, td {
    border: 1px solid #333;
    padding: 8px;
    text-align: left;
}

th {
    background-color: #f0f0f0;
    font-weight: bold;
}

tr:nth-child(even) {
    background-color: #f9f9f9;
}

code {
    background-color: #f4f4f4;
    padding: 2px 5px;
    font-family: 'Courier New', 'Courier', monospace;
    font-size: 10pt;
    border: 1px solid #ddd;
    border-radius: 3px;
}

pre {
    background-color: #f4f4f4;
    padding: 12px;
    overflow-x: auto;
    font-size: 9pt;
    border: 1px solid #ddd;
    border-radius: 4px;
    page-break-inside: avoid;
}

pre code {
    background-color: transparent;
    padding: 0;
    border: none;
}

ul, ol {
    margin-bottom: 0.8em;
    padding-left: 2em;
}

li {
    margin-bottom: 0.4em;
}

strong {
    font-weight: bold;
}

em {
    font-style: italic;
}

hr {
    border: none;
    border-top: 1px solid #666;
    margin: 1.5em 0;
}

a {
    color: #0000EE;
    text-decoration: underline;
}

a:visited {
    color: #551A8B;
}

/* Repeat header rows when a table spans pages */
table thead {
    display: table-header-group;
}

table tfoot {
    display: table-footer-group;
}"#;
