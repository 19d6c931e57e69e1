//! Fragment → complete, self-contained HTML document.
//!
//! The shell is fully static: fixed head, fixed title, the print stylesheet
//! inlined from [`crate::style`], and the fragment embedded verbatim. No
//! timestamps, no external resources, no generated identifiers, so the same
//! fragment always produces byte-identical output and the printer's browser
//! load never needs network access.

use crate::style::{DOCUMENT_TITLE, PRINT_STYLESHEET};

/// Embed an HTML fragment in the print-ready document shell.
pub fn wrap_fragment(fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{DOCUMENT_TITLE}</title>
    <style>
{PRINT_STYLESHEET}
    </style>
</head>
<body>
{fragment}</body>
</html>
"#
    )
}
