//! Markdown → HTML fragment conversion.
//!
//! Three behaviors beyond plain CommonMark are required by the report
//! format: pipe tables, fenced code blocks, and treating a single newline
//! inside a paragraph as a hard line break. Tables are an engine option,
//! fenced code is core CommonMark, and the line-break behavior is a mapping
//! over the parser's event stream rather than a parser flag.

use pulldown_cmark::{html, Event, Options, Parser};
use tracing::debug;

/// Convert Markdown text to an HTML fragment.
///
/// The fragment carries no document shell; [`crate::pipeline::document`]
/// wraps it. Malformed Markdown is not rejected, it degrades per the
/// engine's own parsing rules.
pub fn to_html_fragment(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);

    // Single newlines inside a paragraph become <br> line breaks.
    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::SoftBreak => Event::HardBreak,
        other => other,
    });

    let mut fragment = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut fragment, events);

    debug!(
        "Converted {} bytes of Markdown to {} bytes of HTML",
        markdown.len(),
        fragment.len()
    );
    fragment
}
