//! HTML cleanup pre-pass.
//!
//! Text pulled out of rich-text fields arrives with markup, `&nbsp;`s and
//! `<br/>` line ends. Before reflowing, it is flattened to plain text through
//! an [`HtmlToText`] capability so the engine never depends on a particular
//! HTML parser.

use scraper::Html;
use tracing::trace;

use crate::error::Result;

/// Renders HTML markup to its plain-text content (tags stripped, entities
/// decoded). Failures are returned as-is and abort the reflow.
pub trait HtmlToText {
    fn plain_text_of(&self, html: &str) -> Result<String>;
}

impl<F> HtmlToText for F
where
    F: Fn(&str) -> Result<String>,
{
    fn plain_text_of(&self, html: &str) -> Result<String> {
        self(html)
    }
}

/// Default capability backed by html5ever (via `scraper`).
///
/// Concatenates every text node of the parsed fragment verbatim, so line
/// breaks and runs of spaces in the source text survive the conversion.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScraperText;

impl HtmlToText for ScraperText {
    fn plain_text_of(&self, html: &str) -> Result<String> {
        let fragment = Html::parse_fragment(html);
        Ok(fragment.root_element().text().collect())
    }
}

/// Run the cleanup steps in order:
/// 1. `"\n "` → `"\n"`
/// 2. markup → plain text
/// 3. U+00A0 → `' '`
/// 4. literal `"<br/>\n"` → `"\n"`
pub fn clean(raw: &str, html: &dyn HtmlToText) -> Result<String> {
    let collapsed = raw.replace("\n ", "\n");
    let text = html.plain_text_of(&collapsed)?;
    let text = text.replace('\u{a0}', " ").replace("<br/>\n", "\n");
    trace!(before = raw.len(), after = text.len(), "cleaned html");
    Ok(text)
}
