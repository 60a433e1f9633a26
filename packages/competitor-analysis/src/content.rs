//! Fetching and text extraction for relevant pages.

use scraper::{Html, Selector};
use tracing::{debug, warn};

use crate::classifier::title_is_relevant;
use crate::fetch::PageFetcher;
use crate::types::{FetchedContent, PageLink};

/// Fetch every link whose title the classifier judged relevant.
///
/// Pages are fetched one at a time; an individual failure skips that page
/// and never aborts the batch. No partial-page content is emitted.
pub async fn fetch_relevant_pages(
    fetcher: &dyn PageFetcher,
    raw_verdict: &str,
    links: &[PageLink],
) -> FetchedContent {
    let mut content = FetchedContent::new();

    for link in links
        .iter()
        .filter(|link| title_is_relevant(raw_verdict, &link.title))
    {
        debug!(url = %link.url, "Fetching relevant page");
        match fetcher.fetch_page(&link.url).await {
            Ok(html) => {
                content.insert(link.url.clone(), extract_visible_text(&html));
            }
            Err(e) => warn!(url = %link.url, error = %e, "Skipping page"),
        }
    }

    content
}

/// Strip tags and collapse whitespace to single spaces.
///
/// `script`, `style`, and `noscript` content never renders and is excluded.
pub fn extract_visible_text(html: &str) -> String {
    let document = Html::parse_document(&strip_hidden_elements(html));
    document
        .root_element()
        .text()
        .flat_map(str::split_whitespace)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Remove elements whose text is never rendered.
fn strip_hidden_elements(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut result = html.to_string();

    for selector_str in ["script", "style", "noscript"] {
        if let Ok(selector) = Selector::parse(selector_str) {
            for element in document.select(&selector) {
                result = result.replace(&element.html(), "");
            }
        }
    }

    result
}
