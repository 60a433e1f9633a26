//! Homepage link discovery.

use std::collections::HashSet;

use scraper::{Html, Selector};
use tracing::{debug, warn};
use url::Url;

use crate::fetch::PageFetcher;
use crate::types::{PageLink, NO_TITLE};

/// Crawl the homepage and collect same-site links with their anchor text.
///
/// Best-effort: a failed or non-success fetch yields an empty list, never
/// an error.
pub async fn discover_links(fetcher: &dyn PageFetcher, base_url: &str) -> Vec<PageLink> {
    debug!(base_url = %base_url, "Crawling homepage");

    let html = match fetcher.fetch_page(base_url).await {
        Ok(html) => html,
        Err(e) => {
            warn!(base_url = %base_url, error = %e, "Homepage fetch failed");
            return Vec::new();
        }
    };

    let links = parse_page_links(&html, base_url);
    debug!(base_url = %base_url, links = links.len(), "Homepage crawl complete");
    links
}

/// Extract deduplicated same-site links from homepage HTML.
///
/// Each `href` is resolved against the base URL; the anchor's trimmed text
/// becomes the title, defaulting to [`NO_TITLE`].
pub fn parse_page_links(html: &str, base_url: &str) -> Vec<PageLink> {
    let base = match Url::parse(base_url) {
        Ok(base) => base,
        Err(e) => {
            warn!(base_url = %base_url, error = %e, "Base URL does not parse");
            return Vec::new();
        }
    };

    let selector = match Selector::parse("a[href]") {
        Ok(selector) => selector,
        Err(_) => return Vec::new(),
    };
    let document = Html::parse_document(html);

    let mut seen: HashSet<String> = HashSet::new();
    let mut links = Vec::new();

    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Ok(resolved) = base.join(href) else {
            continue;
        };
        let resolved = resolved.to_string();

        if !is_same_site(&resolved, base_url) {
            continue;
        }
        if !seen.insert(resolved.clone()) {
            continue;
        }

        let title = element.text().collect::<String>().trim().to_string();
        links.push(PageLink {
            url: resolved,
            title: if title.is_empty() {
                NO_TITLE.to_string()
            } else {
                title
            },
        });
    }

    links
}

/// Same-site heuristic: the resolved URL must have a scheme and a host and
/// contain the base URL as a substring. A sibling host that embeds the base
/// URL also passes; this looseness is intentional and documented.
fn is_same_site(candidate: &str, base_url: &str) -> bool {
    let Ok(parsed) = Url::parse(candidate) else {
        return false;
    };
    parsed.has_host() && !parsed.scheme().is_empty() && candidate.contains(base_url)
}
