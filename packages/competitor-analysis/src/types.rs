//! Core data types for the analysis pipeline.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use url::Url;

/// Mapping from page URL to extracted plain text, insertion-ordered.
///
/// This is the unit persisted to and loaded from the result cache. An empty
/// map is a valid result meaning "nothing relevant found".
pub type FetchedContent = IndexMap<String, String>;

/// Placeholder title for anchors with no display text.
pub const NO_TITLE: &str = "No Title";

/// A link discovered on the analysis target's homepage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    /// Absolute URL the anchor resolves to
    pub url: String,

    /// Anchor display text, or [`NO_TITLE`] when empty
    pub title: String,
}

impl PageLink {
    pub fn new(url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: title.into(),
        }
    }
}

/// Cache and registry key derived from the analysis target's host name.
///
/// Two URLs on the same host always map to the same identifier, regardless
/// of path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SiteId(String);

impl SiteId {
    /// Derive the identifier from a URL's host.
    ///
    /// Returns `None` when the URL does not parse or has no host.
    pub fn from_url(raw: &str) -> Option<Self> {
        let parsed = Url::parse(raw).ok()?;
        let host = parsed.host_str()?;
        Some(Self(host.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SiteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of one analysis run.
///
/// Explicit result kinds instead of exceptions: callers branch on the
/// outcome rather than inspecting error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisReport {
    /// A cache entry was found; the crawl stages did not run
    Cached(FetchedContent),

    /// A full crawl ran and its result was cached
    Fresh(FetchedContent),

    /// The relevance classifier was unavailable; nothing was fetched or
    /// indexed. Distinct from a successful run that found nothing relevant.
    ClassifierUnavailable,
}

impl AnalysisReport {
    /// Content gathered by the run; `None` when the classifier was
    /// unavailable.
    pub fn content(&self) -> Option<&FetchedContent> {
        match self {
            AnalysisReport::Cached(content) | AnalysisReport::Fresh(content) => Some(content),
            AnalysisReport::ClassifierUnavailable => None,
        }
    }

    /// Consume into the content map; empty when the classifier was
    /// unavailable.
    pub fn into_content(self) -> FetchedContent {
        match self {
            AnalysisReport::Cached(content) | AnalysisReport::Fresh(content) => content,
            AnalysisReport::ClassifierUnavailable => FetchedContent::new(),
        }
    }

    /// Whether the run was served from cache.
    pub fn from_cache(&self) -> bool {
        matches!(self, AnalysisReport::Cached(_))
    }
}
