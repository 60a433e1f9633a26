//! End-to-end analysis service: pipeline, index registry, and chat.

use std::sync::Arc;

use tracing::info;

use crate::ai::{ChatModel, Embedder};
use crate::answer::answer_question;
use crate::cache::ResultCache;
use crate::classifier::{classify_titles, ClassifierVerdict};
use crate::content::fetch_relevant_pages;
use crate::discovery::discover_links;
use crate::error::AnalysisError;
use crate::fetch::PageFetcher;
use crate::index::SiteIndex;
use crate::registry::IndexRegistry;
use crate::types::{AnalysisReport, SiteId};

/// Analysis service wiring the pipeline stages to their collaborators.
///
/// All collaborators are injected so tests can substitute the mocks in
/// [`crate::testing`]. Stages run sequentially within one request; the
/// registry and cache are the only cross-request state.
pub struct AnalysisService {
    fetcher: Arc<dyn PageFetcher>,
    chat: Arc<dyn ChatModel>,
    embedder: Arc<dyn Embedder>,
    cache: ResultCache,
    registry: Arc<IndexRegistry>,
}

impl AnalysisService {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        chat: Arc<dyn ChatModel>,
        embedder: Arc<dyn Embedder>,
        cache: ResultCache,
        registry: Arc<IndexRegistry>,
    ) -> Self {
        Self {
            fetcher,
            chat,
            embedder,
            cache,
            registry,
        }
    }

    pub fn registry(&self) -> &IndexRegistry {
        &self.registry
    }

    /// Run the full analysis pipeline for a site and hold its index.
    ///
    /// A cached entry short-circuits discovery, classification, and
    /// fetching; indexing runs on every call so chat always sees an index
    /// for the analyzed site. When the classifier is unavailable no index
    /// is registered.
    pub async fn analyze(&self, base_url: &str) -> Result<AnalysisReport, AnalysisError> {
        let site = SiteId::from_url(base_url)
            .ok_or_else(|| AnalysisError::InvalidBaseUrl(base_url.to_string()))?;

        let report = self.gather_content(base_url, &site).await?;

        if let Some(content) = report.content() {
            let index = SiteIndex::build(content, &*self.embedder).await?;
            self.registry.insert(site, index);
        }

        Ok(report)
    }

    /// Stages 1-4: cache lookup, else crawl, classify, fetch, save.
    async fn gather_content(
        &self,
        base_url: &str,
        site: &SiteId,
    ) -> Result<AnalysisReport, AnalysisError> {
        if let Some(cached) = self.cache.load(site)? {
            info!(site = %site, "Using cached analysis");
            return Ok(AnalysisReport::Cached(cached));
        }

        info!(site = %site, "No cache entry; running crawl pipeline");
        let links = discover_links(&*self.fetcher, base_url).await;
        let titles: Vec<String> = links.iter().map(|link| link.title.clone()).collect();

        let raw_verdict = match classify_titles(&*self.chat, &titles).await {
            ClassifierVerdict::Relevant(raw) => raw,
            ClassifierVerdict::Unavailable => {
                return Ok(AnalysisReport::ClassifierUnavailable);
            }
        };

        let content = fetch_relevant_pages(&*self.fetcher, &raw_verdict, &links).await;
        self.cache.save(site, &content)?;

        Ok(AnalysisReport::Fresh(content))
    }

    /// Answer a question against a previously analyzed site.
    ///
    /// Returns `None` when the site has no registered index; the answer
    /// itself never errors.
    pub async fn chat(&self, site: &SiteId, query: &str) -> Option<String> {
        let index = self.registry.get(site)?;
        Some(answer_question(&index, &*self.chat, &*self.embedder, query).await)
    }
}
