//! Pipeline-level tests of the analysis service with mock collaborators.

use std::sync::Arc;

use competitor_analysis::testing::{MockChatModel, MockEmbedder, MockPageFetcher};
use competitor_analysis::{
    AnalysisError, AnalysisReport, AnalysisService, FetchedContent, IndexRegistry, ResultCache,
    SiteId, ANSWER_FALLBACK,
};

const BASE: &str = "https://mocksite.com";

const HOMEPAGE: &str = r#"<html><body>
    <a href="/about-us">About Us</a>
    <a href="/pricing">Pricing</a>
    <a href="/careers">Careers</a>
</body></html>"#;

struct Harness {
    fetcher: Arc<MockPageFetcher>,
    chat: Arc<MockChatModel>,
    embedder: Arc<MockEmbedder>,
    service: AnalysisService,
    _tmp: tempfile::TempDir,
}

fn harness(fetcher: MockPageFetcher, chat: MockChatModel, embedder: MockEmbedder) -> Harness {
    let tmp = tempfile::tempdir().unwrap();
    let fetcher = Arc::new(fetcher);
    let chat = Arc::new(chat);
    let embedder = Arc::new(embedder);

    let service = AnalysisService::new(
        fetcher.clone(),
        chat.clone(),
        embedder.clone(),
        ResultCache::new(tmp.path()),
        Arc::new(IndexRegistry::new()),
    );

    Harness {
        fetcher,
        chat,
        embedder,
        service,
        _tmp: tmp,
    }
}

fn mock_site_fetcher() -> MockPageFetcher {
    MockPageFetcher::new()
        .with_page(BASE, HOMEPAGE)
        .with_page("https://mocksite.com/about-us", "<p>About us content</p>")
        .with_page("https://mocksite.com/pricing", "<p>Pricing content</p>")
        .with_page("https://mocksite.com/careers", "<p>Careers content</p>")
}

fn site() -> SiteId {
    SiteId::from_url(BASE).unwrap()
}

#[tokio::test]
async fn analyze_collects_relevant_pages_end_to_end() {
    let h = harness(
        mock_site_fetcher(),
        MockChatModel::replying("About Us, Pricing"),
        MockEmbedder::new(),
    );

    let report = h.service.analyze(BASE).await.unwrap();

    let content = report.into_content();
    assert_eq!(content.len(), 2);
    assert_eq!(
        content.get("https://mocksite.com/about-us").map(String::as_str),
        Some("About us content")
    );
    assert_eq!(
        content.get("https://mocksite.com/pricing").map(String::as_str),
        Some("Pricing content")
    );

    // Careers was not judged relevant, so its page was never requested.
    assert!(!h
        .fetcher
        .requested()
        .contains(&"https://mocksite.com/careers".to_string()));

    // The index is registered for chat.
    assert!(h.service.registry().get(&site()).is_some());
}

#[tokio::test]
async fn analyze_short_circuits_to_cache() {
    let tmp = tempfile::tempdir().unwrap();
    let mut cached = FetchedContent::new();
    cached.insert("https://mocksite.com/pricing".into(), "Pricing content".into());
    ResultCache::new(tmp.path()).save(&site(), &cached).unwrap();

    let fetcher = Arc::new(mock_site_fetcher());
    let chat = Arc::new(MockChatModel::replying("unused"));
    let service = AnalysisService::new(
        fetcher.clone(),
        chat.clone(),
        Arc::new(MockEmbedder::new()),
        ResultCache::new(tmp.path()),
        Arc::new(IndexRegistry::new()),
    );

    let report = service.analyze(BASE).await.unwrap();

    assert!(report.from_cache());
    assert_eq!(report.into_content(), cached);
    // Discovery, classification, and fetching must not have run.
    assert!(fetcher.requested().is_empty());
    assert_eq!(chat.call_count(), 0);
    // Indexing still ran: chat works against the cached content.
    assert!(service.registry().get(&site()).is_some());
}

#[tokio::test]
async fn classifier_failure_stops_the_pipeline() {
    let h = harness(mock_site_fetcher(), MockChatModel::failing(), MockEmbedder::new());

    let report = h.service.analyze(BASE).await.unwrap();

    assert_eq!(report, AnalysisReport::ClassifierUnavailable);
    // Only the homepage was fetched; no content pages, no embeddings,
    // no registered index.
    assert_eq!(h.fetcher.requested(), vec![BASE.to_string()]);
    assert_eq!(h.embedder.call_count(), 0);
    assert!(h.service.registry().get(&site()).is_none());
}

#[tokio::test]
async fn homepage_failure_yields_empty_fresh_result() {
    // No pages registered at all: the homepage fetch fails, discovery
    // absorbs it, the classifier still runs on an empty title list.
    let h = harness(
        MockPageFetcher::new(),
        MockChatModel::replying(""),
        MockEmbedder::new(),
    );

    let report = h.service.analyze(BASE).await.unwrap();

    assert!(matches!(report, AnalysisReport::Fresh(_)));
    assert!(report.into_content().is_empty());
}

#[tokio::test]
async fn embedding_failure_fails_the_run() {
    let h = harness(
        mock_site_fetcher(),
        MockChatModel::replying("About Us, Pricing"),
        MockEmbedder::failing(),
    );

    let result = h.service.analyze(BASE).await;

    assert!(matches!(result, Err(AnalysisError::Indexing(_))));
    assert!(h.service.registry().get(&site()).is_none());
}

#[tokio::test]
async fn analyze_rejects_hostless_base_url() {
    let h = harness(MockPageFetcher::new(), MockChatModel::replying(""), MockEmbedder::new());

    let result = h.service.analyze("not a url").await;
    assert!(matches!(result, Err(AnalysisError::InvalidBaseUrl(_))));
}

#[tokio::test]
async fn chat_requires_a_prior_analysis() {
    let h = harness(MockPageFetcher::new(), MockChatModel::replying(""), MockEmbedder::new());

    assert!(h.service.chat(&site(), "What is the pricing model?").await.is_none());
    // The answering path was never entered.
    assert_eq!(h.chat.call_count(), 0);
    assert_eq!(h.embedder.call_count(), 0);
}

#[tokio::test]
async fn chat_answers_after_analysis() {
    let h = harness(
        mock_site_fetcher(),
        MockChatModel::replying("Here is the summarized content."),
        MockEmbedder::new(),
    );

    h.service.analyze(BASE).await.unwrap();
    let answer = h.service.chat(&site(), "What is the pricing model?").await;

    assert_eq!(answer.as_deref(), Some("Here is the summarized content."));
    // One classifier call plus one answering call.
    assert_eq!(h.chat.call_count(), 2);
}

#[tokio::test]
async fn chat_model_failure_falls_back_without_erroring() {
    // Seed the cache so analyze never needs the (failing) chat model, then
    // ask a question: the answering path absorbs the failure.
    let tmp = tempfile::tempdir().unwrap();
    let mut cached = FetchedContent::new();
    cached.insert("https://mocksite.com/pricing".into(), "Pricing content".into());
    ResultCache::new(tmp.path()).save(&site(), &cached).unwrap();

    let service = AnalysisService::new(
        Arc::new(MockPageFetcher::new()),
        Arc::new(MockChatModel::failing()),
        Arc::new(MockEmbedder::new()),
        ResultCache::new(tmp.path()),
        Arc::new(IndexRegistry::new()),
    );

    service.analyze(BASE).await.unwrap();
    let answer = service.chat(&site(), "What is the pricing model?").await;

    assert_eq!(answer.as_deref(), Some(ANSWER_FALLBACK));
}

#[tokio::test]
async fn reanalysis_overwrites_the_registered_index() {
    let h = harness(
        mock_site_fetcher(),
        MockChatModel::replying("About Us, Pricing"),
        MockEmbedder::new(),
    );

    h.service.analyze(BASE).await.unwrap();
    let first = h.service.registry().get(&site()).unwrap();

    h.service.analyze(BASE).await.unwrap();
    let second = h.service.registry().get(&site()).unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
}
