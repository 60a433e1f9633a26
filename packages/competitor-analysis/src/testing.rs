//! Mock collaborators for tests.
//!
//! Each mock records how often it was called so tests can assert that a
//! stage did or did not run.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use openai_client::Message;

use crate::ai::{ChatModel, ChatOptions, CompletionModel, Embedder};
use crate::error::{FetchError, ModelError};
use crate::fetch::PageFetcher;

/// Serves canned page bodies and records which URLs were requested.
///
/// Unregistered URLs fail with a 404-style error.
#[derive(Default)]
pub struct MockPageFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl MockPageFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a page body for a URL.
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }

    /// URLs requested so far, in order.
    pub fn requested(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for MockPageFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String, FetchError> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

/// Replays a fixed response (or a fixed failure) for every chat call.
pub struct MockChatModel {
    response: Option<String>,
    calls: AtomicUsize,
}

impl MockChatModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    async fn complete(
        &self,
        _messages: Vec<Message>,
        _options: ChatOptions,
    ) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .ok_or_else(|| ModelError("mock chat failure".into()))
    }
}

/// Replays a fixed text completion (or a fixed failure).
pub struct MockCompletionModel {
    response: Option<String>,
    calls: AtomicUsize,
}

impl MockCompletionModel {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionModel for MockCompletionModel {
    async fn complete(
        &self,
        _prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .ok_or_else(|| ModelError("mock completion failure".into()))
    }
}

/// Deterministic embedder with a small fixed dimension.
///
/// Vectors are a byte histogram folded into the dimension, so equal texts
/// embed equally and similar texts score high under cosine similarity.
pub struct MockEmbedder {
    fail: bool,
    dimension: usize,
    calls: AtomicUsize,
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self {
            fail: false,
            dimension: 8,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            dimension: 8,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Embedder for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ModelError("mock embedding failure".into()));
        }

        let mut vector = vec![0.0f32; self.dimension];
        for (i, byte) in text.bytes().enumerate() {
            vector[(i + byte as usize) % self.dimension] += f32::from(byte % 31);
        }
        Ok(vector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_embedder_is_deterministic() {
        let embedder = MockEmbedder::new();
        let a = embedder.embed("pricing page").await.unwrap();
        let b = embedder.embed("pricing page").await.unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 8);
        assert_eq!(embedder.call_count(), 2);
    }

    #[tokio::test]
    async fn test_mock_fetcher_records_requests() {
        let fetcher = MockPageFetcher::new().with_page("https://a.example", "body");
        assert!(fetcher.fetch_page("https://a.example").await.is_ok());
        assert!(fetcher.fetch_page("https://b.example").await.is_err());
        assert_eq!(
            fetcher.requested(),
            vec!["https://a.example", "https://b.example"]
        );
    }
}
