//! Competitor website analysis
//!
//! Crawl a competitor's homepage, ask a language model which linked pages
//! matter for competitive research, fetch and index the relevant pages, and
//! answer free-form questions against the indexed content.
//!
//! # Pipeline
//!
//! An analysis run drives the stages in sequence, short-circuiting to the
//! cache when the site was analyzed before:
//!
//! 1. [`discovery`] - collect same-site links from the homepage
//! 2. [`classifier`] - ask the model which titles are relevant
//! 3. [`content`] - fetch and strip the relevant pages
//! 4. [`cache`] - persist the fetched content per site
//! 5. [`index`] - chunk, embed, and index the content
//! 6. [`answer`] - retrieve the top chunks and synthesize an answer
//!
//! [`service::AnalysisService`] wires the stages together. Every remote
//! collaborator (page fetches, chat completions, embeddings) sits behind a
//! trait so tests can substitute the mocks in [`testing`].

pub mod ai;
pub mod answer;
pub mod cache;
pub mod chunker;
pub mod classifier;
pub mod content;
pub mod discovery;
pub mod error;
pub mod fetch;
pub mod index;
pub mod registry;
pub mod service;
pub mod testing;
pub mod types;

pub use ai::{ChatModel, ChatOptions, CompletionModel, Embedder, OpenAiModels};
pub use answer::{answer_question, ANSWER_FALLBACK};
pub use cache::ResultCache;
pub use classifier::ClassifierVerdict;
pub use error::{AnalysisError, FetchError, ModelError};
pub use fetch::{HttpPageFetcher, PageFetcher};
pub use index::{Chunk, SiteIndex};
pub use registry::IndexRegistry;
pub use service::AnalysisService;
pub use types::{AnalysisReport, FetchedContent, PageLink, SiteId};
