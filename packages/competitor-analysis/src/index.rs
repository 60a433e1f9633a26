//! Embedding index over content chunks.

use tracing::info;

use crate::ai::Embedder;
use crate::chunker::{split_text, CHUNK_OVERLAP, CHUNK_SIZE};
use crate::error::AnalysisError;
use crate::types::FetchedContent;

/// A bounded slice of page text, tagged with its source URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chunk {
    pub text: String,
    pub source: String,
}

struct IndexEntry {
    embedding: Vec<f32>,
    chunk: Chunk,
}

/// Similarity-searchable index over one site's chunks.
///
/// Owned exclusively by the registry entry for its site and replaced
/// wholesale when the site is re-analyzed.
pub struct SiteIndex {
    entries: Vec<IndexEntry>,
}

impl SiteIndex {
    /// Chunk and embed a content map into a searchable index.
    ///
    /// Chunks are embedded one call at a time, in page order. Any embedding
    /// failure aborts the build; no partial index is returned.
    pub async fn build(
        content: &FetchedContent,
        embedder: &dyn Embedder,
    ) -> Result<Self, AnalysisError> {
        let mut entries = Vec::new();

        for (url, text) in content {
            for chunk_text in split_text(text, CHUNK_SIZE, CHUNK_OVERLAP) {
                let embedding = embedder.embed(&chunk_text).await?;
                entries.push(IndexEntry {
                    embedding,
                    chunk: Chunk {
                        text: chunk_text,
                        source: url.clone(),
                    },
                });
            }
        }

        info!(pages = content.len(), chunks = entries.len(), "Built site index");
        Ok(Self { entries })
    }

    /// The `k` chunks nearest to the query embedding, best first.
    pub fn top_k(&self, query: &[f32], k: usize) -> Vec<&Chunk> {
        let mut scored: Vec<(f32, &Chunk)> = self
            .entries
            .iter()
            .map(|entry| (cosine_similarity(&entry.embedding, query), &entry.chunk))
            .collect();

        scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
        scored.into_iter().take(k).map(|(_, chunk)| chunk).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Cosine similarity between two vectors; 0.0 for mismatched lengths or
/// zero vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a * norm_b)
}
