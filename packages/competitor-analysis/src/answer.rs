//! Retrieval-augmented answering over a site index.

use openai_client::Message;
use tracing::{debug, warn};

use crate::ai::{ChatModel, ChatOptions, Embedder};
use crate::index::SiteIndex;

/// Number of chunks retrieved per question.
const TOP_K: usize = 3;

/// Maximum tokens in the synthesized answer.
const ANSWER_MAX_TOKENS: u32 = 150;

const ANSWER_TEMPERATURE: f32 = 0.7;

/// Returned whenever the answering path fails.
pub const ANSWER_FALLBACK: &str = "Error generating response.";

/// Answer a question from the top-ranked chunks of a site index.
///
/// Never errors: any model failure, including the query-embedding call,
/// yields [`ANSWER_FALLBACK`].
pub async fn answer_question(
    index: &SiteIndex,
    chat: &dyn ChatModel,
    embedder: &dyn Embedder,
    query: &str,
) -> String {
    let query_embedding = match embedder.embed(query).await {
        Ok(embedding) => embedding,
        Err(e) => {
            warn!(error = %e, "Query embedding failed");
            return ANSWER_FALLBACK.to_string();
        }
    };

    let chunks = index.top_k(&query_embedding, TOP_K);
    debug!(retrieved = chunks.len(), "Retrieved context chunks");

    let combined = chunks
        .iter()
        .map(|chunk| chunk.text.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    let prompt = format!(
        "You are a helpful assistant. Summarize the following content in a concise manner \
         that answers the user's question:\nUser's Question: {query}\nContent: {combined}"
    );
    let messages = vec![
        Message::system("You are a helpful assistant."),
        Message::user(prompt),
    ];

    let options = ChatOptions {
        max_tokens: Some(ANSWER_MAX_TOKENS),
        temperature: Some(ANSWER_TEMPERATURE),
    };
    match chat.complete(messages, options).await {
        Ok(answer) => answer,
        Err(e) => {
            warn!(error = %e, "Answer synthesis failed");
            ANSWER_FALLBACK.to_string()
        }
    }
}
