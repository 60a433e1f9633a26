//! Model seams and their OpenAI-backed implementation.
//!
//! The pipeline talks to remote models only through these traits, so tests
//! can substitute the mocks in [`crate::testing`].

use async_trait::async_trait;

use openai_client::{ChatRequest, CompletionRequest, Message, OpenAIClient};

use crate::error::ModelError;

/// Sampling options for one chat call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChatOptions {
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Chat-completion seam used by the classifier and the answerer.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// One chat-completion round trip; returns the model's text.
    async fn complete(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> Result<String, ModelError>;
}

/// Legacy text-completion seam used by the outreach-note generator.
#[async_trait]
pub trait CompletionModel: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ModelError>;
}

/// Embedding seam used by the indexer and the retriever.
///
/// Implementations must return vectors of a fixed length so similarity
/// comparison is well-defined.
#[async_trait]
pub trait Embedder: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ModelError>;
}

/// OpenAI-backed implementation of all three model seams.
#[derive(Clone)]
pub struct OpenAiModels {
    client: OpenAIClient,
    chat_model: String,
    completion_model: String,
    embedding_model: String,
}

impl OpenAiModels {
    /// Create with default model names.
    pub fn new(client: OpenAIClient) -> Self {
        Self {
            client,
            chat_model: "gpt-4o".to_string(),
            completion_model: "gpt-3.5-turbo-instruct".to_string(),
            embedding_model: "text-embedding-3-small".to_string(),
        }
    }

    /// Set the chat model (default: gpt-4o).
    pub fn with_chat_model(mut self, model: impl Into<String>) -> Self {
        self.chat_model = model.into();
        self
    }

    /// Set the instruct model for text completions (default:
    /// gpt-3.5-turbo-instruct).
    pub fn with_completion_model(mut self, model: impl Into<String>) -> Self {
        self.completion_model = model.into();
        self
    }

    /// Set the embedding model (default: text-embedding-3-small).
    pub fn with_embedding_model(mut self, model: impl Into<String>) -> Self {
        self.embedding_model = model.into();
        self
    }
}

#[async_trait]
impl ChatModel for OpenAiModels {
    async fn complete(
        &self,
        messages: Vec<Message>,
        options: ChatOptions,
    ) -> Result<String, ModelError> {
        let mut request = ChatRequest::new(&self.chat_model).messages(messages);
        if let Some(max_tokens) = options.max_tokens {
            request = request.max_tokens(max_tokens);
        }
        if let Some(temperature) = options.temperature {
            request = request.temperature(temperature);
        }

        let response = self.client.chat_completion(request).await?;
        Ok(response.content.trim().to_string())
    }
}

#[async_trait]
impl CompletionModel for OpenAiModels {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, ModelError> {
        let request = CompletionRequest::new(&self.completion_model, prompt)
            .max_tokens(max_tokens)
            .temperature(temperature);

        let text = self.client.completion(request).await?;
        Ok(text.trim().to_string())
    }
}

#[async_trait]
impl Embedder for OpenAiModels {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ModelError> {
        Ok(self
            .client
            .create_embedding(text, &self.embedding_model)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_overrides() {
        let models = OpenAiModels::new(OpenAIClient::new("sk-test"))
            .with_chat_model("gpt-4o-mini")
            .with_completion_model("davinci-002")
            .with_embedding_model("text-embedding-3-large");

        assert_eq!(models.chat_model, "gpt-4o-mini");
        assert_eq!(models.completion_model, "davinci-002");
        assert_eq!(models.embedding_model, "text-embedding-3-large");
    }

    #[tokio::test]
    #[ignore] // Requires API key
    async fn test_embed_live() {
        let models = OpenAiModels::new(OpenAIClient::from_env().unwrap());
        let embedding = models.embed("pricing page").await.unwrap();
        assert_eq!(embedding.len(), 1536);
    }
}
