//! Relevance classification of discovered page titles.

use openai_client::Message;
use tracing::{debug, warn};

use crate::ai::{ChatModel, ChatOptions};

const SYSTEM_PROMPT: &str = "You are an assistant that analyzes a list of page titles and identifies their relevance. \
Our purpose is to find relevant pages of our competitors which might help us understand their pricing, \
sales channels, value propositions.";

/// Result of one classification call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifierVerdict {
    /// The model's raw text listing the relevant titles, in whatever
    /// formatting the model chose
    Relevant(String),

    /// The model call failed; distinct from "no titles are relevant"
    Unavailable,
}

/// Ask the model which titles are relevant to competitive research.
///
/// The response is free-form text; no structured parsing is enforced.
pub async fn classify_titles(chat: &dyn ChatModel, titles: &[String]) -> ClassifierVerdict {
    let messages = vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(format!(
            "Here is a list of page titles: {}. Please check the titles and only return those \
             which might be relevant to us. No text. Just a list of titles without indexing in \
             the same formatting that was given to you.",
            titles.join(", ")
        )),
    ];

    debug!(titles = titles.len(), "Sending titles for relevance analysis");
    match chat.complete(messages, ChatOptions::default()).await {
        Ok(content) => ClassifierVerdict::Relevant(content),
        Err(e) => {
            warn!(error = %e, "Title classification failed");
            ClassifierVerdict::Unavailable
        }
    }
}

/// Relevance test of one title against the classifier's raw output.
///
/// Exact substring match: a title the model reformatted will not match and
/// its page is silently dropped. Kept behind this single function so it can
/// be swapped for structured-output parsing without touching the pipeline.
pub fn title_is_relevant(raw_verdict: &str, title: &str) -> bool {
    raw_verdict.contains(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockChatModel;

    #[tokio::test]
    async fn test_returns_raw_model_text() {
        let chat = MockChatModel::replying("About Us, Pricing");
        let verdict = classify_titles(&chat, &["About Us".into(), "Careers".into()]).await;
        assert_eq!(verdict, ClassifierVerdict::Relevant("About Us, Pricing".into()));
    }

    #[tokio::test]
    async fn test_call_failure_is_unavailable() {
        let chat = MockChatModel::failing();
        let verdict = classify_titles(&chat, &["About Us".into()]).await;
        assert_eq!(verdict, ClassifierVerdict::Unavailable);
    }

    #[test]
    fn test_title_matching_is_exact_substring() {
        assert!(title_is_relevant("About Us, Pricing", "Pricing"));
        assert!(title_is_relevant("- About Us\n- Pricing", "About Us"));
        // Reformatted titles do not match; acknowledged precision loss.
        assert!(!title_is_relevant("about us, pricing", "About Us"));
    }
}
