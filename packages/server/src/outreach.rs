//! Personalized outreach note generation.
//!
//! A single templated prompt call against the instruct completion model;
//! independent of the analysis pipeline.

use serde::Deserialize;

use competitor_analysis::{CompletionModel, ModelError};

/// Maximum tokens in a generated note.
const NOTE_MAX_TOKENS: u32 = 500;

const NOTE_TEMPERATURE: f32 = 0.7;

/// Profile fields for a connection note. All fields are required.
#[derive(Debug, Clone, Deserialize)]
pub struct NoteRequest {
    pub recipient_name: String,
    pub recipient_headline: String,
    pub recipient_about: String,
    pub purpose: String,
    pub sender_name: String,
}

/// Generate a short connection note from profile fields.
///
/// The completion text is returned verbatim (trimmed); failures propagate
/// to the HTTP boundary.
pub async fn generate_note(
    model: &dyn CompletionModel,
    request: &NoteRequest,
) -> Result<String, ModelError> {
    let prompt = format!(
        "Write a LinkedIn connection request message based on the following details:\n\
         - Recipient's Name: {}\n\
         - Recipient's Headline: {}\n\
         - Recipient's About Section: {}\n\
         - Purpose of Connection: {}\n\
         - Sender's Name: {}\n\
         The message should be polite, concise, and professional.",
        request.recipient_name,
        request.recipient_headline,
        request.recipient_about,
        request.purpose,
        request.sender_name,
    );

    model.complete(&prompt, NOTE_MAX_TOKENS, NOTE_TEMPERATURE).await
}
