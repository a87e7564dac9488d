//! Completions API schemas (legacy text completion)
//!
//! These schemas match the OpenAI Completions API specification.
//! See: https://platform.openai.com/docs/api-reference/completions

use bon::Builder;
use serde::{Deserialize, Serialize};

use super::chat::{StopSequence, Usage};

/// Request body for POST /v1/completions
#[derive(Debug, Clone, Serialize, Deserialize, Builder)]
pub struct CompletionRequest {
    /// The model to use for completion
    #[builder(into)]
    pub model: String,

    /// The prompt to complete
    #[builder(into)]
    pub prompt: String,

    /// Sampling temperature (0-2)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Number of completions to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub n: Option<u32>,

    /// Stop sequences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<StopSequence>,

    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// User identifier for abuse tracking
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
}

/// Response from POST /v1/completions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub object: String,
    pub created: u64,
    pub model: String,
    pub choices: Vec<CompletionChoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
}

impl CompletionResponse {
    /// Text of the first choice, if the server returned any.
    pub fn first_text(&self) -> Option<&str> {
        self.choices.first().map(|c| c.text.as_str())
    }
}

/// A completion choice
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionChoice {
    pub text: String,
    pub index: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_minimal_request() {
        let request = CompletionRequest::builder()
            .model("ai/smollm2")
            .prompt("Once upon a time")
            .build();

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "ai/smollm2");
        assert_eq!(json["prompt"], "Once upon a time");
        assert!(json.get("temperature").is_none());
    }

    #[test]
    fn test_deserialize_response() {
        let json = r#"{
            "id": "cmpl-abc",
            "object": "text_completion",
            "created": 1234567890,
            "model": "ai/smollm2",
            "choices": [{"text": " there was a whale.", "index": 0, "finish_reason": "stop"}]
        }"#;

        let response: CompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.object, "text_completion");
        assert_eq!(response.first_text(), Some(" there was a whale."));
    }
}
