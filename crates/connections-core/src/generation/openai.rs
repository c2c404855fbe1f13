//! Client for an OpenAI-compatible generation API.
//!
//! Uses two endpoints:
//! 1. `POST /chat/completions` in JSON mode for pickup lines
//! 2. `POST /images/generations` with `b64_json` output for illustrations

use super::prompt::{image_prompt, pickup_line_prompt};
use super::{ImageGenerator, PickupLineGenerator};
use crate::config::{GenerationConfig, ServiceConfig};
use crate::error::GenerationKind;
use crate::models::{PickupLine, PuzzleCategory};
use crate::network::{join_url, HttpClient};
use crate::{ConnectionsError, Result};
use async_trait::async_trait;
use base64::Engine;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Debug, Deserialize)]
struct ChatReply {
    #[serde(default)]
    content: Option<String>,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'a str,
    response_format: &'a str,
}

#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    #[serde(default)]
    b64_json: Option<String>,
}

/// Shape the text model is asked to produce.
#[derive(Debug, Deserialize)]
struct PickupLinesDocument {
    #[serde(rename = "pickupLines")]
    pickup_lines: Vec<PickupLine>,
}

/// HTTP client for an OpenAI-compatible API.
pub struct OpenAiClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
    text_model: String,
    image_model: String,
}

impl OpenAiClient {
    /// Create a client from the service configuration.
    pub fn new(http: HttpClient, config: &ServiceConfig) -> Self {
        Self {
            http,
            base_url: config.openai_base_url.trim_end_matches('/').to_string(),
            api_key: config.openai_api_key.clone(),
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
        }
    }

    fn api_key(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConnectionsError::Config {
                message: "OpenAI API key is not configured".to_string(),
            })
    }

    /// Ask the text model for a JSON completion and return its raw text.
    async fn complete_json(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.text_model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        let url = join_url(&self.base_url, "chat/completions");
        let response: ChatResponse = self.http.post_json(&url, self.api_key()?, &request).await?;

        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                ConnectionsError::generation(
                    GenerationKind::PickupLines,
                    "completion returned no message content",
                )
            })
    }
}

#[async_trait]
impl PickupLineGenerator for OpenAiClient {
    async fn generate(&self, category: &PuzzleCategory) -> Result<Vec<PickupLine>> {
        debug!("Generating pickup lines for '{}'", category.category);
        let text = self.complete_json(&pickup_line_prompt(category)).await?;
        let lines = parse_pickup_lines(&text)?;
        info!(
            "Generated {} pickup lines for '{}'",
            lines.len(),
            category.category
        );
        Ok(lines)
    }
}

#[async_trait]
impl ImageGenerator for OpenAiClient {
    async fn generate(&self, title: &str) -> Result<String> {
        debug!("Generating image for '{}'", title);
        let prompt = image_prompt(title);
        let request = ImageRequest {
            model: &self.image_model,
            prompt: &prompt,
            n: 1,
            size: GenerationConfig::IMAGE_SIZE,
            response_format: "b64_json",
        };
        let url = join_url(&self.base_url, "images/generations");
        let response: ImageResponse = self.http.post_json(&url, self.api_key()?, &request).await?;

        let encoded = response
            .data
            .into_iter()
            .next()
            .and_then(|datum| datum.b64_json)
            .ok_or_else(|| {
                ConnectionsError::generation(GenerationKind::Image, "response carried no image data")
            })?;

        let decoded = base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| {
                ConnectionsError::generation(GenerationKind::Image, format!("invalid base64: {}", e))
            })?;
        if decoded.is_empty() {
            return Err(ConnectionsError::generation(
                GenerationKind::Image,
                "image payload is empty",
            ));
        }

        info!("Generated {} byte image for '{}'", decoded.len(), title);
        Ok(encoded)
    }
}

/// Parse the text model's JSON reply into pickup lines.
///
/// The reply must be an object with a non-empty `pickupLines` array whose
/// scores fall within `0..=10`.
pub fn parse_pickup_lines(text: &str) -> Result<Vec<PickupLine>> {
    let document: PickupLinesDocument = serde_json::from_str(text.trim()).map_err(|e| {
        ConnectionsError::generation(
            GenerationKind::PickupLines,
            format!("malformed model output: {}", e),
        )
    })?;

    if document.pickup_lines.is_empty() {
        return Err(ConnectionsError::generation(
            GenerationKind::PickupLines,
            "model returned no pickup lines",
        ));
    }

    let in_range = |score: u8| {
        (GenerationConfig::MIN_SCORE..=GenerationConfig::MAX_SCORE).contains(&score)
    };
    if let Some(bad) = document
        .pickup_lines
        .iter()
        .find(|l| !in_range(l.overall_score.creativity) || !in_range(l.overall_score.humor))
    {
        return Err(ConnectionsError::generation(
            GenerationKind::PickupLines,
            format!("score out of range for word '{}'", bad.word),
        ));
    }

    Ok(document.pickup_lines)
}
