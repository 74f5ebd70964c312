//! Google Gemini `generateContent` client.
//!
//! Only the subset of the REST payload needed here is modelled: one text
//! prompt in, candidate text plus grounding citations out.

use super::error::InsightError;
use super::http::check_response;
use super::{AnalysisService, Generation, GenerationRequest};
use crate::config::Config;
use crate::models::insight::Source;
use serde::{Deserialize, Serialize};

const DEFAULT_SOURCE_TITLE: &str = "External source";
const DEFAULT_SOURCE_URI: &str = "#";

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// No explicit timeout: the transport default applies.
    pub fn new(base_url: &str, model: &str, api_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.api_base_url, &cfg.model, cfg.resolved_api_key())
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

impl AnalysisService for GeminiClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, InsightError> {
        let api_key = self.api_key.as_deref().ok_or(InsightError::MissingApiKey)?;

        tracing::debug!(model = %self.model, web_search = request.web_search, "calling analysis service");

        let resp = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&GenerateContentRequest::from(request))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body: serde_json::Value = resp
            .json()
            .await
            .map_err(|e| InsightError::Parse(e.to_string()))?;
        parse_generation(body)
    }
}

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    tools: Vec<Tool>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct Tool {
    google_search: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
}

impl From<&GenerationRequest> for GenerateContentRequest {
    fn from(req: &GenerationRequest) -> Self {
        let tools = if req.web_search {
            vec![Tool {
                google_search: serde_json::Map::new(),
            }]
        } else {
            Vec::new()
        };
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(req.prompt.clone()),
                }],
            }],
            tools,
            generation_config: GenerationConfig {
                temperature: req.temperature,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<Content>,
    #[serde(default)]
    grounding_metadata: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    title: Option<String>,
    uri: Option<String>,
}

/// Map a raw `generateContent` body to a [`Generation`].
///
/// Text parts of the first candidate are concatenated. Citation metadata
/// that does not have the expected shape yields an empty source list.
pub fn parse_generation(body: serde_json::Value) -> Result<Generation, InsightError> {
    let resp: GenerateContentResponse =
        serde_json::from_value(body).map_err(|e| InsightError::Parse(e.to_string()))?;

    let Some(first) = resp.candidates.into_iter().next() else {
        return Ok(Generation::default());
    };

    let text: String = first
        .content
        .unwrap_or_default()
        .parts
        .into_iter()
        .filter_map(|p| p.text)
        .collect();

    let citations = first
        .grounding_metadata
        .map(parse_citations)
        .unwrap_or_default();

    Ok(Generation {
        text: (!text.is_empty()).then_some(text),
        citations,
    })
}

fn parse_citations(raw: serde_json::Value) -> Vec<Source> {
    match serde_json::from_value::<GroundingMetadata>(raw) {
        Ok(meta) => meta
            .grounding_chunks
            .into_iter()
            .filter_map(|c| c.web)
            .map(|w| Source {
                title: w.title.unwrap_or_else(|| DEFAULT_SOURCE_TITLE.to_string()),
                uri: w.uri.unwrap_or_else(|| DEFAULT_SOURCE_URI.to_string()),
            })
            .collect(),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring malformed grounding metadata");
            Vec::new()
        }
    }
}
