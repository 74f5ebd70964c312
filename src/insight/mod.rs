//! Analysis adapter: turns the record list into prompts for a hosted
//! text-generation service and normalizes what comes back.

mod adapter;
mod error;
pub mod gemini;
mod http;

pub use adapter::{
    ANALYSIS_FALLBACK, EMPTY_ANALYSIS, InsightAdapter, SUMMARY_WINDOW, TIP_FALLBACK,
    analysis_prompt, quick_tip_prompt,
};
pub use error::InsightError;
pub use gemini::GeminiClient;

use crate::models::insight::Source;
use std::future::Future;

/// One outbound generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub prompt: String,
    /// Let the service ground its answer with a live web search.
    pub web_search: bool,
    pub temperature: f32,
}

/// Raw service answer before fallbacks are applied.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Generation {
    pub text: Option<String>,
    pub citations: Vec<Source>,
}

/// A hosted text-generation backend.
pub trait AnalysisService {
    fn generate(
        &self,
        request: &GenerationRequest,
    ) -> impl Future<Output = Result<Generation, InsightError>> + Send;
}
