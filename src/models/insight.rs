use serde::{Deserialize, Serialize};

/// A citation returned alongside a generated analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub title: String,
    pub uri: String,
}

/// Display-ready result of an analysis request. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherInsight {
    pub analysis: String,
    /// Kept for layout compatibility; the service never fills it.
    pub recommendation: String,
    pub sources: Vec<Source>,
}
