use super::{AnalysisService, GenerationRequest};
use crate::models::insight::WeatherInsight;
use crate::models::location::GeoPoint;
use crate::models::record::RainfallRecord;

/// Maximum number of records quoted in an analysis prompt.
pub const SUMMARY_WINDOW: usize = 10;

pub const ANALYSIS_FALLBACK: &str = "Error communicating with the analysis service.";
pub const EMPTY_ANALYSIS: &str = "Unable to generate the analysis.";
pub const TIP_FALLBACK: &str = "Stay informed about local weather conditions.";

const ANALYSIS_TEMPERATURE: f32 = 0.7;
const TIP_TEMPERATURE: f32 = 0.9;

/// Wraps an [`AnalysisService`] so that callers only ever see display-ready
/// values: failures turn into fixed fallback texts, nothing is retried or
/// cached.
pub struct InsightAdapter<A> {
    service: A,
}

impl<A: AnalysisService> InsightAdapter<A> {
    pub fn new(service: A) -> Self {
        Self { service }
    }

    pub async fn request_analysis(
        &self,
        records: &[RainfallRecord],
        location: Option<&GeoPoint>,
    ) -> WeatherInsight {
        let request = GenerationRequest {
            prompt: analysis_prompt(records, location),
            web_search: true,
            temperature: ANALYSIS_TEMPERATURE,
        };

        match self.service.generate(&request).await {
            Ok(generation) => WeatherInsight {
                analysis: generation
                    .text
                    .unwrap_or_else(|| EMPTY_ANALYSIS.to_string()),
                recommendation: String::new(),
                sources: generation.citations,
            },
            Err(e) => {
                tracing::error!(error = %e, "analysis request failed");
                WeatherInsight {
                    analysis: ANALYSIS_FALLBACK.to_string(),
                    recommendation: String::new(),
                    sources: Vec::new(),
                }
            }
        }
    }

    pub async fn request_quick_tip(&self, latest_amount: f64) -> String {
        let request = GenerationRequest {
            prompt: quick_tip_prompt(latest_amount),
            web_search: false,
            temperature: TIP_TEMPERATURE,
        };

        match self.service.generate(&request).await {
            Ok(generation) => generation
                .text
                .filter(|t| !t.trim().is_empty())
                .unwrap_or_else(|| TIP_FALLBACK.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "quick tip request failed");
                TIP_FALLBACK.to_string()
            }
        }
    }
}

/// Prompt quoting the tail of the list as given (at most
/// [`SUMMARY_WINDOW`] `date: amountmm` pairs) plus the coordinates if known.
pub fn analysis_prompt(records: &[RainfallRecord], location: Option<&GeoPoint>) -> String {
    let start = records.len().saturating_sub(SUMMARY_WINDOW);
    let summary = records[start..]
        .iter()
        .map(|r| format!("{}: {}mm", r.date_str(), r.amount))
        .collect::<Vec<_>>()
        .join(", ");

    let mut prompt = format!("Analyze these rainfall records: {summary}.\n");
    if let Some(loc) = location {
        prompt.push_str(&format!("Current location: Lat {}, Lng {}.\n", loc.lat, loc.lng));
    }
    prompt.push_str(
        "Provide a summary of trends, local impact and recommendations for agriculture and safety.",
    );
    prompt
}

pub fn quick_tip_prompt(latest_amount: f64) -> String {
    format!(
        "{latest_amount}mm of rain has been recorded. Give me a ten-word tip on what to do."
    )
}
