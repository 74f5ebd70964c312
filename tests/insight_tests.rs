use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use rainlog::insight::{
    ANALYSIS_FALLBACK, AnalysisService, EMPTY_ANALYSIS, Generation, GenerationRequest,
    InsightAdapter, InsightError, TIP_FALLBACK,
};
use rainlog::models::{GeoPoint, RainfallRecord, RecordFields, Source};
use std::sync::Mutex;

/// Canned service: answers with `reply` or fails when it is `None`,
/// remembering every request it saw.
struct FakeService {
    reply: Option<Generation>,
    seen: Mutex<Vec<GenerationRequest>>,
}

impl FakeService {
    fn answering(reply: Generation) -> Self {
        Self {
            reply: Some(reply),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            reply: None,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl AnalysisService for &FakeService {
    async fn generate(&self, request: &GenerationRequest) -> Result<Generation, InsightError> {
        self.seen.lock().unwrap().push(request.clone());
        self.reply.clone().ok_or(InsightError::Api {
            status: 503,
            message: "unavailable".into(),
        })
    }
}

fn records() -> Vec<RainfallRecord> {
    vec![
        RainfallRecord::from_fields(
            "b".into(),
            RecordFields::new(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 5.0),
        ),
        RainfallRecord::from_fields(
            "a".into(),
            RecordFields::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), 12.5),
        ),
    ]
}

#[tokio::test]
async fn failure_yields_fixed_fallback_and_no_sources() {
    let service = FakeService::failing();
    let adapter = InsightAdapter::new(&service);

    let insight = adapter.request_analysis(&records(), None).await;

    assert_eq!(insight.analysis, ANALYSIS_FALLBACK);
    assert!(insight.sources.is_empty());
    assert_eq!(insight.recommendation, "");
    // never retried
    assert_eq!(service.seen.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn success_passes_citations_through_in_order() {
    let sources = vec![
        Source {
            title: "Servicio Meteorológico".into(),
            uri: "https://smn.example/lluvia".into(),
        },
        Source {
            title: "Weather blog".into(),
            uri: "https://blog.example/rain".into(),
        },
    ];
    let service = FakeService::answering(Generation {
        text: Some("Rainfall is trending down.".into()),
        citations: sources.clone(),
    });
    let adapter = InsightAdapter::new(&service);

    let loc = GeoPoint::new(-34.6, -58.4);
    let insight = adapter.request_analysis(&records(), Some(&loc)).await;

    assert_eq!(insight.analysis, "Rainfall is trending down.");
    assert_eq!(insight.sources, sources);

    let seen = service.seen.lock().unwrap();
    assert!(seen[0].web_search);
    assert!(seen[0].prompt.contains("2024-01-02: 5mm, 2024-01-01: 12.5mm"));
    assert!(seen[0].prompt.contains("Lat -34.6, Lng -58.4"));
}

#[tokio::test]
async fn empty_text_gets_placeholder() {
    let service = FakeService::answering(Generation::default());
    let adapter = InsightAdapter::new(&service);

    let insight = adapter.request_analysis(&records(), None).await;
    assert_eq!(insight.analysis, EMPTY_ANALYSIS);
    assert!(insight.sources.is_empty());
}

#[tokio::test]
async fn every_call_issues_a_fresh_request() {
    let service = FakeService::answering(Generation {
        text: Some("ok".into()),
        citations: Vec::new(),
    });
    let adapter = InsightAdapter::new(&service);

    adapter.request_analysis(&records(), None).await;
    adapter.request_analysis(&records(), None).await;
    assert_eq!(service.seen.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn quick_tip_success_and_failure() {
    let ok = FakeService::answering(Generation {
        text: Some("Check gutters and drains before the next storm arrives.".into()),
        citations: Vec::new(),
    });
    let tip = InsightAdapter::new(&ok).request_quick_tip(5.0).await;
    assert_eq!(tip, "Check gutters and drains before the next storm arrives.");

    let seen = ok.seen.lock().unwrap();
    assert!(!seen[0].web_search);
    assert!(seen[0].prompt.starts_with("5mm"));
    drop(seen);

    let broken = FakeService::failing();
    let tip = InsightAdapter::new(&broken).request_quick_tip(5.0).await;
    assert_eq!(tip, TIP_FALLBACK);
}
