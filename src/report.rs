// src/report.rs
use crate::models::{AnalysisResult, MediaKind, SubmissionState};
use serde_json::{Map, Value};

/// Risk tags that read as favorable. Anything else, including tags this
/// client has never seen, renders unfavorable rather than failing.
const FAVORABLE_RISK_TAGS: [&str; 3] = ["low", "safe", "authentic"];

/// Breakdown keys that are not percentage metrics and get surfaced
/// separately instead.
const NON_METRIC_KEYS: [&str; 1] = ["detected_keywords"];

#[derive(Debug, Clone, PartialEq)]
pub struct MetricBar {
    pub label: String,
    pub percent: f64,
}

/// Everything the result surface needs to draw a finished report. All
/// string fields are untrusted backend text and must be escaped by
/// whatever surface displays them.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportView {
    pub favorable: bool,
    pub score_percent: f64,
    pub risk_label: String,
    pub recommendation: String,
    pub flags: Vec<String>,
    pub metrics: Vec<MetricBar>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorView {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DisplayModel {
    Loading,
    Report(ReportView),
    Error(ErrorView),
}

/// Maps the observable states to display models. Idle and AwaitingInput
/// render nothing; those phases belong to the input surface.
pub fn display_for(state: &SubmissionState, kind: Option<MediaKind>) -> Option<DisplayModel> {
    match state {
        SubmissionState::Idle | SubmissionState::AwaitingInput => None,
        SubmissionState::InFlight => Some(DisplayModel::Loading),
        SubmissionState::Succeeded(result) => {
            Some(DisplayModel::Report(report_view(kind, result)))
        }
        SubmissionState::Failed(message) => Some(DisplayModel::Error(ErrorView {
            message: message.clone(),
        })),
    }
}

/// Pure projection of a backend result into a display model. Tolerates
/// any partial or oddly-nested payload without panicking.
pub fn report_view(kind: Option<MediaKind>, result: &AnalysisResult) -> ReportView {
    let risk_label = result
        .risk_type
        .clone()
        .unwrap_or_else(|| "unknown".to_string());

    let favorable = FAVORABLE_RISK_TAGS
        .iter()
        .any(|tag| risk_label.trim().eq_ignore_ascii_case(tag));

    let score_percent = normalize_score(result.trust_score.unwrap_or(0.0));

    let recommendation = result
        .recommended_action
        .clone()
        .unwrap_or_else(|| "No recommendation provided.".to_string());

    let (metrics, keywords) = match kind {
        Some(kind) => breakdown(kind, &result.raw),
        None => (Vec::new(), Vec::new()),
    };

    ReportView {
        favorable,
        score_percent,
        risk_label,
        recommendation,
        flags: result.flags.clone(),
        metrics,
        keywords,
    }
}

/// Scores arrive either as [0,1] fractions or [0,100] percentages
/// depending on backend revision. Fractions scale up; everything else
/// clamps into [0,100]. Non-finite input renders as 0.
pub fn normalize_score(raw: f64) -> f64 {
    if !raw.is_finite() {
        return 0.0;
    }
    let percent = if (0.0..=1.0).contains(&raw) {
        raw * 100.0
    } else {
        raw
    };
    percent.clamp(0.0, 100.0)
}

/// Digs the per-metric summary for the given kind out of the loose
/// breakdown container. Two nestings are in the wild:
/// `raw[kind].summary.{metric: number}` and the older `raw[kind]`
/// holding the metric map directly. Non-numeric entries are skipped;
/// `detected_keywords` is pulled out as a separate tag list.
fn breakdown(kind: MediaKind, raw: &Value) -> (Vec<MetricBar>, Vec<String>) {
    let section = raw.get(kind.route());

    let summary = section
        .and_then(|s| s.get("summary"))
        .and_then(Value::as_object)
        .or_else(|| section.and_then(Value::as_object));

    let summary = match summary {
        Some(summary) => summary,
        None => return (Vec::new(), Vec::new()),
    };

    let mut metrics = Vec::new();
    for (key, value) in summary {
        if NON_METRIC_KEYS.contains(&key.as_str()) {
            continue;
        }
        if let Some(number) = value.as_f64() {
            metrics.push(MetricBar {
                label: metric_label(key),
                percent: normalize_score(number),
            });
        }
    }

    (metrics, keyword_list(summary))
}

fn keyword_list(summary: &Map<String, Value>) -> Vec<String> {
    summary
        .get("detected_keywords")
        .and_then(Value::as_array)
        .map(|arr| {
            arr.iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn metric_label(key: &str) -> String {
    key.replace('_', " ")
}
