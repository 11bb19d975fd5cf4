// tests/report_view.rs
use atrust_client::models::{AnalysisResult, MediaKind, SubmissionState};
use atrust_client::report::{DisplayModel, MetricBar, display_for, normalize_score, report_view};
use pretty_assertions::assert_eq;
use serde_json::json;

fn result_from(value: serde_json::Value) -> AnalysisResult {
    serde_json::from_value(value).expect("result payload should deserialize")
}

#[test]
fn low_risk_fraction_renders_favorable_percentage() {
    let result = result_from(json!({
        "risk_type": "low",
        "trust_score": 0.93,
        "recommended_action": "No action needed"
    }));

    let view = report_view(Some(MediaKind::Text), &result);
    assert!(view.favorable);
    assert_eq!(view.score_percent, 93.0);
    assert_eq!(view.risk_label, "low");
    assert_eq!(view.recommendation, "No action needed");
}

#[test]
fn unrecognized_tag_and_overflow_score_render_clamped_unfavorable() {
    let result = result_from(json!({
        "risk_type": "high_risk",
        "trust_score": 130,
        "recommended_action": "Escalate"
    }));

    let view = report_view(Some(MediaKind::Video), &result);
    assert!(!view.favorable);
    assert_eq!(view.score_percent, 100.0);
    assert_eq!(view.recommendation, "Escalate");
}

#[test]
fn empty_payload_renders_without_panicking() {
    let view = report_view(Some(MediaKind::Image), &AnalysisResult::default());
    assert!(!view.favorable);
    assert_eq!(view.score_percent, 0.0);
    assert_eq!(view.risk_label, "unknown");
    assert_eq!(view.recommendation, "No recommendation provided.");
    assert!(view.metrics.is_empty());
    assert!(view.keywords.is_empty());
}

#[test]
fn partial_json_deserializes_with_defaults() {
    let result = result_from(json!({ "risk_type": "safe" }));
    assert_eq!(result.risk_type.as_deref(), Some("safe"));
    assert_eq!(result.trust_score, None);
    assert!(result.flags.is_empty());

    let view = report_view(None, &result);
    assert!(view.favorable);
}

#[test]
fn breakdown_reads_summary_nesting_and_splits_keywords() {
    let result = result_from(json!({
        "risk_type": "medium",
        "trust_score": 61,
        "recommended_action": "Verify via an independent channel.",
        "flags": ["lipsync_mismatch"],
        "raw": {
            "video": {
                "summary": {
                    "frame_consistency": 0.82,
                    "metadata_integrity": 55.0,
                    "detected_keywords": ["deepfake", "lipsync"],
                    "notes": "encoder changed mid-stream"
                }
            }
        }
    }));

    let view = report_view(Some(MediaKind::Video), &result);
    assert_eq!(
        view.metrics,
        vec![
            MetricBar {
                label: "frame consistency".to_string(),
                percent: 82.0,
            },
            MetricBar {
                label: "metadata integrity".to_string(),
                percent: 55.0,
            },
        ]
    );
    assert_eq!(view.keywords, vec!["deepfake", "lipsync"]);
    assert_eq!(view.flags, vec!["lipsync_mismatch"]);
}

#[test]
fn breakdown_reads_flat_legacy_nesting() {
    let result = result_from(json!({
        "raw": { "audio": { "spectral_flatness": 0.4 } }
    }));

    let view = report_view(Some(MediaKind::Audio), &result);
    assert_eq!(
        view.metrics,
        vec![MetricBar {
            label: "spectral flatness".to_string(),
            percent: 40.0,
        }]
    );
}

#[test]
fn breakdown_for_other_kind_is_empty() {
    let result = result_from(json!({
        "raw": { "audio": { "spectral_flatness": 0.4 } }
    }));

    let view = report_view(Some(MediaKind::Image), &result);
    assert!(view.metrics.is_empty());
}

#[test]
fn score_normalization_boundaries() {
    assert_eq!(normalize_score(0.0), 0.0);
    assert_eq!(normalize_score(1.0), 100.0);
    assert_eq!(normalize_score(93.0), 93.0);
    assert_eq!(normalize_score(130.0), 100.0);
    assert_eq!(normalize_score(-5.0), 0.0);
    assert_eq!(normalize_score(f64::NAN), 0.0);
}

#[test]
fn display_models_follow_observable_states() {
    assert_eq!(display_for(&SubmissionState::Idle, None), None);
    assert_eq!(display_for(&SubmissionState::AwaitingInput, None), None);
    assert_eq!(
        display_for(&SubmissionState::InFlight, Some(MediaKind::Text)),
        Some(DisplayModel::Loading)
    );

    let failed = SubmissionState::Failed("backend unreachable".to_string());
    match display_for(&failed, Some(MediaKind::Text)) {
        Some(DisplayModel::Error(err)) => assert_eq!(err.message, "backend unreachable"),
        other => panic!("expected error display, got {:?}", other),
    }
}
