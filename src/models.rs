// src/models.rs
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Category of content being scanned. Selects both the input mode
/// (file picker vs. text box) and the backend sub-route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Video,
    Audio,
    Image,
    Text,
}

impl MediaKind {
    pub const ALL: [MediaKind; 4] = [
        MediaKind::Video,
        MediaKind::Audio,
        MediaKind::Image,
        MediaKind::Text,
    ];

    /// Backend sub-route segment: `POST {base}/scan/{route}`.
    pub fn route(self) -> &'static str {
        match self {
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
            MediaKind::Text => "text",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MediaKind::Video => "Video",
            MediaKind::Audio => "Audio",
            MediaKind::Image => "Image",
            MediaKind::Text => "Text",
        }
    }

    /// File-picker filter for the file-backed kinds. `None` for Text,
    /// which takes free-form input instead.
    pub fn accept(self) -> Option<&'static str> {
        match self {
            MediaKind::Video => Some("video/*"),
            MediaKind::Audio => Some("audio/*"),
            MediaKind::Image => Some("image/*"),
            MediaKind::Text => None,
        }
    }

    pub fn wants_file(self) -> bool {
        !matches!(self, MediaKind::Text)
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for MediaKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "video" => Ok(MediaKind::Video),
            "audio" => Ok(MediaKind::Audio),
            "image" => Ok(MediaKind::Image),
            "text" => Ok(MediaKind::Text),
            other => Err(format!("unknown media kind: {}", other)),
        }
    }
}

/// What the user handed over for scanning. Exactly one form is valid
/// per `MediaKind`; never both.
#[derive(Debug, Clone)]
pub enum SubmissionPayload {
    File {
        filename: String,
        content_type: String,
        data: Bytes,
    },
    Text(String),
}

impl SubmissionPayload {
    pub fn file(
        filename: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Bytes>,
    ) -> Self {
        SubmissionPayload::File {
            filename: filename.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        SubmissionPayload::Text(text.into())
    }
}

/// Trust report returned by the backend. Every field is defaulted: the
/// contract has drifted across backend revisions, so nothing beyond the
/// JSON object itself may be assumed present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub risk_type: Option<String>,
    #[serde(default)]
    pub trust_score: Option<f64>,
    #[serde(default)]
    pub recommended_action: Option<String>,
    #[serde(default)]
    pub flags: Vec<String>,
    /// Shape-varying breakdown container, e.g.
    /// `{"video": {"summary": {"frame_consistency": 0.82, ...}}}`.
    /// Left loose on purpose; `report` digs into it defensively.
    #[serde(default)]
    pub raw: serde_json::Value,
}

/// Lifecycle of the current submission. Owned exclusively by
/// `SubmissionSession`; everything else only reads it.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    Idle,
    AwaitingInput,
    InFlight,
    Succeeded(AnalysisResult),
    Failed(String),
}

impl Default for SubmissionState {
    fn default() -> Self {
        SubmissionState::Idle
    }
}
