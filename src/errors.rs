// src/errors.rs
use thiserror::Error;

/// Longest response-body excerpt carried inside an API error message.
const BODY_EXCERPT_MAX: usize = 200;

#[derive(Error, Debug)]
pub enum AtrustError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(
        "Network error while calling {url}. This usually means the backend is \
         unreachable, blocked by CORS, or HTTP/HTTPS origins are mixed. \
         Original error: {detail}"
    )]
    Network { url: String, detail: String },

    #[error("API request failed ({status} {status_text}) at {url}.{detail}")]
    Api {
        status: u16,
        status_text: String,
        url: String,
        detail: String,
    },

    #[error("Failed to parse response from {url}: {detail}")]
    Parse { url: String, detail: String },
}

impl AtrustError {
    pub fn validation(message: impl Into<String>) -> Self {
        AtrustError::Validation(message.into())
    }

    pub fn network(url: &str, err: impl std::fmt::Display) -> Self {
        AtrustError::Network {
            url: url.to_string(),
            detail: err.to_string(),
        }
    }

    pub fn api(url: &str, status: reqwest::StatusCode, body: &str) -> Self {
        let excerpt: String = body.chars().take(BODY_EXCERPT_MAX).collect();
        let detail = if excerpt.is_empty() {
            String::new()
        } else {
            format!(" Details: {}", excerpt)
        };
        AtrustError::Api {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
            url: url.to_string(),
            detail,
        }
    }

    pub fn parse(url: &str, err: impl std::fmt::Display) -> Self {
        AtrustError::Parse {
            url: url.to_string(),
            detail: err.to_string(),
        }
    }
}
