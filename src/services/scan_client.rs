// src/services/scan_client.rs
use crate::errors::AtrustError;
use crate::models::{AnalysisResult, MediaKind, SubmissionPayload};
use async_trait::async_trait;
use log::{debug, info};
use reqwest::Client;
use reqwest::multipart::{Form, Part};

/// Seam between the submission session and the network. The session is
/// exercised against a test double through this trait.
#[async_trait]
pub trait ScanApi {
    async fn submit(
        &self,
        kind: MediaKind,
        payload: &SubmissionPayload,
    ) -> Result<AnalysisResult, AtrustError>;
}

/// HTTP client for the trust-scan backend. One outbound request per
/// submission: no retries, no caching, and no client-side timeout — an
/// unresponsive backend is surfaced only if the transport itself fails.
pub struct ScanClient {
    client: Client,
    base_url: String,
}

impl ScanClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Probes `GET {base}/health`; any 2xx counts as healthy.
    pub async fn health(&self) -> Result<(), AtrustError> {
        let url = format!("{}/health", self.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AtrustError::network(&url, e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AtrustError::api(&url, status, &body));
        }

        Ok(())
    }

    fn build_form(payload: &SubmissionPayload) -> Result<Form, AtrustError> {
        match payload {
            SubmissionPayload::File {
                filename,
                content_type,
                data,
            } => {
                let part = Part::bytes(data.to_vec())
                    .file_name(filename.clone())
                    .mime_str(content_type)
                    .map_err(|e| {
                        AtrustError::validation(format!(
                            "Invalid content type {}: {}",
                            content_type, e
                        ))
                    })?;
                Ok(Form::new().part("file", part))
            }
            SubmissionPayload::Text(text) => Ok(Form::new().text("text", text.clone())),
        }
    }
}

#[async_trait]
impl ScanApi for ScanClient {
    async fn submit(
        &self,
        kind: MediaKind,
        payload: &SubmissionPayload,
    ) -> Result<AnalysisResult, AtrustError> {
        let url = format!("{}/scan/{}", self.base_url, kind.route());
        info!("Submitting {} scan to {}", kind, url);

        let form = Self::build_form(payload)?;

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AtrustError::network(&url, e))?;

        if !response.status().is_success() {
            let status = response.status();
            // Best effort: error bodies may be empty or unreadable.
            let body = response.text().await.unwrap_or_default();
            return Err(AtrustError::api(&url, status, &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AtrustError::network(&url, e))?;

        debug!("Scan response from {}: {} bytes", url, body.len());

        serde_json::from_str(&body).map_err(|e| AtrustError::parse(&url, e))
    }
}
