//! HTTP client for the text/image extraction service.

use async_trait::async_trait;
use caseflow_core::{CandidateRecord, ExtractionFailure, ExtractionGateway};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Envelope the extraction service wraps candidate batches in.
#[derive(Deserialize)]
struct ExtractResponse {
    cases: Vec<CandidateRecord>,
}

#[derive(Serialize)]
struct TextIn<'a> {
    text: &'a str,
}

/// Client for the extraction service's text and image endpoints.
pub struct GatewayClient {
    client: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    /// Create a client for the given base URL, like
    /// `http://localhost:8000` (no trailing slash).
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl ExtractionGateway for GatewayClient {
    async fn extract_from_text(
        &self,
        text: &str,
    ) -> Result<Vec<CandidateRecord>, ExtractionFailure> {
        let url = format!("{}/api/extract-case-no/", self.base_url);
        info!(url = %url, chars = text.len(), "requesting text extraction");
        let resp = self
            .client
            .post(&url)
            .json(&TextIn { text })
            .send()
            .await
            .map_err(|e| ExtractionFailure::Unreachable(e.to_string()))?;
        decode_candidates(resp).await
    }

    async fn extract_from_image(
        &self,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<Vec<CandidateRecord>, ExtractionFailure> {
        let url = format!("{}/api/extract-case-no-from-image/", self.base_url);
        info!(url = %url, bytes = bytes.len(), filename, "requesting image extraction");
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);
        let resp = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| ExtractionFailure::Unreachable(e.to_string()))?;
        decode_candidates(resp).await
    }
}

async fn decode_candidates(
    resp: reqwest::Response,
) -> Result<Vec<CandidateRecord>, ExtractionFailure> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(ExtractionFailure::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    let envelope: ExtractResponse = resp
        .json()
        .await
        .map_err(|e| ExtractionFailure::MalformedPayload(e.to_string()))?;
    info!(count = envelope.cases.len(), "extraction complete");
    Ok(envelope.cases)
}
