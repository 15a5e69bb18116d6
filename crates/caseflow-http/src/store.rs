//! HTTP client for the persistent case store.

use async_trait::async_trait;
use caseflow_core::{CaseStore, NewCase, PersistedCase, StoreFailure};
use tracing::info;

/// Client for the case store's REST endpoints.
pub struct StoreClient {
    client: reqwest::Client,
    base_url: String,
}

impl StoreClient {
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
impl CaseStore for StoreClient {
    async fn list_cases(&self) -> Result<Vec<PersistedCase>, StoreFailure> {
        let url = format!("{}/api/cases/", self.base_url);
        info!(url = %url, "listing cases");
        let resp = send(self.client.get(&url)).await?;
        let cases: Vec<PersistedCase> = resp
            .json()
            .await
            .map_err(|e| StoreFailure::MalformedResponse(e.to_string()))?;
        info!(count = cases.len(), "listed cases");
        Ok(cases)
    }

    async fn create_case(&self, case: &NewCase) -> Result<PersistedCase, StoreFailure> {
        let url = format!("{}/api/cases/", self.base_url);
        info!(url = %url, case_no = %case.case_no, "creating case");
        let resp = send(self.client.post(&url).json(case)).await?;
        let created: PersistedCase = resp
            .json()
            .await
            .map_err(|e| StoreFailure::MalformedResponse(e.to_string()))?;
        info!(id = created.id, "case created");
        Ok(created)
    }

    async fn set_complete(&self, id: i64) -> Result<PersistedCase, StoreFailure> {
        let url = format!("{}/api/cases/{}/complete", self.base_url, id);
        info!(url = %url, "marking case complete");
        let resp = send(self.client.put(&url)).await?;
        resp.json()
            .await
            .map_err(|e| StoreFailure::MalformedResponse(e.to_string()))
    }
}

/// Send a request and fold transport and non-2xx outcomes into
/// [`StoreFailure`].
async fn send(req: reqwest::RequestBuilder) -> Result<reqwest::Response, StoreFailure> {
    let resp = req
        .send()
        .await
        .map_err(|e| StoreFailure::Request(e.to_string()))?;
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreFailure::Rejected {
            status: status.as_u16(),
            body,
        });
    }
    Ok(resp)
}
