use reqwest::Client;
use reqwest::multipart::{Form, Part};

use super::error::ApiError;
use super::types::{AnalysisRequest, AnalysisResult};

/// Seam for the single network operation, so orchestration can be tested
/// against a mock service.
pub trait AnalyzeService {
    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, ApiError>;
}

pub struct AnalysisClient {
    client: Client,
    base_url: String,
}

impl AnalysisClient {
    /// Create a client against the given base URL (the configured endpoint,
    /// or a mock server in tests).
    pub fn with_base_url(base_url: String) -> Self {
        // No request timeout: the exchange waits as long as the service
        // takes to answer.
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl AnalyzeService for AnalysisClient {
    async fn analyze(&self, req: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        let form = Form::new()
            .part(
                "resume",
                Part::bytes(req.resume.bytes.clone()).file_name(req.resume.filename.clone()),
            )
            .text("jd", req.job_description.clone())
            .text("mode", req.mode.as_str());

        let response = self
            .client
            .post(format!("{}/analyze", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = if body.is_empty() {
                "Server error".to_string()
            } else {
                body
            };
            return Err(ApiError::Service {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))
    }
}
