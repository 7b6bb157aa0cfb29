//! Backend seam.
//!
//! [`DdiApi`] is what the analyzer talks to; [`HttpApi`] is the real
//! implementation over reqwest (browser `fetch` on wasm32, hyper natively).
//! Futures are not `Send` because browser futures never are.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::types::{AnalysisRequest, AnalysisResult, PdfRequest};

pub const PREDICT_PATH: &str = "/api/predict";
pub const GENERATE_PDF_PATH: &str = "/api/generate-pdf";

#[async_trait(?Send)]
pub trait DdiApi {
    /// Classify a drug pair and fetch both generated reports.
    async fn predict(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError>;

    /// Render one report as a PDF. Returns the raw document bytes.
    async fn generate_pdf(&self, request: &PdfRequest) -> Result<Vec<u8>, ApiError>;
}

/// reqwest-backed client for the prediction service.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpApi {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// POST a JSON body and return the raw body of a 2xx answer.
    async fn post_json<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, ApiError> {
        let url = self.config.endpoint(path);
        debug!(%url, "POST");

        let transport = |source: reqwest::Error| ApiError::Transport {
            endpoint: path.to_string(),
            source,
        };

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(transport)?;
        Ok(bytes.to_vec())
    }
}

#[async_trait(?Send)]
impl DdiApi for HttpApi {
    async fn predict(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        let body = self.post_json(PREDICT_PATH, request).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    async fn generate_pdf(&self, request: &PdfRequest) -> Result<Vec<u8>, ApiError> {
        self.post_json(GENERATE_PDF_PATH, request).await
    }
}
