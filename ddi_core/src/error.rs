//! Error taxonomy.
//!
//! `ApiError` and `DownloadError` keep the diagnostic detail for the log.
//! `UiError` is what the page renders; its `Display` is the exact
//! user-facing sentence and never includes the underlying cause.

use thiserror::Error;

/// Failure talking to the prediction service.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{endpoint} answered with HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Coarse classification of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request never got an HTTP answer.
    Network,
    /// The server answered with a non-success status.
    Server,
    /// The server answered 2xx but the body was unusable.
    Malformed,
}

impl ApiError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ApiError::Transport { .. } => FailureKind::Network,
            ApiError::Status { .. } => FailureKind::Server,
            ApiError::Decode(_) => FailureKind::Malformed,
        }
    }
}

/// Failure producing a report file.
#[derive(Debug, Error)]
pub enum DownloadError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("could not save {file_name}: {reason}")]
    Save { file_name: String, reason: String },
}

const MISSING_DRUG_NAMES: &str = "Please enter both drug names.";
const ANALYSIS_FAILED: &str = "An error occurred during analysis. Please try again.";
const DOWNLOAD_FAILED: &str = "Failed to generate PDF report. Please try again.";

/// Error shown inline on the analyzer page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UiError {
    #[error("{}", MISSING_DRUG_NAMES)]
    MissingDrugNames,
    #[error("{}", ANALYSIS_FAILED)]
    AnalysisFailed,
    #[error("{}", DOWNLOAD_FAILED)]
    DownloadFailed,
}

impl UiError {
    pub fn message(&self) -> &'static str {
        match self {
            UiError::MissingDrugNames => MISSING_DRUG_NAMES,
            UiError::AnalysisFailed => ANALYSIS_FAILED,
            UiError::DownloadFailed => DOWNLOAD_FAILED,
        }
    }
}
