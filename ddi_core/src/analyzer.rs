//! Analyzer page state machine.
//!
//! Model/update in the Elm sense: [`AnalyzerState`] is the whole page,
//! [`update`] applies one [`Msg`] and returns at most one [`Effect`] for
//! the caller to execute. The completion of an effect comes back as
//! another `Msg`. Nothing in here performs I/O.
//!
//! ```text
//! Idle --Analyze--> Submitting --AnalyzeFinished--> Success | Failure
//! DownloadIdle --Download--> Downloading --DownloadFinished--> DownloadIdle
//! ```

use tracing::{debug, error, info, warn};

use crate::error::{ApiError, DownloadError, UiError};
use crate::severity::Severity;
use crate::types::{AnalysisRequest, AnalysisResult, PdfRequest, ReportType, report_file_name};

/// Per-page state. Created empty on mount, dropped on navigation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzerState {
    pub drug1: String,
    pub drug2: String,
    pub is_loading: bool,
    pub error: Option<UiError>,
    pub result: Option<AnalysisResult>,
    pub active_tab: ReportType,
    pub show_download_modal: bool,
    pub is_downloading: bool,
}

impl AnalyzerState {
    /// Inline error text, empty when there is none.
    pub fn error_message(&self) -> &'static str {
        self.error.map(|e| e.message()).unwrap_or_default()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.result
            .as_ref()
            .map(|r| Severity::classify(r.severity()))
    }

    /// Text of the report under the active tab.
    pub fn active_report(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.report(self.active_tab))
    }

    pub fn analyze_label(&self) -> &'static str {
        if self.is_loading {
            "Analyzing..."
        } else {
            "Analyze Interaction"
        }
    }

    pub fn download_label(&self, report_type: ReportType) -> &'static str {
        if self.is_downloading {
            "Generating..."
        } else {
            report_type.download_label()
        }
    }

    fn request(&self) -> AnalysisRequest {
        AnalysisRequest::new(self.drug1.clone(), self.drug2.clone())
    }
}

/// Everything that can happen to the page.
#[derive(Debug)]
pub enum Msg {
    Drug1Changed(String),
    Drug2Changed(String),
    Analyze,
    AnalyzeFinished(Result<AnalysisResult, ApiError>),
    SelectTab(ReportType),
    OpenDownloadModal,
    CloseDownloadModal,
    Download(ReportType),
    /// `Ok` carries the saved file name.
    DownloadFinished(Result<String, DownloadError>),
}

/// Work the caller must perform and answer with a `Msg`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Answer with [`Msg::AnalyzeFinished`].
    Predict(AnalysisRequest),
    /// Answer with [`Msg::DownloadFinished`].
    GeneratePdf {
        request: PdfRequest,
        file_name: String,
    },
}

pub fn update(state: &mut AnalyzerState, msg: Msg) -> Option<Effect> {
    match msg {
        Msg::Drug1Changed(value) => {
            state.drug1 = value;
            None
        }
        Msg::Drug2Changed(value) => {
            state.drug2 = value;
            None
        }
        Msg::Analyze => analyze(state),
        Msg::AnalyzeFinished(outcome) => {
            state.is_loading = false;
            match outcome {
                Ok(result) => {
                    info!(
                        severity = result.severity_text(),
                        prediction = result.prediction(),
                        "analysis complete"
                    );
                    state.result = Some(result);
                    state.active_tab = ReportType::Patient;
                }
                Err(err) => {
                    error!(error = %err, kind = ?err.kind(), "analysis request failed");
                    state.error = Some(UiError::AnalysisFailed);
                }
            }
            None
        }
        Msg::SelectTab(tab) => {
            state.active_tab = tab;
            None
        }
        Msg::OpenDownloadModal => {
            if state.result.is_some() {
                state.show_download_modal = true;
            }
            None
        }
        Msg::CloseDownloadModal => {
            if !state.is_downloading {
                state.show_download_modal = false;
            }
            None
        }
        Msg::Download(report_type) => download(state, report_type),
        Msg::DownloadFinished(outcome) => {
            state.is_downloading = false;
            match outcome {
                Ok(file_name) => {
                    info!(%file_name, "report saved");
                    state.show_download_modal = false;
                }
                Err(err) => {
                    error!(error = %err, "report download failed");
                    state.error = Some(UiError::DownloadFailed);
                }
            }
            None
        }
    }
}

fn analyze(state: &mut AnalyzerState) -> Option<Effect> {
    if state.is_loading {
        debug!("analysis already in flight, ignoring re-submission");
        return None;
    }

    let request = state.request();
    if !request.is_complete() {
        debug!("analyze rejected: missing drug name");
        state.error = Some(UiError::MissingDrugNames);
        return None;
    }

    state.error = None;
    state.result = None;
    state.is_loading = true;
    info!(drug1 = %request.drug1, drug2 = %request.drug2, "requesting interaction analysis");
    Some(Effect::Predict(request))
}

fn download(state: &mut AnalyzerState, report_type: ReportType) -> Option<Effect> {
    // Only reachable from the modal, which needs a result to open.
    let Some(result) = state.result.clone() else {
        warn!(%report_type, "download requested without an analysis result");
        return None;
    };
    if state.is_downloading {
        debug!(%report_type, "download already in flight");
        return None;
    }

    state.is_downloading = true;
    let file_name = report_file_name(report_type, &state.drug1, &state.drug2);
    info!(%report_type, %file_name, "requesting PDF report");
    Some(Effect::GeneratePdf {
        request: PdfRequest {
            drug1: state.drug1.clone(),
            drug2: state.drug2.clone(),
            report_type,
            prediction_data: result,
        },
        file_name,
    })
}
