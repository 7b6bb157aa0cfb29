//! End-to-end analyzer flows against a scripted backend.

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use pretty_assertions::assert_eq;

use ddi_core::api::{GENERATE_PDF_PATH, PREDICT_PATH};
use ddi_core::{
    AnalysisRequest, AnalysisResult, AnalyzerSession, ApiError, DdiApi, DownloadError, FileSink,
    Msg, PdfRequest, ReportType, Severity, UiError,
};

#[derive(Default)]
struct ScriptedApi {
    predictions: RefCell<VecDeque<Result<AnalysisResult, ApiError>>>,
    pdfs: RefCell<VecDeque<Result<Vec<u8>, ApiError>>>,
    predict_calls: RefCell<Vec<AnalysisRequest>>,
    pdf_calls: RefCell<Vec<PdfRequest>>,
}

impl ScriptedApi {
    fn answering(result: AnalysisResult) -> Self {
        let api = Self::default();
        api.predictions.borrow_mut().push_back(Ok(result));
        api
    }

    fn then_pdf(self, outcome: Result<Vec<u8>, ApiError>) -> Self {
        self.pdfs.borrow_mut().push_back(outcome);
        self
    }
}

fn unavailable(endpoint: &str) -> ApiError {
    ApiError::Status {
        endpoint: endpoint.to_string(),
        status: 503,
    }
}

#[async_trait(?Send)]
impl DdiApi for ScriptedApi {
    async fn predict(&self, request: &AnalysisRequest) -> Result<AnalysisResult, ApiError> {
        self.predict_calls.borrow_mut().push(request.clone());
        self.predictions
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unavailable(PREDICT_PATH)))
    }

    async fn generate_pdf(&self, request: &PdfRequest) -> Result<Vec<u8>, ApiError> {
        self.pdf_calls.borrow_mut().push(request.clone());
        self.pdfs
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(unavailable(GENERATE_PDF_PATH)))
    }
}

#[derive(Default)]
struct RecordingSink {
    saved: RefCell<Vec<(String, Vec<u8>)>>,
    refuse: bool,
}

impl FileSink for RecordingSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), DownloadError> {
        if self.refuse {
            return Err(DownloadError::Save {
                file_name: file_name.to_string(),
                reason: "disk full".into(),
            });
        }
        self.saved
            .borrow_mut()
            .push((file_name.to_string(), bytes.to_vec()));
        Ok(())
    }
}

fn warfarin_aspirin() -> AnalysisResult {
    AnalysisResult::default()
        .with("severity", "Major")
        .with("prediction", "Increased bleeding risk")
        .with("patient_report", "Watch for unusual bruising.")
        .with("professional_report", "Monitor INR; consider alternatives.")
}

#[tokio::test]
async fn missing_name_never_reaches_the_network() {
    let mut session = AnalyzerSession::new(ScriptedApi::default(), RecordingSink::default());

    session.analyze("Warfarin", "").await;

    assert!(session.api().predict_calls.borrow().is_empty());
    assert_eq!(session.state().error, Some(UiError::MissingDrugNames));
    assert!(!session.state().is_loading);
}

#[tokio::test]
async fn successful_analysis_shows_patient_summary() {
    let api = ScriptedApi::answering(warfarin_aspirin());
    let mut session = AnalyzerSession::new(api, RecordingSink::default());

    session.analyze("Warfarin", "Aspirin").await;

    let state = session.state();
    assert_eq!(
        *session.api().predict_calls.borrow(),
        vec![AnalysisRequest::new("Warfarin", "Aspirin")]
    );
    assert_eq!(state.result, Some(warfarin_aspirin()));
    assert_eq!(state.error_message(), "");
    assert!(!state.is_loading);
    assert_eq!(state.active_tab, ReportType::Patient);
    assert_eq!(state.severity().map(|s| s.css_class()), Some("severity-major"));
    assert_eq!(state.active_report(), Some("Watch for unusual bruising."));
}

#[tokio::test]
async fn failed_analysis_shows_generic_message_without_badge() {
    let mut session = AnalyzerSession::new(ScriptedApi::default(), RecordingSink::default());

    session.analyze("Warfarin", "Aspirin").await;

    let state = session.state();
    assert_eq!(
        state.error_message(),
        "An error occurred during analysis. Please try again."
    );
    assert_eq!(state.result, None);
    assert_eq!(state.severity(), None);
    assert!(!state.is_loading);
}

#[tokio::test]
async fn new_analysis_resets_professional_tab() {
    let api = ScriptedApi::answering(warfarin_aspirin());
    api.predictions.borrow_mut().push_back(Ok(AnalysisResult::default()
        .with("severity", "minor")
        .with("prediction", "INT")));
    let mut session = AnalyzerSession::new(api, RecordingSink::default());

    session.analyze("Warfarin", "Aspirin").await;
    session.dispatch(Msg::SelectTab(ReportType::Professional)).await;
    assert_eq!(session.state().active_tab, ReportType::Professional);

    session.analyze("Ibuprofen", "Lisinopril").await;

    assert_eq!(session.state().active_tab, ReportType::Patient);
    assert_eq!(session.state().severity(), Some(Severity::Minor));
}

#[tokio::test]
async fn professional_report_download() {
    let pdf = b"%PDF-1.4 professional".to_vec();
    let api = ScriptedApi::answering(warfarin_aspirin()).then_pdf(Ok(pdf.clone()));
    let mut session = AnalyzerSession::new(api, RecordingSink::default());

    session.analyze("Warfarin", "Aspirin").await;
    session.dispatch(Msg::OpenDownloadModal).await;
    assert!(session.state().show_download_modal);
    session.dispatch(Msg::Download(ReportType::Professional)).await;

    assert_eq!(
        *session.sink().saved.borrow(),
        vec![("DDI_Report_professional_Warfarin_Aspirin.pdf".to_string(), pdf)]
    );
    let calls = session.api().pdf_calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].report_type, ReportType::Professional);
    assert_eq!(calls[0].prediction_data, warfarin_aspirin());

    let state = session.state();
    assert!(!state.show_download_modal);
    assert!(!state.is_downloading);
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn failed_download_leaves_modal_open_for_retry() {
    let api = ScriptedApi::answering(warfarin_aspirin())
        .then_pdf(Err(unavailable(GENERATE_PDF_PATH)))
        .then_pdf(Ok(b"%PDF".to_vec()));
    let mut session = AnalyzerSession::new(api, RecordingSink::default());

    session.analyze("Warfarin", "Aspirin").await;
    session.dispatch(Msg::OpenDownloadModal).await;
    session.dispatch(Msg::Download(ReportType::Patient)).await;

    assert!(session.state().show_download_modal);
    assert_eq!(session.state().result, Some(warfarin_aspirin()));
    assert_eq!(
        session.state().error_message(),
        "Failed to generate PDF report. Please try again."
    );
    assert!(session.sink().saved.borrow().is_empty());

    session.dispatch(Msg::Download(ReportType::Patient)).await;

    assert!(!session.state().show_download_modal);
    assert_eq!(session.sink().saved.borrow().len(), 1);
}

#[tokio::test]
async fn sink_failure_counts_as_download_failure() {
    let api = ScriptedApi::answering(warfarin_aspirin()).then_pdf(Ok(b"%PDF".to_vec()));
    let sink = RecordingSink {
        refuse: true,
        ..Default::default()
    };
    let mut session = AnalyzerSession::new(api, sink);

    session.analyze("Warfarin", "Aspirin").await;
    session.dispatch(Msg::OpenDownloadModal).await;
    session.dispatch(Msg::Download(ReportType::Patient)).await;

    assert_eq!(session.state().error, Some(UiError::DownloadFailed));
    assert!(session.state().show_download_modal);
    assert!(!session.state().is_downloading);
}

#[tokio::test]
async fn download_before_analysis_is_unreachable() {
    let api = ScriptedApi::default().then_pdf(Ok(b"%PDF".to_vec()));
    let mut session = AnalyzerSession::new(api, RecordingSink::default());

    // The modal is the only entry point and it stays closed without a result.
    session.dispatch(Msg::OpenDownloadModal).await;
    session.dispatch(Msg::Download(ReportType::Patient)).await;

    assert!(!session.state().show_download_modal);
    assert!(session.api().pdf_calls.borrow().is_empty());
    assert!(session.sink().saved.borrow().is_empty());
}

#[tokio::test]
async fn tab_switch_never_calls_the_backend() {
    let api = ScriptedApi::answering(warfarin_aspirin());
    let mut session = AnalyzerSession::new(api, RecordingSink::default());
    session.analyze("Warfarin", "Aspirin").await;

    for tab in [
        ReportType::Professional,
        ReportType::Professional,
        ReportType::Patient,
    ] {
        session.dispatch(Msg::SelectTab(tab)).await;
    }

    assert_eq!(session.api().predict_calls.borrow().len(), 1);
    assert!(session.api().pdf_calls.borrow().is_empty());
    assert_eq!(session.state().active_report(), Some("Watch for unusual bruising."));
}
