//! Payloads exchanged with the prediction service.
//!
//! `AnalysisResult` is deliberately loose: the backend owns its shape, so
//! the client keeps the object as received and sends the same object back
//! as `prediction_data` when a PDF is requested.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of `POST /api/predict`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub drug1: String,
    pub drug2: String,
}

impl AnalysisRequest {
    pub fn new(drug1: impl Into<String>, drug2: impl Into<String>) -> Self {
        Self {
            drug1: drug1.into(),
            drug2: drug2.into(),
        }
    }

    /// Both names present. Whitespace counts as content.
    pub fn is_complete(&self) -> bool {
        !self.drug1.is_empty() && !self.drug2.is_empty()
    }
}

/// Response of `POST /api/predict`.
///
/// Stored as the raw JSON object. Accessors read the fields the page
/// renders; a missing, `null` or non-string field reads as empty. The map
/// serializes back unchanged as `prediction_data`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult(Map<String, Value>);

impl AnalysisResult {
    /// Set one field, replacing any previous value.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Expected "Major" / "Moderate" / "Minor"; anything else is unknown.
    pub fn severity(&self) -> Option<&str> {
        self.text("severity")
    }

    /// Raw severity text as the backend sent it, empty when absent.
    pub fn severity_text(&self) -> &str {
        self.severity().unwrap_or_default()
    }

    /// Interaction type label (e.g. "MECHANISM", "EFFECT").
    pub fn prediction(&self) -> &str {
        self.text("prediction").unwrap_or_default()
    }

    pub fn patient_report(&self) -> &str {
        self.text("patient_report").unwrap_or_default()
    }

    pub fn professional_report(&self) -> &str {
        self.text("professional_report").unwrap_or_default()
    }

    /// Report text shown under the given tab.
    pub fn report(&self, report_type: ReportType) -> &str {
        match report_type {
            ReportType::Patient => self.patient_report(),
            ReportType::Professional => self.professional_report(),
        }
    }
}

impl From<Map<String, Value>> for AnalysisResult {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

/// Audience of a report. Doubles as the tab selector on the analyzer page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportType {
    #[default]
    Patient,
    Professional,
}

impl ReportType {
    pub const ALL: [ReportType; 2] = [ReportType::Patient, ReportType::Professional];

    /// Wire value, also used in download file names.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportType::Patient => "patient",
            ReportType::Professional => "professional",
        }
    }

    pub fn tab_label(&self) -> &'static str {
        match self {
            ReportType::Patient => "Patient Summary",
            ReportType::Professional => "Professional Details",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            ReportType::Patient => "Summary for Patients",
            ReportType::Professional => "Summary for Healthcare Professionals",
        }
    }

    pub fn download_label(&self) -> &'static str {
        match self {
            ReportType::Patient => "Download Patient Report",
            ReportType::Professional => "Download Professional Report",
        }
    }
}

impl std::fmt::Display for ReportType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/generate-pdf`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PdfRequest {
    pub drug1: String,
    pub drug2: String,
    pub report_type: ReportType,
    pub prediction_data: AnalysisResult,
}

/// File name offered for a downloaded report.
///
/// Drug names are used as typed; no sanitization.
pub fn report_file_name(report_type: ReportType, drug1: &str, drug2: &str) -> String {
    format!("DDI_Report_{}_{}_{}.pdf", report_type.as_str(), drug1, drug2)
}
