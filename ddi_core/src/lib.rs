//! Shared core for the BioGPT-DI drug interaction analyzer.
//!
//! Everything here is target-independent: the same code runs inside the
//! Leptos front end (wasm32) and in native tests.
//!
//! ## Architecture
//!
//! - [`types`] - Request/response payloads exchanged with the prediction service
//! - [`severity`] - Total mapping from severity text to a display class
//! - [`analyzer`] - Analyzer page state machine (model + update)
//! - [`session`] - Effect execution and a headless dispatch loop
//! - [`api`] - Backend seam ([`DdiApi`]) and its reqwest implementation
//! - [`pages`] - Registered routes and navbar highlighting
//! - [`config`] - Client configuration
//! - [`error`] - Error taxonomy
//!
//! ## Flow
//!
//! ```rust
//! use ddi_core::analyzer::{update, AnalyzerState, Effect, Msg};
//!
//! let mut state = AnalyzerState::default();
//! update(&mut state, Msg::Drug1Changed("Warfarin".into()));
//! update(&mut state, Msg::Drug2Changed("Aspirin".into()));
//!
//! let effect = update(&mut state, Msg::Analyze);
//! assert!(matches!(effect, Some(Effect::Predict(_))));
//! assert!(state.is_loading);
//! ```

pub mod analyzer;
pub mod api;
pub mod config;
pub mod error;
pub mod pages;
pub mod session;
pub mod severity;
pub mod types;

pub use analyzer::{AnalyzerState, Effect, Msg, update};
pub use api::{DdiApi, HttpApi};
pub use config::ClientConfig;
pub use error::{ApiError, DownloadError, FailureKind, UiError};
pub use pages::Page;
pub use session::{AnalyzerSession, FileSink, run_effect};
pub use severity::Severity;
pub use types::{AnalysisRequest, AnalysisResult, PdfRequest, ReportType};
