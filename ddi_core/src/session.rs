//! Effect execution.
//!
//! [`run_effect`] turns an [`Effect`] into the `Msg` that completes it.
//! The web front end calls it from `spawn_local`; [`AnalyzerSession`]
//! runs the same loop inline for headless use.

use tracing::debug;

use crate::analyzer::{AnalyzerState, Effect, Msg, update};
use crate::api::DdiApi;
use crate::error::DownloadError;

/// Destination for a generated report.
///
/// Implementations own any temporary handle they create (object URLs and
/// the like) and must release it before returning, error or not.
pub trait FileSink {
    fn save(&self, file_name: &str, bytes: &[u8]) -> Result<(), DownloadError>;
}

pub async fn run_effect<A, S>(api: &A, sink: &S, effect: Effect) -> Msg
where
    A: DdiApi + ?Sized,
    S: FileSink + ?Sized,
{
    match effect {
        Effect::Predict(request) => Msg::AnalyzeFinished(api.predict(&request).await),
        Effect::GeneratePdf { request, file_name } => {
            let outcome = match api.generate_pdf(&request).await {
                Ok(bytes) => {
                    debug!(%file_name, size = bytes.len(), "PDF received");
                    sink.save(&file_name, &bytes).map(|()| file_name)
                }
                Err(err) => Err(DownloadError::Api(err)),
            };
            Msg::DownloadFinished(outcome)
        }
    }
}

/// Analyzer page without a view: state plus the collaborators that
/// execute its effects.
pub struct AnalyzerSession<A, S> {
    api: A,
    sink: S,
    state: AnalyzerState,
}

impl<A: DdiApi, S: FileSink> AnalyzerSession<A, S> {
    pub fn new(api: A, sink: S) -> Self {
        Self {
            api,
            sink,
            state: AnalyzerState::default(),
        }
    }

    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Apply `msg` and every completion it causes, in order.
    pub async fn dispatch(&mut self, msg: Msg) {
        let mut next = Some(msg);
        while let Some(msg) = next.take() {
            if let Some(effect) = update(&mut self.state, msg) {
                next = Some(run_effect(&self.api, &self.sink, effect).await);
            }
        }
    }

    /// Fill both inputs and press "Analyze Interaction".
    pub async fn analyze(&mut self, drug1: &str, drug2: &str) {
        self.dispatch(Msg::Drug1Changed(drug1.to_string())).await;
        self.dispatch(Msg::Drug2Changed(drug2.to_string())).await;
        self.dispatch(Msg::Analyze).await;
    }
}
