// Analyzer page - the only stateful page; drives ddi_core's state machine
use crate::browser::BrowserDownload;
use crate::components::GlassCard;
use ddi_core::{AnalyzerState, ClientConfig, HttpApi, Msg, ReportType, run_effect, update};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Feeds messages into the page state and runs the resulting effects.
///
/// A completion that lands after the page was unmounted finds the signal
/// disposed and is dropped.
#[derive(Clone, Copy)]
struct Dispatcher {
    state: RwSignal<AnalyzerState>,
    api: StoredValue<HttpApi, LocalStorage>,
}

impl Dispatcher {
    fn send(self, msg: Msg) {
        let Some(effect) = self.state.try_update(|state| update(state, msg)).flatten() else {
            return;
        };
        // Cheap handle clone; the reqwest client is shared.
        let Some(api) = self.api.try_get_value() else {
            return;
        };

        spawn_local(async move {
            let next = run_effect(&api, &BrowserDownload, effect).await;
            self.send(next);
        });
    }
}

#[component]
pub fn AnalyzerPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let state = RwSignal::new(AnalyzerState::default());
    let dispatch = Dispatcher {
        state,
        api: StoredValue::new_local(HttpApi::new(config)),
    };

    view! {
        <div class="analyzer-container">
            <h2>"Drug Interaction Analyzer"</h2>
            <p class="page-subtitle">"Enter two drugs to analyze their potential interaction."</p>

            <GlassCard style="max-width: 600px; margin: auto;">
                <div class="input-form">
                    <input
                        type="text"
                        placeholder="Enter Drug 1 (e.g., Warfarin)"
                        prop:value=move || state.with(|s| s.drug1.clone())
                        on:input=move |ev| dispatch.send(Msg::Drug1Changed(event_target_value(&ev)))
                    />
                    <input
                        type="text"
                        placeholder="Enter Drug 2 (e.g., Aspirin)"
                        prop:value=move || state.with(|s| s.drug2.clone())
                        on:input=move |ev| dispatch.send(Msg::Drug2Changed(event_target_value(&ev)))
                    />
                    <button
                        on:click=move |_| dispatch.send(Msg::Analyze)
                        disabled=move || state.with(|s| s.is_loading)
                    >
                        {move || state.with(|s| s.analyze_label())}
                    </button>
                </div>
                <Show when=move || state.with(|s| s.error.is_some())>
                    <p class="error-message">{move || state.with(|s| s.error_message())}</p>
                </Show>
            </GlassCard>

            <Show when=move || state.with(|s| s.is_loading)>
                <div class="loader-container">
                    <div class="loader"></div>
                    <p>"Analyzing drug interaction..."</p>
                </div>
            </Show>

            <Show when=move || state.with(|s| s.result.is_some())>
                <ResultCard state=state dispatch=dispatch />
                <Show when=move || state.with(|s| s.show_download_modal)>
                    <DownloadModal state=state dispatch=dispatch />
                </Show>
            </Show>
        </div>
    }
}

#[component]
fn ResultCard(state: RwSignal<AnalyzerState>, dispatch: Dispatcher) -> impl IntoView {
    let badge_class = move || {
        let severity = state.with(|s| s.severity().unwrap_or_default());
        format!("severity-badge {}", severity.css_class())
    };
    let severity_text = move || {
        state.with(|s| {
            s.result
                .as_ref()
                .map(|r| r.severity_text().to_string())
                .unwrap_or_default()
        })
    };
    let prediction = move || {
        state.with(|s| {
            s.result
                .as_ref()
                .map(|r| r.prediction().to_string())
                .unwrap_or_default()
        })
    };

    let tabs = ReportType::ALL
        .into_iter()
        .map(move |tab| {
            let class = move || {
                if state.with(|s| s.active_tab == tab) {
                    "tab-button active"
                } else {
                    "tab-button"
                }
            };
            view! {
                <button class=class on:click=move |_| dispatch.send(Msg::SelectTab(tab))>
                    {tab.tab_label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <GlassCard style="max-width: 800px; margin: 2rem auto; text-align: left;">
            <div class="result-header-container">
                <h3>"Analysis Report"</h3>
                <button class="download-btn" on:click=move |_| dispatch.send(Msg::OpenDownloadModal)>
                    "📥 Download Detailed Report"
                </button>
            </div>

            <div class="result-header">
                <span class=badge_class>{severity_text}</span>
                <span class="prediction-type">
                    "Interaction Type: " <strong>{prediction}</strong>
                </span>
            </div>

            <div class="tabs">{tabs}</div>

            <div class="tab-content">
                <h4>{move || state.with(|s| s.active_tab.heading())}</h4>
                <p class="report-text">
                    {move || state.with(|s| s.active_report().unwrap_or_default().to_string())}
                </p>
            </div>
        </GlassCard>
    }
}

#[component]
fn DownloadModal(state: RwSignal<AnalyzerState>, dispatch: Dispatcher) -> impl IntoView {
    let downloading = move || state.with(|s| s.is_downloading);

    let options = ReportType::ALL
        .into_iter()
        .map(move |report_type| {
            let (title, blurb, button_class) = option_copy(report_type);
            view! {
                <div class="download-option">
                    <h4>{title}</h4>
                    <p>{blurb}</p>
                    <button
                        class=button_class
                        on:click=move |_| dispatch.send(Msg::Download(report_type))
                        disabled=downloading
                    >
                        {move || state.with(|s| s.download_label(report_type))}
                    </button>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="modal-overlay" on:click=move |_| dispatch.send(Msg::CloseDownloadModal)>
            <div class="modal-shell" on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()>
                <GlassCard class="modal-content" style="max-width: 500px;">
                    <h3>"Download Detailed Report"</h3>
                    <p style="margin-bottom: 1.5rem;">
                        "Choose the type of detailed PDF report you'd like to download:"
                    </p>
                    <div class="download-options">{options}</div>
                    <button
                        class="close-modal-btn"
                        on:click=move |_| dispatch.send(Msg::CloseDownloadModal)
                        disabled=downloading
                    >
                        "Cancel"
                    </button>
                </GlassCard>
            </div>
        </div>
    }
}

fn option_copy(report_type: ReportType) -> (&'static str, &'static str, &'static str) {
    match report_type {
        ReportType::Patient => (
            "👤 Patient Report",
            "Easy-to-understand explanation with practical guidance for patients and caregivers. \
             Includes what to watch for and questions to ask your doctor.",
            "download-option-btn patient-btn",
        ),
        ReportType::Professional => (
            "⚕️ Professional Report",
            "Comprehensive clinical analysis with pharmacological mechanisms, monitoring \
             parameters, and evidence-based management strategies.",
            "download-option-btn professional-btn",
        ),
    }
}
