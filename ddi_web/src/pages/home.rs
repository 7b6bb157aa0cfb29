// Home page - headline + call to action
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-container">
            <h1 class="home-title">"AI-Powered Drug Interaction Analysis"</h1>
            <p class="home-subtitle">
                "Leveraging state-of-the-art biomedical language models to provide accurate DDI "
                "predictions and generate clear, explainable clinical reports for both professionals "
                "and patients."
            </p>
            <a href="/analyzer" class="cta-button">
                "Start Analyzing"
            </a>
        </div>
    }
}
