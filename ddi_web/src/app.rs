// Composition root: background, navbar, routed page
use crate::components::Navbar;
use crate::pages::{AboutGroupPage, AboutProjectPage, AnalyzerPage, HomePage};
use ddi_core::ClientConfig;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App(config: ClientConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <div class="App">
                <div class="background-gradient"></div>
                <Navbar />
                <main class="content">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                        <Route path=path!("/analyzer") view=AnalyzerPage />
                        <Route path=path!("/about-project") view=AboutProjectPage />
                        <Route path=path!("/about-group") view=AboutGroupPage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="home-container">
            <h2>"Page not found"</h2>
            <a href="/" class="cta-button">"Back to Home"</a>
        </div>
    }
}
