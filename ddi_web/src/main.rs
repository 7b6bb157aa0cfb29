// BioGPT-DI web client - Leptos 0.8 CSR

mod app;
mod browser;
mod components;
mod logging;
mod pages;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = browser::load_config();
    logging::init(&config.log_level);
    tracing::info!(base_url = %config.base_url, "BioGPT-DI client starting");

    leptos::mount::mount_to_body(move || view! { <App config=config.clone() /> });
}
