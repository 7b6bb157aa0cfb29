use ddi_core::Page;
use ddi_core::pages::active_page;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let active = Memo::new(move |_| pathname.with(|path| active_page(path)));

    let links = Page::ALL
        .into_iter()
        .map(move |page| {
            let class = move || if active.get() == Some(page) { "active" } else { "" };
            view! {
                <li>
                    <a href=page.path() class=class>
                        {page.nav_label()}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar">
            <div class="navbar-brand">
                <a href="/">"BioGPT-DI"</a>
            </div>
            <ul class="navbar-links">{links}</ul>
        </nav>
    }
}
