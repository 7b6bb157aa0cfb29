use leptos::prelude::*;

const BASE_CLASS: &str = "glass-card";

/// Frosted panel around arbitrary content.
///
/// `class` is appended to the base class, `style` is applied inline on
/// top of it, so neither can drop the card look.
#[component]
pub fn GlassCard(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] style: String,
    children: Children,
) -> impl IntoView {
    let style = (!style.is_empty()).then_some(style);

    view! {
        <div class=card_class(&class) style=style>
            {children()}
        </div>
    }
}

fn card_class(extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        BASE_CLASS.to_string()
    } else {
        format!("{BASE_CLASS} {extra}")
    }
}
