use leptos::prelude::*;

use super::use_section;
use crate::models::{AppCard, AppsContent};

#[component]
pub fn AppsShowcase() -> impl IntoView {
    let apps = use_section::<AppsContent>("apps");

    view! {
        <section id="apps" class="apps">
            {move || apps.get().apps.into_iter().map(|app| view! { <AppCardView app/> }).collect_view()}
        </section>
    }
}

#[component]
fn AppCardView(app: AppCard) -> impl IntoView {
    view! {
        <div class="app-card">
            <div class="app-subtitle">{app.subtitle}</div>
            <h3>{app.title}</h3>
            <ul class="app-features">
                {app.features
                    .into_iter()
                    .map(|feature| view! { <li><span class="check">"✓"</span>{feature}</li> })
                    .collect_view()}
            </ul>
            <button class="btn btn-primary">{app.cta}</button>
        </div>
    }
}
