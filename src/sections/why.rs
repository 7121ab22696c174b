use leptos::prelude::*;

use super::use_section;
use crate::models::WhyContent;

#[component]
pub fn Why() -> impl IntoView {
    let why = use_section::<WhyContent>("why");

    view! {
        <section id="why" class="why">
            <h3 class="eyebrow">{move || why.with(|w| w.heading.clone())}</h3>
            <p>{move || why.with(|w| w.intro.clone())}</p>
            <div class="reasons">
                {move || {
                    why.get()
                        .reasons
                        .into_iter()
                        .map(|reason| view! {
                            <div class="reason">
                                <div class="reason-title">{reason.title}</div>
                                <div class="reason-desc">{reason.desc}</div>
                            </div>
                        })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
