use leptos::prelude::*;

use super::use_section;
use crate::models::RoadmapContent;

#[component]
pub fn Roadmap() -> impl IntoView {
    let roadmap = use_section::<RoadmapContent>("roadmap");

    view! {
        <section id="roadmap" class="roadmap card">
            <div class="roadmap-header">
                <div>
                    <h3 class="eyebrow">{move || roadmap.with(|r| r.eyebrow.clone())}</h3>
                    <h2>{move || roadmap.with(|r| r.title.clone())}</h2>
                    <p>{move || roadmap.with(|r| r.description.clone())}</p>
                </div>
                <div class="status">{move || roadmap.with(|r| r.status.clone())}</div>
            </div>
            <div class="roadmap-features">
                {move || {
                    roadmap.get()
                        .features
                        .into_iter()
                        .map(|feature| view! { <span class="pill">{feature}</span> })
                        .collect_view()
                }}
            </div>
            <a href="#waitlist" class="btn btn-primary">{move || roadmap.with(|r| r.cta.clone())}</a>
        </section>
    }
}
