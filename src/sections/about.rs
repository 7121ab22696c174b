use leptos::prelude::*;

use super::use_section;
use crate::models::AboutContent;

#[component]
pub fn About() -> impl IntoView {
    let about = use_section::<AboutContent>("about");

    view! {
        <section id="about" class="about">
            <h2>{move || about.with(|a| a.title.clone())}</h2>
            <p class="description">{move || about.with(|a| a.body.clone())}</p>
            <div class="tagline">{move || about.with(|a| a.tagline.clone())}</div>
        </section>
    }
}
