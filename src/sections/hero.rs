use leptos::prelude::*;

use super::use_section;
use crate::models::HeroContent;

#[component]
pub fn Hero() -> impl IntoView {
    let hero = use_section::<HeroContent>("hero");

    view! {
        <section id="hero" class="hero">
            <h1 class="hero-title">{move || hero.with(|h| h.title.clone())}</h1>
            <p class="hero-subtitle">
                <span class="highlight">{move || hero.with(|h| h.highlight.clone())}</span>
                " "
                {move || hero.with(|h| h.subtitle.clone())}
            </p>
            <div class="cta-buttons">
                <a href="#waitlist" class="btn btn-primary">{move || hero.with(|h| h.primary_cta.clone())}</a>
                <a href="#apps" class="btn btn-secondary">{move || hero.with(|h| h.secondary_cta.clone())}</a>
            </div>
        </section>
    }
}
