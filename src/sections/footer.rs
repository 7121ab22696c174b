use leptos::prelude::*;

use super::use_section;
use crate::models::FooterContent;

#[component]
pub fn Footer() -> impl IntoView {
    let footer = use_section::<FooterContent>("footer");

    view! {
        <footer class="site-footer">
            <div>
                <div class="brand">{move || footer.with(|f| f.brand.clone())}</div>
                <div class="tagline">{move || footer.with(|f| f.tagline.clone())}</div>
            </div>
            <div class="contact">
                <div>{move || footer.with(|f| f.email.clone())}</div>
                <div>{move || footer.with(|f| f.website.clone())}</div>
            </div>
            <div class="copyright">{move || footer.with(|f| f.copyright.clone())}</div>
        </footer>
    }
}
