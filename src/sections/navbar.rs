use leptos::prelude::*;

use super::use_section;
use crate::models::NavbarContent;

#[component]
pub fn Navbar() -> impl IntoView {
    let navbar = use_section::<NavbarContent>("navbar");
    let (menu_open, set_menu_open) = signal(false);

    let links = move || {
        navbar.get()
            .links
            .into_iter()
            .map(|link| {
                let href = link.href();
                view! {
                    <a href=href on:click=move |_| set_menu_open.set(false)>{link.label}</a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <a href="#hero">{move || navbar.with(|n| n.logo.clone())}</a>
            </div>

            <div class="nav-links">{links}</div>

            <a href="#waitlist" class="btn btn-small">{move || navbar.with(|n| n.cta.clone())}</a>

            <button
                class="nav-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "✕" } else { "☰" }}
            </button>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">{links}</div>
            </Show>
        </nav>
    }
}
