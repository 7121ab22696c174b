use leptos::prelude::*;

use super::use_section;
use crate::models::TestimonialsContent;

#[component]
pub fn Testimonials() -> impl IntoView {
    let testimonials = use_section::<TestimonialsContent>("testimonials");
    let (index, set_index) = signal(0usize);

    let prev = move |_| set_index.set(testimonials.with(|t| t.prev_index(index.get())));
    let next = move |_| set_index.set(testimonials.with(|t| t.next_index(index.get())));

    view! {
        <section id="testimonials" class="testimonials card">
            <h3 class="eyebrow">"Testimonials"</h3>
            <h2>{move || testimonials.with(|t| t.heading.clone())}</h2>
            <div class="carousel">
                <button class="carousel-btn" on:click=prev>"◀"</button>
                {move || {
                    testimonials.with(|t| t.get(index.get()).cloned()).map(|item| view! {
                        <div class="testimonial">
                            <blockquote>"“"{item.quote}"”"</blockquote>
                            <div class="author">"— "{item.author}</div>
                        </div>
                    })
                }}
                <button class="carousel-btn" on:click=next>"▶"</button>
            </div>
        </section>
    }
}
