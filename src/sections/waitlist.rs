use leptos::prelude::*;

use super::use_section;
use crate::models::WaitlistContent;
use crate::server_fns::JoinWaitlist;
use crate::waitlist::normalize_email;

#[derive(Clone, PartialEq)]
enum Notice {
    Joined,
    Invalid(String),
}

#[component]
pub fn Waitlist() -> impl IntoView {
    let waitlist = use_section::<WaitlistContent>("waitlist");
    let join_action = ServerAction::<JoinWaitlist>::new();
    let (email, set_email) = signal(String::new());
    let (notice, set_notice) = signal(None::<Notice>);

    // The local record is what the visitor sees; the server copy is best effort.
    Effect::new(move |_| {
        if let Some(Err(e)) = join_action.value().get() {
            tracing::warn!(error = %e, "server did not record waitlist sign-up");
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let address = match normalize_email(&email.get_untracked()) {
            Ok(address) => address,
            Err(e) => {
                set_notice.set(Some(Notice::Invalid(e.to_string())));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        if let Err(e) = crate::waitlist::record_locally(&address) {
            tracing::warn!(error = %e, "could not record waitlist sign-up locally");
        }

        join_action.dispatch(JoinWaitlist { email: address });
        set_email.set(String::new());
        set_notice.set(Some(Notice::Joined));
    };

    view! {
        <section id="waitlist" class="waitlist">
            <h3 class="eyebrow">{move || waitlist.with(|w| w.eyebrow.clone())}</h3>
            <h2>{move || waitlist.with(|w| w.title.clone())}</h2>
            <p>{move || waitlist.with(|w| w.description.clone())}</p>

            <form class="waitlist-form" on:submit=on_submit>
                <input
                    type="email"
                    name="email"
                    placeholder=move || waitlist.with(|w| w.placeholder.clone())
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">
                    {move || waitlist.with(|w| w.button.clone())}
                </button>
            </form>

            {move || notice.get().map(|notice| match notice {
                Notice::Joined => view! {
                    <div class="success">{move || waitlist.with(|w| w.success.clone())}</div>
                }.into_any(),
                Notice::Invalid(message) => view! { <div class="error">{message}</div> }.into_any(),
            })}

            <div class="waitlist-links">
                <a href=move || waitlist.with(|w| format!("mailto:{}", w.contact_email))>"Contact Us"</a>
                <a href="#">"Privacy"</a>
            </div>
        </section>
    }
}
