//! Page sections. Each one reads its slice of the content document through
//! [`use_section`] and renders built-in defaults until (or unless) the slice
//! arrives.

mod about;
mod apps;
mod footer;
mod hero;
mod navbar;
mod roadmap;
mod testimonials;
mod waitlist;
mod why;

pub use about::About;
pub use apps::AppsShowcase;
pub use footer::Footer;
pub use hero::Hero;
pub use navbar::Navbar;
pub use roadmap::Roadmap;
pub use testimonials::Testimonials;
pub use waitlist::Waitlist;
pub use why::Why;

use leptos::prelude::*;
use serde::de::DeserializeOwned;

use crate::content::ContentLoader;

/// Load the named section and decode it, falling back to `T::default()` on
/// any failure. Runs in the browser only; server renders show the defaults.
pub fn use_section<T>(name: &'static str) -> Signal<T>
where
    T: DeserializeOwned + Default + Clone + Send + Sync + 'static,
{
    let loader = use_context::<ContentLoader>();
    let content = LocalResource::new(move || {
        let loader = loader.clone();
        async move {
            let Some(loader) = loader else {
                tracing::debug!(section = name, "no content loader provided");
                return T::default();
            };
            match loader.section_as::<T>(name).await {
                Ok(content) => content,
                Err(e) => {
                    tracing::warn!(section = name, error = %e, "using built-in section content");
                    T::default()
                }
            }
        }
    });
    Signal::derive(move || content.get().unwrap_or_default())
}
