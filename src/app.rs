use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::sections::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Content is fetched by the browser; server renders carry the defaults.
    #[cfg(feature = "hydrate")]
    provide_context(crate::content::ContentLoader::for_window(
        crate::content::ContentSettings::default(),
    ));

    view! {
        <Stylesheet id="leptos" href="/pkg/wellnex.css"/>
        <Title text="Wellnex Systems - Wellness, Reimagined"/>
        <Meta name="description" content="Integrated wellness technology for the next generation"/>

        <Router>
            <Navbar/>
            <main>
                <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                    <Route path=path!("/") view=LandingPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn LandingPage() -> impl IntoView {
    view! {
        <Hero/>
        <About/>
        <AppsShowcase/>
        <Why/>
        <Roadmap/>
        <Testimonials/>
        <Waitlist/>
    }
}
