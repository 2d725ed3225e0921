//! Root application component: contexts, OS scheme subscription, loading
//! gate, and section layout.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::about::About;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::loading::LoadingScreen;
use crate::components::projects::Projects;
use crate::components::skills::Skills;
use crate::state::ui::UiState;
use crate::theme::{ThemeResolver, WebThemeEnv, web};

/// Root component.
///
/// Owns the theme resolver and UI chrome state, provides both via context,
/// and keeps the `prefers-color-scheme` subscription alive for exactly the
/// component's lifetime (`watch` here, `unwatch` in `on_cleanup`).
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemeResolver::initialize(WebThemeEnv));
    let ui = RwSignal::new(UiState::default());
    provide_context(theme);
    provide_context(ui);

    web::watch_system_scheme(move |scheme| {
        theme.update(|resolver| {
            resolver.system_changed(scheme);
        });
    });
    on_cleanup(web::unwatch_system_scheme);

    let ready = RwSignal::new(false);

    view! {
        <Title text="Sourov Dash | Portfolio"/>
        <Show
            when=move || ready.get()
            fallback=move || view! { <LoadingScreen done=ready/> }
        >
            <Header/>
            <main class="page">
                <Hero/>
                <About/>
                <Skills/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </Show>
    }
}
