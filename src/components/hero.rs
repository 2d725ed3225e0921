//! Landing section with name, role and calls to action.

use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::scroll::scroll_to_section;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <p class="hero__greeting">"Hi, I'm"</p>
                <h1 class="hero__name">{PROFILE.name}</h1>
                <h2 class="hero__role">{PROFILE.role}</h2>
                <p class="hero__tagline">{PROFILE.tagline}</p>
                <div class="hero__actions">
                    <button
                        class="button button--primary"
                        on:click=move |_| scroll_to_section("projects")
                    >
                        "View My Work"
                    </button>
                    <button
                        class="button button--ghost"
                        on:click=move |_| scroll_to_section("contact")
                    >
                        "Get In Touch"
                    </button>
                </div>
            </div>
        </section>
    }
}
