//! Biography section.

use leptos::prelude::*;

use crate::content::{ABOUT_PARAGRAPHS, PROFILE};

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section class="section about" id="about">
            <h2 class="section__title">"About Me"</h2>
            <div class="about__body">
                <div class="about__text">
                    {ABOUT_PARAGRAPHS
                        .iter()
                        .map(|paragraph| view! { <p class="about__paragraph">{*paragraph}</p> })
                        .collect_view()}
                </div>
                <dl class="about__facts">
                    <div class="about__fact">
                        <dt>"Name"</dt>
                        <dd>{PROFILE.name}</dd>
                    </div>
                    <div class="about__fact">
                        <dt>"Location"</dt>
                        <dd>{PROFILE.location}</dd>
                    </div>
                    <div class="about__fact">
                        <dt>"Email"</dt>
                        <dd>{PROFILE.email}</dd>
                    </div>
                    <div class="about__fact">
                        <dt>"Focus"</dt>
                        <dd>{PROFILE.role}</dd>
                    </div>
                </dl>
            </div>
        </section>
    }
}
