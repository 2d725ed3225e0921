//! Categorized skill lists.

use leptos::prelude::*;

use crate::content::SKILL_GROUPS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="section skills" id="skills">
            <h2 class="section__title">"Skills"</h2>
            <div class="skills__grid">
                {SKILL_GROUPS
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="skills__group">
                                <h3 class="skills__group-title">{group.title}</h3>
                                <ul class="skills__list">
                                    {group
                                        .skills
                                        .iter()
                                        .map(|skill| view! { <li class="skills__item">{*skill}</li> })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
