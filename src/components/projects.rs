//! Project gallery cards.

use leptos::prelude::*;

use crate::content::{PROJECT_TAG_LIMIT, PROJECTS};

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section class="section projects" id="projects">
            <h2 class="section__title">"Projects"</h2>
            <div class="projects__grid">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        view! {
                            <article class="project-card">
                                <p class="project-card__category">{project.category}</p>
                                <h3 class="project-card__title">{project.title}</h3>
                                <p class="project-card__description">{project.description}</p>
                                <ul class="project-card__tags">
                                    {project
                                        .technologies
                                        .iter()
                                        .take(PROJECT_TAG_LIMIT)
                                        .map(|tech| view! { <li class="project-card__tag">{*tech}</li> })
                                        .collect_view()}
                                </ul>
                                <a
                                    class="project-card__link"
                                    href=project.live_url
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    "Live Demo \u{2197}"
                                </a>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
