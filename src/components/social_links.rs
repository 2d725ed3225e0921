//! External profile links, shared by the contact section and footer.

use leptos::prelude::*;

use crate::content::SOCIAL_LINKS;

#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <div class="social-links">
            {SOCIAL_LINKS
                .iter()
                .map(|link| {
                    view! {
                        <a
                            class="social-links__item"
                            href=link.href
                            target="_blank"
                            rel="noopener noreferrer"
                            aria-label=format!("Visit {}'s {} profile", crate::content::PROFILE.name, link.label)
                        >
                            {link.label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
