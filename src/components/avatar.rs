//! Circular avatar badge rendered from the profile's initials.

#[cfg(test)]
#[path = "avatar_test.rs"]
mod avatar_test;

use leptos::prelude::*;

use crate::content::PROFILE;

/// First letters of up to the first two words of a name.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .collect()
}

#[component]
pub fn Avatar() -> impl IntoView {
    view! {
        <span class="avatar" aria-hidden="true">
            {initials(PROFILE.name)}
        </span>
    }
}
