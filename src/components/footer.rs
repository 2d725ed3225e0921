//! Page footer with social links, location and back-to-top.

use leptos::prelude::*;

use crate::components::social_links::SocialLinks;
use crate::content::PROFILE;
use crate::util::scroll::scroll_to_top;

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__social">
                    <span class="footer__label">"Follow me:"</span>
                    <SocialLinks/>
                </div>
                <p class="footer__location">{PROFILE.location}</p>
                <p class="footer__credit">
                    {format!("\u{a9} {year} {} \u{b7} Built with Leptos", PROFILE.name)}
                </p>
                <button class="footer__top" on:click=move |_| scroll_to_top()>
                    "Back to top \u{2191}"
                </button>
            </div>
        </footer>
    }
}
