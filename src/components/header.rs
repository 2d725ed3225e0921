//! Fixed top navigation bar.
//!
//! Desktop shows inline section links; narrow viewports collapse them into
//! a toggled menu. The theme toggle flips dark/light directly; the gear
//! opens the three-option settings dropdown.

use leptos::prelude::*;

use crate::components::avatar::Avatar;
use crate::components::theme_settings::ThemeSettings;
use crate::content::{NAV_SECTIONS, PROFILE};
use crate::state::ui::UiState;
use crate::theme::{ThemeResolver, WebThemeEnv};
use crate::util::scroll::{scroll_to_section, scroll_to_top};

#[component]
pub fn Header() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeResolver<WebThemeEnv>>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let is_dark = move || theme.get().is_dark();
    let on_toggle_theme = move |_| {
        theme.update(|resolver| {
            resolver.toggle();
        });
    };
    let on_brand = move |_| {
        ui.update(UiState::close_menus);
        scroll_to_top();
    };

    view! {
        <nav class="header">
            <div class="header__inner">
                <button class="header__brand" on:click=on_brand>
                    <Avatar/>
                    <span class="header__name">{PROFILE.name.to_uppercase()}</span>
                </button>

                <div class="header__links">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="header__link"
                                    on:click=move |_| {
                                        ui.update(UiState::close_menus);
                                        scroll_to_section(section);
                                    }
                                >
                                    {section}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="header__actions">
                    <button
                        class="header__icon-button"
                        aria-label=move || {
                            if is_dark() { "Switch to light mode" } else { "Switch to dark mode" }
                        }
                        on:click=on_toggle_theme
                    >
                        {move || if is_dark() { "\u{2600}" } else { "\u{263e}" }}
                    </button>
                    <ThemeSettings/>
                    <button
                        class="header__icon-button header__menu-button"
                        aria-label="Toggle navigation menu"
                        on:click=move |_| ui.update(UiState::toggle_mobile_menu)
                    >
                        "\u{2630}"
                    </button>
                </div>
            </div>

            <Show when=move || ui.get().mobile_menu_open>
                <div class="header__backdrop" on:click=move |_| ui.update(UiState::close_menus)></div>
                <div class="header__mobile-menu">
                    {NAV_SECTIONS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    class="header__mobile-link"
                                    on:click=move |_| {
                                        ui.update(UiState::close_menus);
                                        scroll_to_section(section);
                                    }
                                >
                                    {section}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
