//! Three-option theme settings dropdown (Light / Dark / System).

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::theme::{ThemeRequest, ThemeResolver, WebThemeEnv};

const OPTIONS: [(ThemeRequest, &str, &str); 3] = [
    (ThemeRequest::Light, "Light Mode", "Clean and bright interface"),
    (ThemeRequest::Dark, "Dark Mode", "Easy on the eyes"),
    (ThemeRequest::System, "System", "Follow system preference"),
];

#[component]
pub fn ThemeSettings() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeResolver<WebThemeEnv>>>();
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="theme-settings">
            <button
                class="header__icon-button"
                aria-label="Theme settings"
                on:click=move |_| ui.update(UiState::toggle_theme_menu)
            >
                "\u{2699}"
            </button>

            <Show when=move || ui.get().theme_menu_open>
                <div
                    class="theme-settings__backdrop"
                    on:click=move |_| ui.update(UiState::close_menus)
                ></div>
                <div class="theme-settings__menu">
                    <div class="theme-settings__header">
                        <h3>"Theme Settings"</h3>
                        <p>"Choose your preferred theme"</p>
                    </div>
                    {OPTIONS
                        .into_iter()
                        .map(|(request, name, description)| {
                            view! {
                                <button
                                    class="theme-settings__option"
                                    class=(
                                        "theme-settings__option--active",
                                        move || theme.get().current().matches(request),
                                    )
                                    on:click=move |_| {
                                        theme.update(|resolver| {
                                            resolver.set(request);
                                        });
                                        ui.update(UiState::close_menus);
                                    }
                                >
                                    <span class="theme-settings__option-name">{name}</span>
                                    <span class="theme-settings__option-desc">{description}</span>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
