//! Browser-backed theme environment and the OS scheme subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module owns every web-sys touch point of the theme system: the
//! localStorage entry, the `prefers-color-scheme` media query, the
//! `data-theme` attribute on `<html>`, and the `theme-color` meta hint for
//! mobile browser chrome. Everything is best-effort; a missing window,
//! blocked storage or unsupported media query degrades to `None`/no-op.

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use super::resolver::{Theme, ThemeEnv};

/// Fixed storage key; the value is the literal `"dark"` or `"light"`.
pub const STORAGE_KEY: &str = "portfolio-theme";

const SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Mobile browser chrome hint colors, matching the page backgrounds.
const DARK_CHROME_COLOR: &str = "#0a0a0f";
const LIGHT_CHROME_COLOR: &str = "#f3f4f6";

/// [`ThemeEnv`] over localStorage, matchMedia and the document root.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebThemeEnv;

impl ThemeEnv for WebThemeEnv {
    fn load(&self) -> Option<Theme> {
        let raw = local_storage()?.get_item(STORAGE_KEY).ok().flatten()?;
        Theme::from_storage_str(&raw)
    }

    fn store(&self, theme: Theme) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(STORAGE_KEY, theme.as_storage_str());
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(STORAGE_KEY);
        }
    }

    fn system_theme(&self) -> Option<Theme> {
        let query = web_sys::window()?.match_media(SCHEME_QUERY).ok().flatten()?;
        Some(if query.matches() { Theme::Dark } else { Theme::Light })
    }

    fn apply(&self, theme: Theme) {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            return;
        };
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_storage_str());
        }
        let color = if theme.is_dark() { DARK_CHROME_COLOR } else { LIGHT_CHROME_COLOR };
        set_chrome_color(&document, color);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Update the `theme-color` meta tag, creating it when the document ships
/// without one.
fn set_chrome_color(document: &web_sys::Document, color: &str) {
    if let Ok(Some(meta)) = document.query_selector("meta[name='theme-color']") {
        let _ = meta.set_attribute("content", color);
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(meta) = document.create_element("meta") else {
        return;
    };
    let _ = meta.set_attribute("name", "theme-color");
    let _ = meta.set_attribute("content", color);
    let _ = head.append_child(&meta);
}

type SchemeClosure = Closure<dyn FnMut(web_sys::MediaQueryListEvent)>;

thread_local! {
    static SCHEME_WATCHER: RefCell<Option<(web_sys::MediaQueryList, SchemeClosure)>> =
        const { RefCell::new(None) };
}

/// Install the `prefers-color-scheme` change listener, replacing any
/// existing one. Pair with [`unwatch_system_scheme`] on teardown.
pub fn watch_system_scheme(mut on_change: impl FnMut(Theme) + 'static) {
    unwatch_system_scheme();

    let Some(query) = web_sys::window().and_then(|w| w.match_media(SCHEME_QUERY).ok().flatten())
    else {
        log::warn!("prefers-color-scheme is unavailable; theme will not track the OS");
        return;
    };
    let closure: SchemeClosure = Closure::new(move |event: web_sys::MediaQueryListEvent| {
        on_change(if event.matches() { Theme::Dark } else { Theme::Light });
    });
    if query
        .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())
        .is_ok()
    {
        SCHEME_WATCHER.with(|slot| *slot.borrow_mut() = Some((query, closure)));
    }
}

/// Remove the installed listener, if any. Idempotent.
pub fn unwatch_system_scheme() {
    SCHEME_WATCHER.with(|slot| {
        if let Some((query, closure)) = slot.borrow_mut().take() {
            let _ = query
                .remove_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        }
    });
}
