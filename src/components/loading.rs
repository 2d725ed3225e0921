//! Startup overlay with an explicit progress bar.
//!
//! The bar is driven by sampling `util::easing::progress_at` against wall
//! time on a fixed-interval ticker, so the animation is a deterministic
//! function of elapsed time rather than of render frames. When progress
//! reaches 1 the `done` signal flips and the app swaps the overlay out.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::content::PROFILE;
use crate::util::easing::progress_at;

/// Total duration of the simulated load.
pub const LOADING_DURATION_MS: f64 = 1600.0;

/// Sampling interval, roughly one display frame.
const TICK_MS: u32 = 16;

#[component]
pub fn LoadingScreen(done: RwSignal<bool>) -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);

    leptos::task::spawn_local(async move {
        let started = js_sys::Date::now();
        loop {
            TimeoutFuture::new(TICK_MS).await;
            let fraction = progress_at(js_sys::Date::now() - started, LOADING_DURATION_MS);
            progress.set(fraction);
            if fraction >= 1.0 {
                break;
            }
        }
        done.set(true);
    });

    view! {
        <div class="loading">
            <p class="loading__name">{PROFILE.name.to_uppercase()}</p>
            <div class="loading__track">
                <div
                    class="loading__bar"
                    style:width=move || format!("{:.0}%", progress.get() * 100.0)
                ></div>
            </div>
            <p class="loading__percent">
                {move || format!("{:.0}%", progress.get() * 100.0)}
            </p>
        </div>
    }
}
