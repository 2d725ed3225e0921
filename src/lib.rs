//! # portfolio
//!
//! Leptos + WASM single-page portfolio site: biographical sections, a
//! project gallery and a contact form, with persistent light/dark theming.
//!
//! The crate is client-side rendered and built with `trunk`; there is no
//! server component. The one piece of real logic, theme resolution, lives
//! in [`theme`] behind an injectable environment so it unit-tests on the
//! native host.

pub mod app;
pub mod components;
pub mod content;
pub mod net;
pub mod state;
pub mod theme;
pub mod util;
