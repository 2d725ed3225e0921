//! Theme resolution and persistence.
//!
//! DESIGN
//! ======
//! The resolver is the one piece of real state-transition logic in the site:
//! it decides whether the page renders dark or light, keeps that decision
//! durable across loads, and tracks the OS color-scheme signal while the
//! user has not pinned a choice. Browser access lives behind the `ThemeEnv`
//! trait so the transition rules stay testable on the native host.

pub mod resolver;
pub mod web;

pub use resolver::{Theme, ThemeEnv, ThemePreference, ThemeRequest, ThemeResolver, ThemeSource};
pub use web::WebThemeEnv;
