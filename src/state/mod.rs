//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`ui` chrome, `contact` form) so components
//! depend on small focused models provided via Leptos context.

pub mod contact;
pub mod ui;
