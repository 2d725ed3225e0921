//! Presentational component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section renders pure from the records in `content` plus the shared
//! theme/UI signals read from Leptos context providers.

pub mod about;
pub mod avatar;
pub mod contact;
pub mod footer;
pub mod header;
pub mod hero;
pub mod loading;
pub mod projects;
pub mod skills;
pub mod social_links;
pub mod theme_settings;
