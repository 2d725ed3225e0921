//! Outbound network modules.
//!
//! The site has exactly one remote collaborator: the EmailJS relay that
//! turns contact-form submissions into email.

pub mod emailjs;
