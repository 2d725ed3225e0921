//! EmailJS delivery client for the contact form.
//!
//! ERROR HANDLING
//! ==============
//! Configuration problems are caught before any network attempt and
//! surfaced verbatim. Delivery failures map the relay's status code to one
//! of four user-facing messages; there is no retry and no queueing, the
//! caller keeps the form state for a manual retry.

#[cfg(test)]
#[path = "emailjs_test.rs"]
mod emailjs_test;

use serde::Serialize;

use crate::state::contact::ContactForm;

/// EmailJS REST endpoint for template sends.
pub const EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

const CONFIG_MISSING_MESSAGE: &str =
    "Email delivery is not configured. Set EMAILJS_SERVICE_ID, EMAILJS_TEMPLATE_ID and EMAILJS_PUBLIC_KEY at build time.";
const CONFIG_PLACEHOLDER_MESSAGE: &str =
    "Email delivery configuration still contains placeholder values.";

/// The three values addressing the relay, read from the build environment.
#[derive(Clone, Copy, Debug)]
pub struct EmailConfig {
    pub service_id: &'static str,
    pub template_id: &'static str,
    pub public_key: &'static str,
}

impl EmailConfig {
    /// Read the configuration baked in at compile time. Missing variables
    /// become empty strings and fail [`EmailConfig::validate`].
    #[must_use]
    pub fn from_build_env() -> Self {
        Self {
            service_id: option_env!("EMAILJS_SERVICE_ID").unwrap_or(""),
            template_id: option_env!("EMAILJS_TEMPLATE_ID").unwrap_or(""),
            public_key: option_env!("EMAILJS_PUBLIC_KEY").unwrap_or(""),
        }
    }

    /// Check the configuration before any network attempt.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when any value is missing or still a
    /// `YOUR_...` placeholder from setup instructions.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.service_id.is_empty() || self.template_id.is_empty() || self.public_key.is_empty()
        {
            return Err(CONFIG_MISSING_MESSAGE);
        }
        if is_placeholder(self.service_id)
            || is_placeholder(self.template_id)
            || is_placeholder(self.public_key)
        {
            return Err(CONFIG_PLACEHOLDER_MESSAGE);
        }
        Ok(())
    }
}

fn is_placeholder(value: &str) -> bool {
    value.contains("YOUR_")
}

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

/// Parameters substituted into the EmailJS template.
#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    name: &'a str,
    email: &'a str,
    subject: &'a str,
    message: &'a str,
    time: &'a str,
}

/// Map a delivery status code to its user-facing explanation.
#[must_use]
pub fn delivery_error_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid template ID or service configuration.",
        401 | 403 => "Invalid public key or unauthorized access.",
        404 => "Template or service not found.",
        _ => "Please try again or contact me directly via email.",
    }
}

/// Compose the notice shown when a delivery attempt fails.
#[must_use]
pub fn failure_notice(detail: &str) -> String {
    format!("Failed to send message. {detail}")
}

/// Send the four form fields plus a formatted timestamp through the relay.
///
/// # Errors
///
/// Returns the status-specific explanation from [`delivery_error_message`];
/// transport errors (no response at all) use the generic message.
pub async fn send_contact_email(
    config: &EmailConfig,
    form: &ContactForm,
    time: &str,
) -> Result<(), String> {
    let payload = SendRequest {
        service_id: config.service_id,
        template_id: config.template_id,
        user_id: config.public_key,
        template_params: TemplateParams {
            name: &form.name,
            email: &form.email,
            subject: &form.subject,
            message: &form.message,
            time,
        },
    };

    let request = gloo_net::http::Request::post(EMAILJS_ENDPOINT)
        .json(&payload)
        .map_err(|e| {
            log::warn!("contact payload encoding failed: {e}");
            delivery_error_message(0).to_owned()
        })?;
    let response = request.send().await.map_err(|e| {
        log::warn!("contact delivery request failed: {e}");
        delivery_error_message(0).to_owned()
    })?;

    if response.ok() {
        Ok(())
    } else {
        log::warn!("contact delivery rejected with status {}", response.status());
        Err(delivery_error_message(response.status()).to_owned())
    }
}
