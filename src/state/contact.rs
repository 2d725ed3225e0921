//! Contact form field state and submission lifecycle.
//!
//! ERROR HANDLING
//! ==============
//! Validation returns `&'static str` messages the form surfaces directly.
//! A failed delivery keeps the field values so the user can retry manually;
//! only a confirmed send resets them.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Confirmation notice shown after a successful delivery.
pub const SENT_NOTICE: &str = "Thank you for your message! I will get back to you soon.";

const FIELDS_REQUIRED_MESSAGE: &str = "Please fill in all fields before sending.";

/// The four required input fields, bound to the form in `components::contact`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Trimmed copies of the fields, or a user-facing message when any is
    /// blank. Leaves `self` untouched either way.
    ///
    /// # Errors
    ///
    /// Returns the required-fields message when any field is empty after
    /// trimming.
    pub fn validated(&self) -> Result<Self, &'static str> {
        let trimmed = Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        };
        if trimmed.name.is_empty()
            || trimmed.email.is_empty()
            || trimmed.subject.is_empty()
            || trimmed.message.is_empty()
        {
            return Err(FIELDS_REQUIRED_MESSAGE);
        }
        Ok(trimmed)
    }

    /// Clear all fields after a confirmed send.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Submission lifecycle for the contact form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    /// The notice to display under the form, if any.
    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some("Sending your message..."),
            Self::Sent => Some(SENT_NOTICE),
            Self::Failed(message) => Some(message),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Whether a submission is in flight (submit button disabled).
    #[must_use]
    pub fn is_busy(&self) -> bool {
        *self == Self::Sending
    }
}
