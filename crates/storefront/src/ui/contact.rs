//! Contact form state and validation.

use majik_bloom_core::Email;
use thiserror::Error;

/// Acknowledgement text shown after a successful submission.
pub const SUBMIT_MESSAGE: &str = "Thank you for your message! We will get back to you soon.";

/// Validation failures, with the user-facing message as the display text.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// A validated, submitted contact message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: Email,
    pub message: String,
}

/// The contact form's field state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    /// Create an empty form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A form pre-filled with the given field values.
    #[must_use]
    pub fn with_fields(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Validate without submitting.
    ///
    /// # Errors
    ///
    /// Returns `MissingFields` if any field is empty, then `InvalidEmail`
    /// if the email address does not have a valid structure.
    pub fn validate(&self) -> Result<(), ContactFormError> {
        if self.name.is_empty() || self.email.is_empty() || self.message.is_empty() {
            return Err(ContactFormError::MissingFields);
        }

        if Email::parse(&self.email).is_err() {
            return Err(ContactFormError::InvalidEmail);
        }

        Ok(())
    }

    /// Validate and submit, resetting the form on success.
    ///
    /// # Errors
    ///
    /// Same as [`Self::validate`]; the field values are kept on failure.
    pub fn submit(&mut self) -> Result<ContactSubmission, ContactFormError> {
        self.validate()?;

        let email = Email::parse(&self.email).map_err(|_| ContactFormError::InvalidEmail)?;
        let submission = ContactSubmission {
            name: std::mem::take(&mut self.name),
            email,
            message: std::mem::take(&mut self.message),
        };
        self.email.clear();

        Ok(submission)
    }
}
