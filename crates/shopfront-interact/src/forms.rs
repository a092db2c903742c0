//! Newsletter and contact form handling.
//!
//! Nothing is sent anywhere: submission only validates, flags fields and
//! picks the notification to show.

use std::collections::BTreeSet;

use crate::command::FieldInput;
use crate::notification::ToastKind;

pub const NEWSLETTER_THANKS: &str =
    "Thanks for subscribing! Check your email for your 15% off coupon.";
pub const CONTACT_SENT: &str = "Message sent successfully! We'll get back to you soon.";
pub const CONTACT_INCOMPLETE: &str = "Please fill in all required fields.";

/// Result of a form submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub message: &'static str,
    pub kind: ToastKind,
    /// Whether the form fields should be reset.
    pub reset: bool,
}

/// Names of the required fields left blank.
pub fn missing_required(fields: &[FieldInput]) -> Vec<&str> {
    fields
        .iter()
        .filter(|f| f.required && f.value.trim().is_empty())
        .map(|f| f.name.as_str())
        .collect()
}

/// Newsletter signup. Always succeeds.
pub fn submit_newsletter(_email: &str) -> Submission {
    Submission {
        message: NEWSLETTER_THANKS,
        kind: ToastKind::Success,
        reset: true,
    }
}

/// Contact form state: which fields carry the error border.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    flagged: BTreeSet<String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `field` is flagged as missing.
    pub fn is_flagged(&self, field: &str) -> bool {
        self.flagged.contains(field)
    }

    pub fn flagged(&self) -> impl Iterator<Item = &str> {
        self.flagged.iter().map(String::as_str)
    }

    /// Validate a submission. Every required field is re-evaluated: blank
    /// ones are flagged, filled ones unflagged.
    pub fn submit(&mut self, fields: &[FieldInput]) -> Submission {
        for field in fields.iter().filter(|f| f.required) {
            if field.value.trim().is_empty() {
                self.flagged.insert(field.name.clone());
            } else {
                self.flagged.remove(&field.name);
            }
        }

        if missing_required(fields).is_empty() {
            Submission {
                message: CONTACT_SENT,
                kind: ToastKind::Success,
                reset: true,
            }
        } else {
            Submission {
                message: CONTACT_INCOMPLETE,
                kind: ToastKind::Error,
                reset: false,
            }
        }
    }
}
