//! Contact-form submissions as they sit in the admin inbox.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;
use crate::types::{MessageId, MessageStatus};

/// A single inbox entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Submission day, persisted as `YYYY-MM-DD`.
    pub date: NaiveDate,
    pub status: MessageStatus,
}

impl Message {
    /// Turn a form submission into a fresh, unread entry.
    pub fn from_submission(input: NewMessage, date: NaiveDate) -> Self {
        Self {
            id: MessageId::new(),
            name: input.name,
            email: input.email,
            subject: input.subject,
            message: input.message,
            date,
            status: MessageStatus::Unread,
        }
    }

    pub fn is_unread(&self) -> bool {
        self.status == MessageStatus::Unread
    }

    /// Whether `needle` (already lowercased) occurs in the name, subject or
    /// email address.
    pub fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.subject.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
    }
}

/// What the public contact form sends.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl NewMessage {
    /// Check the submission the way the form does before sending: every
    /// field is required and the address needs a local part and a domain.
    pub fn validate(&self) -> Result<(), SubmissionError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SubmissionError::Missing(field));
            }
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(SubmissionError::InvalidEmail(self.email.clone())),
        }
    }
}
