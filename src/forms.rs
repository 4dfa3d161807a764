//! Form Validation
//!
//! Local checks run before any request is sent.

use thiserror::Error;

use crate::models::NewActivity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("All fields are required.")]
    MissingFields,
    #[error("Max participants must be a positive number.")]
    InvalidCapacity,
    #[error("Please enter a student email.")]
    MissingEmail,
}

/// Raw contents of the create-activity form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewActivityDraft {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: String,
}

impl NewActivityDraft {
    pub fn validate(&self) -> Result<NewActivity, FormError> {
        let name = self.name.trim();
        let description = self.description.trim();
        let schedule = self.schedule.trim();
        let max = self.max_participants.trim();

        if name.is_empty() || description.is_empty() || schedule.is_empty() || max.is_empty() {
            return Err(FormError::MissingFields);
        }

        let max_participants = match max.parse::<u32>() {
            Ok(n) if n > 0 => n,
            _ => return Err(FormError::InvalidCapacity),
        };

        Ok(NewActivity {
            name: name.to_string(),
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
        })
    }
}

/// Trimmed signup email, rejected when blank
pub fn validate_email(raw: &str) -> Result<String, FormError> {
    let email = raw.trim();
    if email.is_empty() {
        return Err(FormError::MissingEmail);
    }
    Ok(email.to_string())
}
