use tracing::debug;

use super::contact::{split_address, suggest_email_correction, EmailSuggestion};
use super::domain::{AdopterProfile, ApplicationSubmission};

/// Validation errors raised before an application is scored.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    #[error("adopter e-mail is required")]
    MissingEmail,
    #[error("adopter e-mail '{email}' is not a valid address")]
    InvalidEmail { email: String },
}

/// Guard responsible for producing `AdopterProfile` instances.
#[derive(Debug, Clone, Default)]
pub struct IntakeGuard;

impl IntakeGuard {
    pub fn new() -> Self {
        Self
    }

    /// Validate the contact address and strip form keys the rubric does not know.
    ///
    /// A likely provider typo does not reject the submission; it is returned so the
    /// caller can ask the adopter to confirm.
    pub fn profile_from_submission(
        &self,
        submission: ApplicationSubmission,
    ) -> Result<(AdopterProfile, Option<EmailSuggestion>), IntakeError> {
        let ApplicationSubmission {
            adopter_email,
            animal,
            mut answers,
        } = submission;

        let adopter_email = adopter_email.trim().to_string();
        if adopter_email.is_empty() {
            return Err(IntakeError::MissingEmail);
        }
        if split_address(&adopter_email).is_none() {
            return Err(IntakeError::InvalidEmail {
                email: adopter_email,
            });
        }

        let email_suggestion = suggest_email_correction(&adopter_email);

        let ignored_keys = answers.unknown_keys();
        if !ignored_keys.is_empty() {
            debug!(?ignored_keys, "dropping form keys outside the rubric");
            answers.retain_questions();
        }

        let profile = AdopterProfile {
            adopter_email,
            animal,
            answers,
            ignored_keys,
        };

        Ok((profile, email_suggestion))
    }
}
