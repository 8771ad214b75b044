//! Validation for the sign-in/sign-up and character creation forms.

use companion_core::{CharacterDraft, DEFAULT_CUSTOM_IMAGE};

use crate::error::FormError;

/// Email and password that passed form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Validate raw form input.
    ///
    /// The email must be non-blank and the password at least `min_len`
    /// characters long. Nothing is checked against any account store.
    pub fn validate(email: &str, password: &str, min_len: usize) -> Result<Self, FormError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(FormError::Missing("email"));
        }
        if password.chars().count() < min_len {
            return Err(FormError::PasswordTooShort { min: min_len });
        }
        Ok(Self {
            email: email.to_string(),
            password: password.to_string(),
        })
    }
}

/// Check a character draft and fill in the placeholder image if none was uploaded.
pub fn validate_draft(mut draft: CharacterDraft) -> Result<CharacterDraft, FormError> {
    let required = [
        ("name", &draft.name),
        ("personality", &draft.personality),
        ("description", &draft.description),
        ("greeting", &draft.greeting),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(FormError::Missing(*field));
    }

    if draft.image.trim().is_empty() {
        draft.image = DEFAULT_CUSTOM_IMAGE.to_string();
    }
    Ok(draft)
}
