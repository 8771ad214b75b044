//! Error types for store operations.

use companion_core::ParseError;
use thiserror::Error;

/// A form field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// A required field was left empty.
    #[error("{0} is required")]
    Missing(&'static str),

    /// The password is shorter than the configured minimum.
    #[error("password must be at least {min} characters")]
    PasswordTooShort { min: usize },
}

/// Errors returned by the store's form, wizard and config helpers.
///
/// The core state actions never fail; these only come from the
/// validating entry points layered on top of them.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The action needs a signed-in user. The sign-in prompt has been raised.
    #[error("sign in required")]
    NotAuthenticated,

    /// Submitted form data was invalid.
    #[error("invalid form: {0}")]
    Form(#[from] FormError),

    /// No built-in or custom character has this id.
    #[error("unknown character: {0}")]
    UnknownCharacter(String),

    /// The image wizard was driven out of order.
    #[error("image wizard: {0}")]
    Wizard(String),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(String),

    /// A string could not be parsed into a domain value.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
