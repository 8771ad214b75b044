//! Error types shared by reply engines and domain parsing.

use thiserror::Error;

/// Errors that can occur while producing a companion reply.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// The engine has no responses to choose from.
    #[error("response pool is empty")]
    EmptyPool,
}

/// Errors produced when parsing domain enums from strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Unknown browse category.
    #[error("unknown category: {0}")]
    Category(String),

    /// Unknown navigation section.
    #[error("unknown section: {0}")]
    Section(String),

    /// Unknown image style.
    #[error("unknown image style: {0}")]
    Style(String),
}
