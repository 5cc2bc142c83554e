use thiserror::Error;

/// Errors raised by domain rules in this crate.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Session names must contain at least one non-whitespace character.
    #[error("session name must not be empty")]
    EmptyName,
}
