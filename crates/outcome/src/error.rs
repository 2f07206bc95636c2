use std::any::Any;

use thiserror::Error;

/// Raised by `Option::unwrap` / `Option::expect` on an absent value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid option access: {message}")]
pub struct OptionError {
    message: String,
}

impl OptionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Raised by `Result::unwrap`, `unwrap_err`, `expect` and `expect_err` when
/// the other alternative is active.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid result access: {message}")]
pub struct ResultError {
    message: String,
}

impl ResultError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Either kind of invalid container access, recovered from an unwinding panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    #[error(transparent)]
    OptionAccess(#[from] OptionError),
    #[error(transparent)]
    ResultAccess(#[from] ResultError),
}

impl AccessError {
    /// Recovers the typed error from a panic payload. Payloads raised by
    /// anything else are handed back unchanged.
    pub fn from_payload(payload: Box<dyn Any + Send>) -> Result<Self, Box<dyn Any + Send>> {
        let payload = match payload.downcast::<OptionError>() {
            Ok(err) => return Ok(Self::OptionAccess(*err)),
            Err(payload) => payload,
        };
        match payload.downcast::<ResultError>() {
            Ok(err) => Ok(Self::ResultAccess(*err)),
            Err(payload) => Err(payload),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::OptionAccess(err) => err.message(),
            Self::ResultAccess(err) => err.message(),
        }
    }
}

/// A diagnostic configuration value that could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown backtrace mode `{0}` (expected off, env or force)")]
pub struct ConfigError(pub String);
