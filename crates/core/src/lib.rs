//! Shared primitives for all Rust crates in the team roles service.

#![forbid(unsafe_code)]

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across team roles crates.
pub type AppResult<T> = Result<T, AppError>;

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Entity kinds named in user-facing error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Role records owned by this service.
    Role,
    /// Role-to-user-in-team bindings owned by this service.
    Membership,
    /// Teams owned by the Teams service.
    Team,
    /// Users owned by the Users service.
    User,
}

impl ResourceKind {
    /// Returns the display name used in messages.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Role => "Role",
            Self::Membership => "Membership",
            Self::Team => "Team",
            Self::User => "User",
        }
    }
}

impl Display for ResourceKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Common application error categories.
///
/// The display output is the exact message shown to API callers.
#[derive(Debug, Error)]
pub enum AppError {
    /// Caller-supplied data fails a domain precondition.
    #[error("{0}")]
    InvalidArgument(String),

    /// A uniqueness invariant would be violated by the write.
    #[error("{0}")]
    AlreadyExists(String),

    /// Referenced resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A required call parameter was absent.
    #[error("{0} is required")]
    MissingArgument(String),

    /// A downstream service could not be reached or answered unexpectedly.
    #[error("transport error: {0}")]
    Transport(String),

    /// Internal unexpected error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Builds `Invalid '<Kind>' object`.
    #[must_use]
    pub fn invalid_argument(kind: ResourceKind) -> Self {
        Self::InvalidArgument(format!("Invalid '{kind}' object"))
    }

    /// Builds `Invalid '<Kind>' object. <detail>`.
    #[must_use]
    pub fn invalid_argument_with(kind: ResourceKind, detail: impl Display) -> Self {
        Self::InvalidArgument(format!("Invalid '{kind}' object. {detail}"))
    }

    /// Builds `<Kind> already exists`.
    #[must_use]
    pub fn already_exists(kind: ResourceKind) -> Self {
        Self::AlreadyExists(format!("{kind} already exists"))
    }

    /// Builds `<Kind> <id> not found`.
    #[must_use]
    pub fn not_found(kind: ResourceKind, id: impl Display) -> Self {
        Self::NotFound(format!("{kind} {id} not found"))
    }

    /// Builds `<Kind> <first> <second> not found` for composite lookups.
    #[must_use]
    pub fn not_found_pair(kind: ResourceKind, first: impl Display, second: impl Display) -> Self {
        Self::NotFound(format!("{kind} {first} {second} not found"))
    }

    /// Builds `<name> is required`.
    #[must_use]
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument(name.into())
    }
}
