use teamroles_core::{AppError, AppResult, NonEmptyString, ResourceKind};

use crate::RoleId;

/// Named category assignable to a user within a team.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Role {
    id: RoleId,
    name: NonEmptyString,
}

impl Role {
    /// Creates a new role with a generated identifier.
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        Self::from_parts(RoleId::new(), name)
    }

    /// Rebuilds a role from stored values.
    pub fn from_parts(id: RoleId, name: impl Into<String>) -> AppResult<Self> {
        let name = NonEmptyString::new(name).map_err(|_| {
            AppError::invalid_argument_with(ResourceKind::Role, "The role name must not be blank.")
        })?;

        Ok(Self { id, name })
    }

    /// Returns the stable role identifier.
    #[must_use]
    pub fn id(&self) -> RoleId {
        self.id
    }

    /// Returns the unique role name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
