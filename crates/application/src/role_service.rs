use std::sync::Arc;

use tracing::info;

use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{Role, RoleId, TeamId, UserId};

use crate::{MembershipService, RoleRepository};

/// Input payload for creating roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRoleInput {
    /// Unique, non-blank role name.
    pub name: String,
}

/// Application service for role creation and lookups.
#[derive(Clone)]
pub struct RoleService {
    repository: Arc<dyn RoleRepository>,
    membership_service: MembershipService,
}

impl RoleService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(repository: Arc<dyn RoleRepository>, membership_service: MembershipService) -> Self {
        Self {
            repository,
            membership_service,
        }
    }

    /// Creates a role with a generated identifier.
    pub async fn create_role(&self, input: CreateRoleInput) -> AppResult<Role> {
        let role = Role::new(input.name)?;

        if self.repository.find_by_name(role.name()).await?.is_some() {
            return Err(AppError::already_exists(ResourceKind::Role));
        }

        let role = self.repository.save(role).await?;
        info!(role_id = %role.id(), role_name = role.name(), "role created");

        Ok(role)
    }

    /// Returns a role by identifier.
    pub async fn get_role(&self, role_id: RoleId) -> AppResult<Role> {
        self.repository
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::not_found(ResourceKind::Role, role_id))
    }

    /// Returns every stored role in store order.
    pub async fn get_roles(&self) -> AppResult<Vec<Role>> {
        self.repository.find_all().await
    }

    /// Returns the role a user holds within a team.
    ///
    /// Failures from the membership lookup propagate unchanged.
    pub async fn get_role_for_member(&self, user_id: UserId, team_id: TeamId) -> AppResult<Role> {
        let membership = self
            .membership_service
            .get_membership(user_id, team_id)
            .await?;

        self.get_role(membership.role_id()).await
    }
}
