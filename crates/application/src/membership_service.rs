use std::sync::Arc;

use tracing::{debug, info};

use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{Membership, RoleId, TeamId, UserId};

use crate::{MembershipRepository, RoleRepository, TeamService, UserService};

const USER_NOT_IN_TEAM: &str = "The provided user doesn't belong to the provided team.";

/// Input payload for assigning a role to a user within a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssignRoleInput {
    /// Role to assign. `None` covers both a missing role and a role without id.
    pub role_id: Option<RoleId>,
    /// User receiving the role.
    pub user_id: UserId,
    /// Team the role applies to.
    pub team_id: TeamId,
}

/// Application service for validated membership writes and lookups.
#[derive(Clone)]
pub struct MembershipService {
    membership_repository: Arc<dyn MembershipRepository>,
    role_repository: Arc<dyn RoleRepository>,
    team_service: TeamService,
    user_service: UserService,
}

impl MembershipService {
    /// Creates a new service from required dependencies.
    #[must_use]
    pub fn new(
        membership_repository: Arc<dyn MembershipRepository>,
        role_repository: Arc<dyn RoleRepository>,
        team_service: TeamService,
        user_service: UserService,
    ) -> Self {
        Self {
            membership_repository,
            role_repository,
            team_service,
            user_service,
        }
    }

    /// Validates and persists a role-to-user-in-team binding.
    ///
    /// Checks run in a fixed order and stop at the first failure: role
    /// reference, role existence, team existence, team membership of the
    /// user, then uniqueness of `(user_id, team_id)`. The final write is
    /// guarded by the store's own uniqueness constraint, so a concurrent
    /// writer that slips past the uniqueness check still yields
    /// `AlreadyExists(Membership)`.
    pub async fn assign_role_to_membership(&self, input: AssignRoleInput) -> AppResult<Membership> {
        let role_id = self
            .validate_assignment(input)
            .await
            .inspect_err(|error| debug!(%error, "membership assignment rejected"))?;

        let membership = self
            .membership_repository
            .save(Membership::new(role_id, input.user_id, input.team_id))
            .await?;

        info!(
            membership_id = %membership.id(),
            role_id = %membership.role_id(),
            user_id = %membership.user_id(),
            team_id = %membership.team_id(),
            "membership assigned"
        );

        Ok(membership)
    }

    async fn validate_assignment(&self, input: AssignRoleInput) -> AppResult<RoleId> {
        let role_id = input
            .role_id
            .ok_or_else(|| AppError::invalid_argument(ResourceKind::Role))?;

        self.role_repository
            .find_by_id(role_id)
            .await?
            .ok_or_else(|| AppError::not_found(ResourceKind::Role, role_id))?;

        let team = self.team_service.get_team(input.team_id).await?;
        if !team.has_member(input.user_id) {
            return Err(AppError::invalid_argument_with(
                ResourceKind::Membership,
                USER_NOT_IN_TEAM,
            ));
        }

        if self
            .membership_repository
            .find_by_user_id_and_team_id(input.user_id, input.team_id)
            .await?
            .is_some()
        {
            return Err(AppError::already_exists(ResourceKind::Membership));
        }

        Ok(role_id)
    }

    /// Returns every membership bound to a role, possibly none.
    pub async fn get_memberships(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        self.membership_repository.find_by_role_id(role_id).await
    }

    /// Resolves the membership of a user within a team.
    ///
    /// The user is confirmed first, then the team, then the membership, so
    /// the first missing entity decides which `NotFound` is returned.
    pub async fn get_membership(&self, user_id: UserId, team_id: TeamId) -> AppResult<Membership> {
        self.user_service.get_user(user_id).await?;
        self.team_service.get_team(team_id).await?;

        self.membership_repository
            .find_by_user_id_and_team_id(user_id, team_id)
            .await?
            .ok_or_else(|| AppError::not_found_pair(ResourceKind::Membership, user_id, team_id))
    }
}
