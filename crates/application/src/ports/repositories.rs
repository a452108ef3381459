use async_trait::async_trait;

use teamroles_core::AppResult;
use teamroles_domain::{Membership, MembershipId, Role, RoleId, TeamId, UserId};

/// Repository port for role persistence.
#[async_trait]
pub trait RoleRepository: Send + Sync {
    /// Persists a role and returns the stored value.
    ///
    /// Fails with `AlreadyExists(Role)` when the name is already taken.
    async fn save(&self, role: Role) -> AppResult<Role>;

    /// Finds a role by identifier.
    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>>;

    /// Finds a role by its unique name.
    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>>;

    /// Lists all stored roles.
    async fn find_all(&self) -> AppResult<Vec<Role>>;
}

/// Repository port for membership persistence.
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Persists a membership and returns the stored value.
    ///
    /// Implementations enforce uniqueness of `(user_id, team_id)` at the
    /// storage boundary and report a violation as `AlreadyExists(Membership)`.
    async fn save(&self, membership: Membership) -> AppResult<Membership>;

    /// Finds a membership by identifier.
    async fn find_by_id(&self, membership_id: MembershipId) -> AppResult<Option<Membership>>;

    /// Lists memberships bound to a role.
    async fn find_by_role_id(&self, role_id: RoleId) -> AppResult<Vec<Membership>>;

    /// Finds the membership for a user within a team.
    async fn find_by_user_id_and_team_id(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>>;

    /// Removes every membership. Test support only.
    async fn delete_all(&self) -> AppResult<()>;
}
