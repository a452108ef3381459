use async_trait::async_trait;

use teamroles_core::AppResult;
use teamroles_domain::{Team, TeamId, User, UserId};

/// Read-only port over the Teams service.
///
/// `Ok(None)` means the team does not exist. Transport failures are errors,
/// never absence.
#[async_trait]
pub trait TeamDirectory: Send + Sync {
    /// Looks up a team by identifier.
    async fn get_team(&self, team_id: TeamId) -> AppResult<Option<Team>>;

    /// Lists all teams.
    async fn get_teams(&self) -> AppResult<Vec<Team>>;
}

/// Read-only port over the Users service.
///
/// `Ok(None)` means the user does not exist. Transport failures are errors,
/// never absence.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Looks up a user by identifier.
    async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>>;

    /// Lists all users.
    async fn get_users(&self) -> AppResult<Vec<User>>;
}
