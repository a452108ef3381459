use std::sync::Arc;

use async_trait::async_trait;
use teamroles_application::{TeamDirectory, UserDirectory};
use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Team, TeamId, User, UserId};
use teamroles_infrastructure::{InMemoryMembershipRepository, InMemoryRoleRepository};

use crate::state::AppState;

pub struct StaticTeamDirectory {
    teams: Vec<Team>,
}

#[async_trait]
impl TeamDirectory for StaticTeamDirectory {
    async fn get_team(&self, team_id: TeamId) -> AppResult<Option<Team>> {
        Ok(self.teams.iter().find(|team| team.id == team_id).cloned())
    }

    async fn get_teams(&self) -> AppResult<Vec<Team>> {
        Ok(self.teams.clone())
    }
}

pub struct StaticUserDirectory {
    users: Vec<User>,
}

#[async_trait]
impl UserDirectory for StaticUserDirectory {
    async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        Ok(self.users.iter().find(|user| user.id == user_id).cloned())
    }

    async fn get_users(&self) -> AppResult<Vec<User>> {
        Ok(self.users.clone())
    }
}

pub struct UnreachableTeamDirectory;

#[async_trait]
impl TeamDirectory for UnreachableTeamDirectory {
    async fn get_team(&self, _team_id: TeamId) -> AppResult<Option<Team>> {
        Err(unreachable_error())
    }

    async fn get_teams(&self) -> AppResult<Vec<Team>> {
        Err(unreachable_error())
    }
}

fn unreachable_error() -> AppError {
    AppError::Transport("teams request failed: connection refused".to_owned())
}

pub fn memory_state(teams: Vec<Team>, users: Vec<User>) -> AppState {
    memory_state_with_teams(Arc::new(StaticTeamDirectory { teams }), users)
}

pub fn memory_state_with_teams(
    team_directory: Arc<dyn TeamDirectory>,
    users: Vec<User>,
) -> AppState {
    AppState::new(
        Arc::new(InMemoryRoleRepository::new()),
        Arc::new(InMemoryMembershipRepository::new()),
        team_directory,
        Arc::new(StaticUserDirectory { users }),
    )
}

pub fn team(members: &[UserId]) -> Team {
    Team {
        id: TeamId::new(),
        name: "System Team".to_owned(),
        team_lead_id: None,
        team_member_ids: members.iter().copied().collect(),
    }
}

pub fn user(id: UserId) -> User {
    User {
        id,
        display_name: "Ada Lovelace".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        avatar_url: None,
        location: None,
    }
}
