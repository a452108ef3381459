//! Hand-written port fakes shared by service tests.

use std::collections::BTreeSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{Membership, MembershipId, Role, RoleId, Team, TeamId, User, UserId};

use crate::{MembershipRepository, RoleRepository, TeamDirectory, UserDirectory};

/// Ordered record of port calls shared between fakes.
#[derive(Debug, Clone, Default)]
pub(crate) struct CallLog(Arc<Mutex<Vec<&'static str>>>);

impl CallLog {
    async fn record(&self, call: &'static str) {
        self.0.lock().await.push(call);
    }

    pub(crate) async fn calls(&self) -> Vec<&'static str> {
        self.0.lock().await.clone()
    }
}

#[derive(Default)]
pub(crate) struct FakeRoleRepository {
    roles: Mutex<Vec<Role>>,
    log: CallLog,
}

impl FakeRoleRepository {
    pub(crate) fn with_roles(roles: Vec<Role>) -> Self {
        Self {
            roles: Mutex::new(roles),
            log: CallLog::default(),
        }
    }

    pub(crate) fn logging_to(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }
}

#[async_trait]
impl RoleRepository for FakeRoleRepository {
    async fn save(&self, role: Role) -> AppResult<Role> {
        self.log.record("roles.save").await;
        let mut roles = self.roles.lock().await;
        if roles.iter().any(|stored| stored.name() == role.name()) {
            return Err(AppError::already_exists(ResourceKind::Role));
        }
        roles.push(role.clone());
        Ok(role)
    }

    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        self.log.record("roles.find_by_id").await;
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.id() == role_id)
            .cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        self.log.record("roles.find_by_name").await;
        Ok(self
            .roles
            .lock()
            .await
            .iter()
            .find(|role| role.name() == name)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        self.log.record("roles.find_all").await;
        Ok(self.roles.lock().await.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeMembershipRepository {
    memberships: Mutex<Vec<Membership>>,
    stale_reads: bool,
    log: CallLog,
}

impl FakeMembershipRepository {
    pub(crate) fn with_memberships(memberships: Vec<Membership>) -> Self {
        Self {
            memberships: Mutex::new(memberships),
            ..Self::default()
        }
    }

    /// Pair lookups always miss, as if a concurrent writer had not committed yet.
    pub(crate) fn with_stale_reads(mut self) -> Self {
        self.stale_reads = true;
        self
    }

    pub(crate) fn logging_to(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub(crate) async fn stored(&self) -> Vec<Membership> {
        self.memberships.lock().await.clone()
    }
}

#[async_trait]
impl MembershipRepository for FakeMembershipRepository {
    async fn save(&self, membership: Membership) -> AppResult<Membership> {
        self.log.record("memberships.save").await;
        let mut memberships = self.memberships.lock().await;
        if memberships
            .iter()
            .any(|stored| stored.binds(membership.user_id(), membership.team_id()))
        {
            return Err(AppError::already_exists(ResourceKind::Membership));
        }
        memberships.push(membership.clone());
        Ok(membership)
    }

    async fn find_by_id(&self, membership_id: MembershipId) -> AppResult<Option<Membership>> {
        self.log.record("memberships.find_by_id").await;
        Ok(self
            .memberships
            .lock()
            .await
            .iter()
            .find(|membership| membership.id() == membership_id)
            .cloned())
    }

    async fn find_by_role_id(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        self.log.record("memberships.find_by_role_id").await;
        Ok(self
            .memberships
            .lock()
            .await
            .iter()
            .filter(|membership| membership.role_id() == role_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_id_and_team_id(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>> {
        self.log.record("memberships.find_by_user_id_and_team_id").await;
        if self.stale_reads {
            return Ok(None);
        }

        Ok(self
            .memberships
            .lock()
            .await
            .iter()
            .find(|membership| membership.binds(user_id, team_id))
            .cloned())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.memberships.lock().await.clear();
        Ok(())
    }
}

#[derive(Default)]
pub(crate) struct FakeTeamDirectory {
    teams: Vec<Team>,
    unreachable: bool,
    log: CallLog,
}

impl FakeTeamDirectory {
    pub(crate) fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams,
            ..Self::default()
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub(crate) fn logging_to(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }
}

#[async_trait]
impl TeamDirectory for FakeTeamDirectory {
    async fn get_team(&self, team_id: TeamId) -> AppResult<Option<Team>> {
        self.log.record("teams.get_team").await;
        if self.unreachable {
            return Err(AppError::Transport("teams service unavailable".to_owned()));
        }

        Ok(self.teams.iter().find(|team| team.id == team_id).cloned())
    }

    async fn get_teams(&self) -> AppResult<Vec<Team>> {
        self.log.record("teams.get_teams").await;
        if self.unreachable {
            return Err(AppError::Transport("teams service unavailable".to_owned()));
        }

        Ok(self.teams.clone())
    }
}

#[derive(Default)]
pub(crate) struct FakeUserDirectory {
    users: Vec<User>,
    unreachable: bool,
    log: CallLog,
}

impl FakeUserDirectory {
    pub(crate) fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::default()
        }
    }

    pub(crate) fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub(crate) fn logging_to(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }
}

#[async_trait]
impl UserDirectory for FakeUserDirectory {
    async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        self.log.record("users.get_user").await;
        if self.unreachable {
            return Err(AppError::Transport("users service unavailable".to_owned()));
        }

        Ok(self.users.iter().find(|user| user.id == user_id).cloned())
    }

    async fn get_users(&self) -> AppResult<Vec<User>> {
        self.log.record("users.get_users").await;
        if self.unreachable {
            return Err(AppError::Transport("users service unavailable".to_owned()));
        }

        Ok(self.users.clone())
    }
}

pub(crate) fn team_with_members(members: Vec<UserId>) -> Team {
    Team {
        id: TeamId::new(),
        name: "Ordinary Coral Lynx".to_owned(),
        team_lead_id: None,
        team_member_ids: members.into_iter().collect::<BTreeSet<_>>(),
    }
}

pub(crate) fn user() -> User {
    User {
        id: UserId::new(),
        display_name: "gianniWehner".to_owned(),
        first_name: Some("Gianni".to_owned()),
        last_name: Some("Wehner".to_owned()),
        avatar_url: None,
        location: None,
    }
}

pub(crate) fn role(name: &str) -> Role {
    match Role::new(name) {
        Ok(role) => role,
        Err(error) => panic!("test role '{name}' is invalid: {error}"),
    }
}
