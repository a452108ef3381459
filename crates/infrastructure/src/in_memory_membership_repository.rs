use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use teamroles_application::MembershipRepository;
use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{Membership, MembershipId, RoleId, TeamId, UserId};

/// In-memory membership repository implementation.
///
/// Memberships are keyed by `(user_id, team_id)`, so the uniqueness check
/// and the insert happen under one write lock.
#[derive(Debug, Default)]
pub struct InMemoryMembershipRepository {
    memberships: RwLock<HashMap<(UserId, TeamId), Membership>>,
}

impl InMemoryMembershipRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MembershipRepository for InMemoryMembershipRepository {
    async fn save(&self, membership: Membership) -> AppResult<Membership> {
        let key = (membership.user_id(), membership.team_id());
        let mut memberships = self.memberships.write().await;

        if memberships.contains_key(&key) {
            return Err(AppError::already_exists(ResourceKind::Membership));
        }

        memberships.insert(key, membership.clone());
        Ok(membership)
    }

    async fn find_by_id(&self, membership_id: MembershipId) -> AppResult<Option<Membership>> {
        Ok(self
            .memberships
            .read()
            .await
            .values()
            .find(|membership| membership.id() == membership_id)
            .cloned())
    }

    async fn find_by_role_id(&self, role_id: RoleId) -> AppResult<Vec<Membership>> {
        let mut memberships: Vec<Membership> = self
            .memberships
            .read()
            .await
            .values()
            .filter(|membership| membership.role_id() == role_id)
            .cloned()
            .collect();
        memberships.sort_by_key(Membership::id);

        Ok(memberships)
    }

    async fn find_by_user_id_and_team_id(
        &self,
        user_id: UserId,
        team_id: TeamId,
    ) -> AppResult<Option<Membership>> {
        Ok(self
            .memberships
            .read()
            .await
            .get(&(user_id, team_id))
            .cloned())
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.memberships.write().await.clear();
        Ok(())
    }
}
