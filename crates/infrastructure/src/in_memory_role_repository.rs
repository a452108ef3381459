use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use teamroles_application::RoleRepository;
use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{Role, RoleId};

/// In-memory role repository implementation.
#[derive(Debug, Default)]
pub struct InMemoryRoleRepository {
    roles: RwLock<HashMap<RoleId, Role>>,
}

impl InMemoryRoleRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RoleRepository for InMemoryRoleRepository {
    async fn save(&self, role: Role) -> AppResult<Role> {
        let mut roles = self.roles.write().await;

        if roles
            .values()
            .any(|stored| stored.name() == role.name() && stored.id() != role.id())
        {
            return Err(AppError::already_exists(ResourceKind::Role));
        }

        roles.insert(role.id(), role.clone());
        Ok(role)
    }

    async fn find_by_id(&self, role_id: RoleId) -> AppResult<Option<Role>> {
        Ok(self.roles.read().await.get(&role_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Role>> {
        Ok(self
            .roles
            .read()
            .await
            .values()
            .find(|role| role.name() == name)
            .cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Role>> {
        let mut roles: Vec<Role> = self.roles.read().await.values().cloned().collect();
        roles.sort_by(|left, right| left.name().cmp(right.name()));

        Ok(roles)
    }
}
