use std::sync::Arc;

use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{User, UserId};

use crate::UserDirectory;

/// Application service for user lookups against the Users service.
#[derive(Clone)]
pub struct UserService {
    directory: Arc<dyn UserDirectory>,
}

impl UserService {
    /// Creates a new service from a directory implementation.
    #[must_use]
    pub fn new(directory: Arc<dyn UserDirectory>) -> Self {
        Self { directory }
    }

    /// Returns the user or `NotFound(User, id)`.
    pub async fn get_user(&self, user_id: UserId) -> AppResult<User> {
        self.directory
            .get_user(user_id)
            .await?
            .ok_or_else(|| AppError::not_found(ResourceKind::User, user_id))
    }

    /// Returns every user known to the directory.
    pub async fn get_users(&self) -> AppResult<Vec<User>> {
        self.directory.get_users().await
    }
}
