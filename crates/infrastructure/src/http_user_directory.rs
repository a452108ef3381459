use async_trait::async_trait;

use teamroles_application::UserDirectory;
use teamroles_core::AppResult;
use teamroles_domain::{User, UserId};

use crate::HttpDirectoryClient;

/// Users service adapter over `GET /v1/users`.
#[derive(Clone)]
pub struct HttpUserDirectory {
    client: HttpDirectoryClient,
}

impl HttpUserDirectory {
    /// Creates a directory from a client rooted at the Users service.
    #[must_use]
    pub fn new(client: HttpDirectoryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn get_user(&self, user_id: UserId) -> AppResult<Option<User>> {
        self.client
            .fetch_optional(format!("v1/users/{user_id}").as_str())
            .await
    }

    async fn get_users(&self) -> AppResult<Vec<User>> {
        self.client.fetch_all("v1/users").await
    }
}
