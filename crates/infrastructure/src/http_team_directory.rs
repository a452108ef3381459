use async_trait::async_trait;

use teamroles_application::TeamDirectory;
use teamroles_core::AppResult;
use teamroles_domain::{Team, TeamId};

use crate::HttpDirectoryClient;

/// Teams service adapter over `GET /v1/teams`.
#[derive(Clone)]
pub struct HttpTeamDirectory {
    client: HttpDirectoryClient,
}

impl HttpTeamDirectory {
    /// Creates a directory from a client rooted at the Teams service.
    #[must_use]
    pub fn new(client: HttpDirectoryClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TeamDirectory for HttpTeamDirectory {
    async fn get_team(&self, team_id: TeamId) -> AppResult<Option<Team>> {
        self.client
            .fetch_optional(format!("v1/teams/{team_id}").as_str())
            .await
    }

    async fn get_teams(&self) -> AppResult<Vec<Team>> {
        self.client.fetch_all("v1/teams").await
    }
}
