use std::sync::Arc;

use teamroles_core::{AppError, AppResult, ResourceKind};
use teamroles_domain::{Team, TeamId};

use crate::TeamDirectory;

/// Application service for team lookups against the Teams service.
#[derive(Clone)]
pub struct TeamService {
    directory: Arc<dyn TeamDirectory>,
}

impl TeamService {
    /// Creates a new service from a directory implementation.
    #[must_use]
    pub fn new(directory: Arc<dyn TeamDirectory>) -> Self {
        Self { directory }
    }

    /// Returns the team or `NotFound(Team, id)`.
    ///
    /// Every call re-fetches from the directory.
    pub async fn get_team(&self, team_id: TeamId) -> AppResult<Team> {
        self.directory
            .get_team(team_id)
            .await?
            .ok_or_else(|| AppError::not_found(ResourceKind::Team, team_id))
    }

    /// Returns every team known to the directory.
    pub async fn get_teams(&self) -> AppResult<Vec<Team>> {
        self.directory.get_teams().await
    }
}
