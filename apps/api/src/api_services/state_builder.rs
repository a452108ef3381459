use std::sync::Arc;

use teamroles_application::{MembershipRepository, RoleRepository};
use teamroles_core::AppError;
use teamroles_infrastructure::{
    HttpDirectoryClient, HttpTeamDirectory, HttpUserDirectory, InMemoryMembershipRepository,
    InMemoryRoleRepository, PostgresMembershipRepository, PostgresRoleRepository,
};
use tracing::{info, warn};

use crate::api_config::{ApiConfig, StorageBackend};
use crate::state::AppState;

use super::connect_and_migrate;

/// Role and membership stores selected by `STORAGE_BACKEND`.
pub struct Repositories {
    pub role_repository: Arc<dyn RoleRepository>,
    pub membership_repository: Arc<dyn MembershipRepository>,
}

pub async fn build_repositories(config: &ApiConfig) -> Result<Repositories, AppError> {
    match &config.storage_backend {
        StorageBackend::Postgres { database_url } => {
            let pool = connect_and_migrate(database_url).await?;
            info!("using postgres storage backend");

            Ok(Repositories {
                role_repository: Arc::new(PostgresRoleRepository::new(pool.clone())),
                membership_repository: Arc::new(PostgresMembershipRepository::new(pool)),
            })
        }
        StorageBackend::Memory => {
            warn!("using in-memory storage backend; data is lost on restart");

            Ok(Repositories {
                role_repository: Arc::new(InMemoryRoleRepository::new()),
                membership_repository: Arc::new(InMemoryMembershipRepository::new()),
            })
        }
    }
}

pub fn build_app_state(
    repositories: Repositories,
    config: &ApiConfig,
) -> Result<AppState, AppError> {
    let http_client = HttpDirectoryClient::build_http_client(config.directory_timeout)?;

    let team_directory = HttpTeamDirectory::new(HttpDirectoryClient::new(
        http_client.clone(),
        config.teams_service_url.clone(),
        "teams",
    ));
    let user_directory = HttpUserDirectory::new(HttpDirectoryClient::new(
        http_client,
        config.users_service_url.clone(),
        "users",
    ));

    Ok(AppState::new(
        repositories.role_repository,
        repositories.membership_repository,
        Arc::new(team_directory),
        Arc::new(user_directory),
    ))
}
