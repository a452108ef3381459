use std::sync::Arc;

use teamroles_application::{
    MembershipRepository, MembershipService, RoleRepository, RoleService, TeamDirectory,
    TeamService, UserDirectory, UserService,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub role_service: RoleService,
    pub membership_service: MembershipService,
    pub team_service: TeamService,
    pub user_service: UserService,
}

impl AppState {
    /// Wires the services on top of the given stores and directories.
    pub fn new(
        role_repository: Arc<dyn RoleRepository>,
        membership_repository: Arc<dyn MembershipRepository>,
        team_directory: Arc<dyn TeamDirectory>,
        user_directory: Arc<dyn UserDirectory>,
    ) -> Self {
        let team_service = TeamService::new(team_directory);
        let user_service = UserService::new(user_directory);
        let membership_service = MembershipService::new(
            membership_repository,
            role_repository.clone(),
            team_service.clone(),
            user_service.clone(),
        );
        let role_service = RoleService::new(role_repository, membership_service.clone());

        Self {
            role_service,
            membership_service,
            team_service,
            user_service,
        }
    }
}
