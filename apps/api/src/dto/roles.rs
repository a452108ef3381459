use serde::{Deserialize, Serialize};
use teamroles_application::CreateRoleInput;
use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Role, TeamId, UserId};
use ts_rs::TS;
use uuid::Uuid;

/// Incoming payload for role creation.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-role-request.ts"
)]
pub struct CreateRoleRequest {
    pub name: Option<String>,
}

impl CreateRoleRequest {
    pub fn into_input(self) -> AppResult<CreateRoleInput> {
        let name = self.name.ok_or_else(|| AppError::missing_argument("name"))?;
        Ok(CreateRoleInput { name })
    }
}

/// API representation of a role.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/role-response.ts"
)]
pub struct RoleResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<Role> for RoleResponse {
    fn from(value: Role) -> Self {
        Self {
            id: value.id().as_uuid(),
            name: value.name().to_owned(),
        }
    }
}

/// Query parameters for looking up the role of a team member.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSearchQuery {
    pub team_member_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

impl RoleSearchQuery {
    pub fn into_pair(self) -> AppResult<(UserId, TeamId)> {
        let user_id = self
            .team_member_id
            .ok_or_else(|| AppError::missing_argument("teamMemberId"))?;
        let team_id = self
            .team_id
            .ok_or_else(|| AppError::missing_argument("teamId"))?;

        Ok((UserId::from_uuid(user_id), TeamId::from_uuid(team_id)))
    }
}
