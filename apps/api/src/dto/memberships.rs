use serde::{Deserialize, Serialize};
use teamroles_application::AssignRoleInput;
use teamroles_core::{AppError, AppResult};
use teamroles_domain::{Membership, RoleId, TeamId, UserId};
use ts_rs::TS;
use uuid::Uuid;

/// Incoming payload for assigning a role to a team member.
#[derive(Debug, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/create-membership-request.ts"
)]
pub struct CreateMembershipRequest {
    pub role_id: Option<Uuid>,
    pub team_member_id: Option<Uuid>,
    pub team_id: Option<Uuid>,
}

impl CreateMembershipRequest {
    /// A missing `roleId` is left for the membership service to reject.
    pub fn into_input(self) -> AppResult<AssignRoleInput> {
        let user_id = self
            .team_member_id
            .ok_or_else(|| AppError::missing_argument("teamMemberId"))?;
        let team_id = self
            .team_id
            .ok_or_else(|| AppError::missing_argument("teamId"))?;

        Ok(AssignRoleInput {
            role_id: self.role_id.map(RoleId::from_uuid),
            user_id: UserId::from_uuid(user_id),
            team_id: TeamId::from_uuid(team_id),
        })
    }
}

/// API representation of a membership.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/membership-response.ts"
)]
pub struct MembershipResponse {
    pub id: Uuid,
    pub role_id: Uuid,
    pub team_member_id: Uuid,
    pub team_id: Uuid,
}

impl From<Membership> for MembershipResponse {
    fn from(value: Membership) -> Self {
        Self {
            id: value.id().as_uuid(),
            role_id: value.role_id().as_uuid(),
            team_member_id: value.user_id().as_uuid(),
            team_id: value.team_id().as_uuid(),
        }
    }
}

/// Query parameters for listing the memberships of a role.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipSearchQuery {
    pub role_id: Option<Uuid>,
}

impl MembershipSearchQuery {
    pub fn into_role_id(self) -> AppResult<RoleId> {
        self.role_id
            .map(RoleId::from_uuid)
            .ok_or_else(|| AppError::missing_argument("roleId"))
    }
}
