use serde::Serialize;
use teamroles_domain::{Team, User};
use ts_rs::TS;
use uuid::Uuid;

/// API representation of a team from the Teams service.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/team-response.ts"
)]
pub struct TeamResponse {
    pub id: Uuid,
    pub name: String,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_lead_id: Option<Uuid>,
    pub team_member_ids: Vec<Uuid>,
}

impl From<Team> for TeamResponse {
    fn from(value: Team) -> Self {
        Self {
            id: value.id.as_uuid(),
            name: value.name,
            team_lead_id: value.team_lead_id.map(|user_id| user_id.as_uuid()),
            team_member_ids: value
                .team_member_ids
                .into_iter()
                .map(|user_id| user_id.as_uuid())
                .collect(),
        }
    }
}

/// API representation of a user from the Users service.
#[derive(Debug, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(
    export,
    export_to = "../../../packages/api-types/src/generated/user-response.ts"
)]
pub struct UserResponse {
    pub id: Uuid,
    pub display_name: String,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[ts(optional)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id.as_uuid(),
            display_name: value.display_name,
            first_name: value.first_name,
            last_name: value.last_name,
            avatar_url: value.avatar_url,
            location: value.location,
        }
    }
}
