//! Read-only views of entities owned by the Teams and Users services.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{TeamId, UserId};

/// Team as reported by the Teams service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Team identifier.
    pub id: TeamId,
    /// Team display name.
    pub name: String,
    /// Optional team lead.
    #[serde(default)]
    pub team_lead_id: Option<UserId>,
    /// Users that belong to the team.
    #[serde(default, deserialize_with = "nullable_member_ids")]
    pub team_member_ids: BTreeSet<UserId>,
}

impl Team {
    /// Returns true when the user is listed among the team members.
    ///
    /// The team lead only counts when also present in the member list.
    #[must_use]
    pub fn has_member(&self, user_id: UserId) -> bool {
        self.team_member_ids.contains(&user_id)
    }
}

/// User as reported by the Users service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Name shown in user interfaces.
    pub display_name: String,
    /// Optional first name.
    #[serde(default)]
    pub first_name: Option<String>,
    /// Optional last name.
    #[serde(default)]
    pub last_name: Option<String>,
    /// Optional avatar location.
    #[serde(default)]
    pub avatar_url: Option<String>,
    /// Optional free-form location.
    #[serde(default)]
    pub location: Option<String>,
}

fn nullable_member_ids<'de, D>(deserializer: D) -> Result<BTreeSet<UserId>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<BTreeSet<UserId>>::deserialize(deserializer)?.unwrap_or_default())
}
