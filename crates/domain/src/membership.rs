use crate::{MembershipId, RoleId, TeamId, UserId};

/// Binding of one role to one user within one team.
///
/// At most one membership exists per `(user_id, team_id)` pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Membership {
    id: MembershipId,
    role_id: RoleId,
    user_id: UserId,
    team_id: TeamId,
}

impl Membership {
    /// Creates a membership with a freshly generated identifier.
    #[must_use]
    pub fn new(role_id: RoleId, user_id: UserId, team_id: TeamId) -> Self {
        Self::from_parts(MembershipId::new(), role_id, user_id, team_id)
    }

    /// Rebuilds a membership from stored values.
    #[must_use]
    pub fn from_parts(
        id: MembershipId,
        role_id: RoleId,
        user_id: UserId,
        team_id: TeamId,
    ) -> Self {
        Self {
            id,
            role_id,
            user_id,
            team_id,
        }
    }

    /// Returns the membership identifier.
    #[must_use]
    pub fn id(&self) -> MembershipId {
        self.id
    }

    /// Returns the assigned role.
    #[must_use]
    pub fn role_id(&self) -> RoleId {
        self.role_id
    }

    /// Returns the user holding the role.
    #[must_use]
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the team the role applies to.
    #[must_use]
    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    /// Returns true when this membership binds the given user and team.
    #[must_use]
    pub fn binds(&self, user_id: UserId, team_id: TeamId) -> bool {
        self.user_id == user_id && self.team_id == team_id
    }
}
