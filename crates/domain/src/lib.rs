//! Domain entities and invariants.

#![forbid(unsafe_code)]

mod directory;
mod ids;
mod membership;
mod role;

pub use directory::{Team, User};
pub use ids::{MembershipId, RoleId, TeamId, UserId};
pub use membership::Membership;
pub use role::Role;
