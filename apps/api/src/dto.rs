mod common;
mod directory;
mod memberships;
mod roles;

pub use common::HealthResponse;
pub use directory::{TeamResponse, UserResponse};
pub use memberships::{CreateMembershipRequest, MembershipResponse, MembershipSearchQuery};
pub use roles::{CreateRoleRequest, RoleResponse, RoleSearchQuery};
