//! Application services and ports.

#![forbid(unsafe_code)]

mod membership_service;
mod ports;
mod role_service;
mod team_service;
mod user_service;

#[cfg(test)]
mod test_doubles;

pub use membership_service::{AssignRoleInput, MembershipService};
pub use ports::{MembershipRepository, RoleRepository, TeamDirectory, UserDirectory};
pub use role_service::{CreateRoleInput, RoleService};
pub use team_service::TeamService;
pub use user_service::UserService;
